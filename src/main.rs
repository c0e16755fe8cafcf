use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wikisearch::app::{self, RunArgs, RunOutcome};
use wikisearch::config::{find_config_file, load_config};
use wikisearch::sources::WikipediaSource;
use wikisearch::ui;

/// wikisearch - Search Wikipedia and save results to an HTML file
#[derive(Parser, Debug)]
#[command(name = "wikisearch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search Wikipedia and save results to an HTML file.", long_about = None)]
struct Cli {
    /// The search query.
    query: String,

    /// The year range in the format 'start-year-end-year'.
    #[arg(allow_hyphen_values = true)]
    year_range: Option<String>,

    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress logging below errors and the progress bar
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("wikisearch={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    ui::set_quiet(cli.quiet);

    let config_path = cli.config.clone().or_else(find_config_file);
    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }
    let config = load_config(config_path.as_deref()).context("Failed to load configuration")?;

    let source = WikipediaSource::with_endpoint(&config.api_url, &config.user_agent)?;

    let mut args = RunArgs::new(cli.query).max_results(config.max_results);
    if let Some(range) = cli.year_range {
        args = args.year_range(range);
    }

    match app::run(&source, &args, Path::new(".")).await? {
        RunOutcome::Saved(path) => tracing::debug!("saved {}", path.display()),
        RunOutcome::NoResults => tracing::debug!("nothing saved"),
        RunOutcome::InvalidYearRange(e) => tracing::debug!("aborted: {}", e),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_query_only() {
        let cli = Cli::parse_from(["wikisearch", "Alan Turing"]);
        assert_eq!(cli.query, "Alan Turing");
        assert_eq!(cli.year_range, None);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_query_and_year_range() {
        let cli = Cli::parse_from(["wikisearch", "Turing", "1930-1950"]);
        assert_eq!(cli.query, "Turing");
        assert_eq!(cli.year_range.as_deref(), Some("1930-1950"));
    }

    #[test]
    fn test_cli_leading_hyphen_year_range_is_a_value() {
        let cli = Cli::parse_from(["wikisearch", "Turing", "-1950"]);
        assert_eq!(cli.year_range, Some("-1950".to_string()));
        assert_eq!(cli.verbose, 0);
        assert!(app::parse_year_range(cli.year_range.as_deref()).is_err());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["wikisearch", "Turing", "-v"]);
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.year_range, None);

        let cli = Cli::parse_from(["wikisearch", "-vv", "Turing", "1930-1950"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.year_range.as_deref(), Some("1930-1950"));
    }

    #[test]
    fn test_cli_quiet_flag() {
        let cli = Cli::parse_from(["wikisearch", "-q", "Turing"]);
        assert!(cli.quiet);
        assert_eq!(cli.query, "Turing");
    }

    #[test]
    fn test_cli_config_path() {
        let cli = Cli::parse_from(["wikisearch", "--config", "/tmp/wikisearch.toml", "Turing"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/wikisearch.toml")));
        assert_eq!(cli.query, "Turing");
    }
}
