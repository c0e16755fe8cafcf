//! Configuration management.
//!
//! Settings are layered, later layers winning:
//!
//! 1. built-in defaults
//! 2. a TOML file: the one given with `--config`, otherwise the first of
//!    `./wikisearch.toml` and `<config dir>/wikisearch/config.toml` that exists
//! 3. environment variables prefixed with `WIKISEARCH_`
//!
//! ```toml
//! api_url = "https://de.wikipedia.org/w/api.php"
//! max_results = 10
//! user_agent = "wikisearch/0.1 (me@example.org)"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::DEFAULT_MAX_RESULTS;
use crate::sources::{DEFAULT_USER_AGENT, WIKIPEDIA_API_URL};

/// Prefix of the environment variables that override file settings
pub const ENV_PREFIX: &str = "WIKISEARCH";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// MediaWiki `api.php` endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Hits requested from the search endpoint
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            max_results: default_max_results(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_api_url() -> String {
    WIKIPEDIA_API_URL.to_string()
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Look for a config file in the default locations
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("wikisearch.toml");
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("wikisearch").join("config.toml"))
        .filter(|path| path.is_file())
}

/// Load configuration from defaults, an optional file, and the environment
pub fn load_config(path: Option<&Path>) -> Result<Config, config::ConfigError> {
    build(path, None)
}

fn build(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> Result<Config, config::ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        )
        .build()?;

    settings.try_deserialize()
}
