//! Terminal output: status lines and the extract-fetch progress bar.
//!
//! Status lines go to stdout; on a terminal they get a coloured icon, when
//! piped they are printed as plain text. The progress bar draws on stderr and
//! is hidden when stderr is not a terminal or quiet mode is on.

use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress progress output for the rest of the process.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Status types for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
}

/// Status icons for different operations.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Error => "✗",
        Status::Warning => "⚠",
    }
}

/// Format a status line, with a coloured icon when `styled` is set.
pub fn format_status(status: Status, msg: &str, styled: bool) -> String {
    if !styled {
        return msg.to_string();
    }

    let icon = status_icon(status);
    let icon = match status {
        Status::Success => icon.green().bold().to_string(),
        Status::Error => icon.red().bold().to_string(),
        Status::Warning => icon.yellow().bold().to_string(),
    };
    format!("{} {}", icon, msg)
}

/// Print a styled status message to stdout.
pub fn print_status(status: Status, msg: &str) {
    println!("{}", format_status(status, msg, is_terminal()));
}

/// Progress bar over the per-hit extract requests.
pub struct FetchProgress {
    bar: indicatif::ProgressBar,
}

impl FetchProgress {
    /// Create a bar for `total` extract fetches.
    pub fn new(total: usize) -> Self {
        let bar = if is_quiet() || !std::io::stderr().is_terminal() {
            indicatif::ProgressBar::hidden()
        } else {
            let bar = indicatif::ProgressBar::new(total as u64);
            if let Ok(style) = indicatif::ProgressStyle::with_template(
                "{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}",
            ) {
                bar.set_style(style.progress_chars("█▉ "));
            }
            bar
        };

        Self { bar }
    }

    /// Show which article is being fetched.
    pub fn fetching(&self, title: &str) {
        self.bar.set_message(title.to_string());
    }

    /// Mark one fetch as done.
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
