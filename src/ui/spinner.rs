//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::SherpaTheme;

/// A progress spinner for long-running operations (remote calls, installs).
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .expect("static spinner template is valid"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (for quiet output).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Update the spinner message.
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    /// Mark the operation as successful.
    pub fn finish_success(&self, msg: &str) {
        let theme = SherpaTheme::new();
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").expect("valid"));
        self.bar.finish_with_message(theme.format_success(msg));
    }

    /// Mark the operation as failed.
    pub fn finish_error(&self, msg: &str) {
        let theme = SherpaTheme::new();
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").expect("valid"));
        self.bar.finish_with_message(theme.format_error(msg));
    }

    /// Remove the spinner without a final message.
    pub fn finish_clear(&self) {
        self.bar.finish_and_clear();
    }
}
