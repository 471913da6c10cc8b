//! Spinner shown while a request is pending.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Pending indicator for the one-shot mode. Draws to stderr only when it is
/// a terminal.
pub struct PendingSpinner {
    bar: ProgressBar,
}

impl PendingSpinner {
    /// Start spinning with `message`. A quiet spinner draws nothing.
    #[must_use]
    pub fn start(message: String, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Whether the spinner is drawing.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// Stop and erase the spinner.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
