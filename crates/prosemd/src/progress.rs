//! Progress bar for batch scoring.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;

/// A progress indicator that wraps indicatif.
pub(crate) struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a bar counting up to `total` documents.
    ///
    /// The bar is only shown if:
    /// - `enabled` is true
    /// - stderr is a TTY
    /// - NO_COLOR env var is not set
    /// - PROSEMD_NO_PROGRESS env var is not set
    pub(crate) fn new(total: usize, enabled: bool) -> Self {
        let should_show = enabled && total > 1 && is_interactive();

        let bar = should_show.then(|| {
            let pb = ProgressBar::new(total as u64);
            if let Ok(style) =
                ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")
            {
                pb.set_style(style.progress_chars("=> "));
            }
            pb.set_message("scoring");
            pb
        });

        Self { bar }
    }

    /// Record one finished document.
    pub(crate) fn inc(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Finish and clear the bar.
    pub(crate) fn finish_and_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Check if we should draw to the terminal.
fn is_interactive() -> bool {
    if !std::io::stderr().is_terminal() {
        return false;
    }

    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("PROSEMD_NO_PROGRESS").is_some() {
        return false;
    }

    true
}
