use facty_core::Report;
use facty_verify::{ProgressObserver, ProgressUpdate};
use indicatif::{ProgressBar, ProgressStyle};

/// Terminal progress bar fed by pipeline milestones.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        if quiet {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}% {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }

    pub fn finish(&self, report: &Report) {
        self.bar.finish_with_message(format!(
            "{} ({}/100)",
            report.status.label(),
            report.score
        ));
    }
}

impl ProgressObserver for ProgressReporter {
    fn on_progress(&self, update: &ProgressUpdate) {
        self.bar.set_position(u64::from(update.percent));
        self.bar.set_message(update.message.clone());
    }
}
