use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct ProgressBarBuilder {
    style_template: &'static str,
    message: String,
    hidden: bool,
    enable_tick: bool,
}

impl ProgressBarBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            style_template: "{spinner:.green} [{elapsed_precise}] {msg}",
            message: message.into(),
            hidden: false,
            enable_tick: false,
        }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_tick(mut self) -> Self {
        self.enable_tick = true;
        self
    }

    /// Spinners draw on stderr; stdout stays reserved for the histogram.
    pub fn build(self) -> Result<ProgressBar> {
        if self.hidden {
            return Ok(ProgressBar::hidden());
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template(self.style_template)?);
        pb.set_message(self.message);

        if self.enable_tick {
            pb.enable_steady_tick(Duration::from_millis(200));
        }

        Ok(pb)
    }
}
