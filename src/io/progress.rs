//! Per-channel progress bars for the averaging and drawing stages

use crate::render::patterner::RenderObserver;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>6} {msg:<10} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per rendered channel
///
/// Bars advance once per drawn row of cells. Safe to share between the
/// channel workers.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    channel_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            channel_bars: Vec::new(),
        }
    }

    /// Create one bar per channel label
    pub fn initialize(&mut self, labels: &[&str]) {
        for label in labels {
            let bar = ProgressBar::new(0);
            bar.set_style(PROGRESS_STYLE.clone());
            bar.set_prefix((*label).to_string());
            bar.set_message("waiting");
            self.channel_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of channel bars
    pub fn channel_count(&self) -> usize {
        self.channel_bars.len()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }

    fn bar(&self, channel: usize) -> Option<&ProgressBar> {
        self.channel_bars.get(channel)
    }
}

impl RenderObserver for ProgressManager {
    fn grid_started(&self, channel: usize) {
        if let Some(bar) = self.bar(channel) {
            bar.set_message("averaging");
        }
    }

    fn drawing_started(&self, channel: usize, rows: usize) {
        if let Some(bar) = self.bar(channel) {
            bar.set_length(rows as u64);
            bar.set_position(0);
            bar.set_message("drawing");
        }
    }

    fn row_drawn(&self, channel: usize) {
        if let Some(bar) = self.bar(channel) {
            bar.inc(1);
        }
    }

    fn finished(&self, channel: usize) {
        if let Some(bar) = self.bar(channel) {
            bar.finish_with_message("done");
        }
    }
}
