//! Progress display for batches of board files

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Boards: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many boards of a batch have been solved
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    solved: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            solved: 0,
        }
    }

    /// Create the batch bar for `file_count` boards
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
        self.solved = 0;
    }

    /// Show the board currently being processed
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Mark a board as processed
    pub fn complete_file(&mut self) {
        self.solved += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Number of boards completed since the last initialization
    pub const fn completed(&self) -> usize {
        self.solved
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All boards processed");
        }
    }
}
