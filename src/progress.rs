//! Progress bar display for packaging runs

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display over the libraries of one packaging run
///
/// Drawn on stderr, so the stdout duplicate/summary lines are unaffected.
pub struct PackageProgress {
    library_pb: ProgressBar,
}

impl PackageProgress {
    /// Create a new progress display with total library count
    pub fn new(total_libraries: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let library_pb = ProgressBar::new(total_libraries);
        library_pb.set_style(style);

        Self { library_pb }
    }

    /// Update to show the library currently being archived
    pub fn update_library(&self, package: &str) {
        self.library_pb.set_message(package.to_string());
    }

    /// Increment library progress
    pub fn inc(&self) {
        self.library_pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.library_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.library_pb.abandon();
    }
}
