/// Trait for reporting organize-run progress.
///
/// The CLI implements this with indicatif spinners; tests and embedders use
/// `SilentReporter`. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    fn on_scan_start(&self) {}
    fn on_scan_complete(&self, _total_files: usize, _matched: usize) {}
    fn on_category_start(&self, _category: &'static str, _files: usize) {}
    fn on_category_complete(&self, _category: &'static str, _moved: usize, _errors: usize) {}
    fn on_run_complete(&self, _processed: usize, _errors: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
