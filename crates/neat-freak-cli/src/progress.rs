use indicatif::{ProgressBar, ProgressStyle};
use neat_freak_core::ProgressReporter;
use std::sync::Mutex;

/// CLI progress reporter using indicatif.
///
/// - Scan phase: spinner (file count unknown upfront)
/// - Per-category move phase: spinner with the category label
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn set_bar(&self, pb: ProgressBar) {
        let mut guard = self.bar.lock().unwrap();
        if let Some(old) = guard.take() {
            old.finish_and_clear();
        }
        *guard = Some(pb);
    }

    fn finish_bar(&self) {
        let mut guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.take() {
            pb.finish_and_clear();
        }
    }

    fn spinner(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(message);
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        self.set_bar(pb);
    }
}

impl ProgressReporter for CliReporter {
    fn on_scan_start(&self) {
        self.spinner("Scanning files...".to_string());
    }

    fn on_scan_complete(&self, total_files: usize, matched: usize) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Scan complete: {} files, {} matched a category",
            total_files, matched
        );
    }

    fn on_category_start(&self, category: &'static str, files: usize) {
        if files == 0 {
            return;
        }
        self.spinner(format!("Organizing {} ({} files)...", category, files));
    }

    fn on_category_complete(&self, category: &'static str, moved: usize, errors: usize) {
        self.finish_bar();
        if moved == 0 && errors == 0 {
            return;
        }
        eprintln!(
            "  \x1b[32m✓\x1b[0m {}: {} moved, {} errors",
            category, moved, errors
        );
    }

    fn on_run_complete(&self, processed: usize, errors: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Run complete: {} files moved, {} errors in {:.2}s",
            processed, errors, duration_secs
        );
    }
}
