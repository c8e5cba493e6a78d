use crate::classifier::{self, Category};
use crate::config::AppConfig;
use crate::error::Error;
use crate::mover::{self, MoveError};
use crate::namer;
use crate::progress::ProgressReporter;
use crate::scanner::{self, FileEntry};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Directories guaranteed to exist after a run, whether or not anything
/// lands in them.
pub const CATEGORY_DIRECTORIES: [&str; 6] =
    ["audio", "reports", "documents", "research", "assets", "backups"];

/// Fixed processing order. A file is claimed by the first category it
/// matches, so every file is visited exactly once.
const CATEGORY_ORDER: [Category; 5] = [
    Category::Audio,
    Category::ReportsEmail,
    Category::ReportsWebsite,
    Category::Documents,
    Category::Research,
];

pub struct OrganizeEngine {
    config: AppConfig,
}

/// Per-category tally for one run.
#[derive(Debug, Clone)]
pub struct CategorySummary {
    pub category: Category,
    pub matched: usize,
    pub moved: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Aggregate result of one run. The engine keeps no process-wide state; the
/// caller decides what to print and how to exit.
#[derive(Debug)]
pub struct RunResult {
    pub working_dir: PathBuf,
    /// Top-level files seen by the scan, including unclassified ones.
    pub total_files: usize,
    /// Files claimed by some category.
    pub matched: usize,
    /// Successful moves.
    pub processed: usize,
    /// Sources that vanished between scan and move.
    pub skipped: usize,
    pub errors: usize,
    pub backups_created: usize,
    pub categories: Vec<CategorySummary>,
    pub duration: Duration,
}

impl OrganizeEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn with_working_dir(mut self, dir: &str) -> Self {
        self.config.working_dir = Some(dir.to_string());
        self
    }

    /// Run the full classify-then-move pass:
    /// 1. Ensure the category directories exist
    /// 2. Scan immediate children of the working directory
    /// 3. Bucket by category and move each file, backing up any occupant
    ///    at the destination
    ///
    /// Single-threaded and linear. Per-file failures are tallied, not
    /// propagated; an unreadable working directory is the only fatal error.
    pub fn run(&self, reporter: &dyn ProgressReporter) -> Result<RunResult, Error> {
        let run_start = Instant::now();
        let working_dir = self.resolve_working_dir()?;
        info!("Organizing directory: {}", working_dir.display());

        create_category_directories(&working_dir);

        reporter.on_scan_start();
        let entries = scanner::scan(&working_dir, &self.config.ignore_patterns)?;
        let total_files = entries.len();

        let mut buckets: Vec<(Category, Vec<FileEntry>)> = CATEGORY_ORDER
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();
        for entry in entries {
            let category = classifier::classify(&entry.file_name, entry.size);
            match buckets.iter_mut().find(|(c, _)| *c == category) {
                Some((_, bucket)) => bucket.push(entry),
                None => debug!("Leaving {} in place (unclassified)", entry.file_name),
            }
        }

        let matched: usize = buckets.iter().map(|(_, bucket)| bucket.len()).sum();
        reporter.on_scan_complete(total_files, matched);
        debug!("{} of {} top-level files matched a category", matched, total_files);

        let mut categories = Vec::with_capacity(buckets.len());
        let mut processed = 0;
        let mut skipped = 0;
        let mut errors = 0;
        let mut backups_created = 0;

        for (category, bucket) in &buckets {
            reporter.on_category_start(category.label(), bucket.len());
            let mut summary = CategorySummary {
                category: *category,
                matched: bucket.len(),
                moved: 0,
                skipped: 0,
                errors: 0,
            };

            for entry in bucket {
                let relative_dest = match namer::destination(*category, entry) {
                    Some(dest) => dest,
                    None => continue,
                };
                let dest = working_dir.join(relative_dest);

                match mover::safe_move(&entry.path, &dest) {
                    Ok(outcome) => {
                        if let Some(backup) = &outcome.backup {
                            info!(
                                "Backed up existing {} to {}",
                                dest.display(),
                                backup.display()
                            );
                            backups_created += 1;
                        }
                        info!("Moved {} to {}", entry.file_name, outcome.dest.display());
                        summary.moved += 1;
                        processed += 1;
                    }
                    Err(MoveError::SourceMissing(path)) => {
                        warn!("Skipping {}: source vanished", path.display());
                        summary.skipped += 1;
                        skipped += 1;
                    }
                    Err(err @ MoveError::MoveFailed { .. }) => {
                        error!("{}", err);
                        summary.errors += 1;
                        errors += 1;
                    }
                }
            }

            reporter.on_category_complete(category.label(), summary.moved, summary.errors);
            categories.push(summary);
        }

        let duration = run_start.elapsed();
        reporter.on_run_complete(processed, errors, duration.as_secs_f64());
        debug!(
            "Run completed in {:.2}s — {} of {} matched files moved, {} errors",
            duration.as_secs_f64(),
            processed,
            matched,
            errors,
        );

        Ok(RunResult {
            working_dir,
            total_files,
            matched,
            processed,
            skipped,
            errors,
            backups_created,
            categories,
            duration,
        })
    }

    /// An inaccessible working directory is the one fatal error of a run.
    /// Checked up front so directory creation below cannot materialize a
    /// mistyped path.
    fn resolve_working_dir(&self) -> Result<PathBuf, Error> {
        let dir = match &self.config.working_dir {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir()?,
        };
        fs::metadata(&dir).map_err(|err| {
            Error::Io(io::Error::new(
                err.kind(),
                format!("cannot access working directory {}: {}", dir.display(), err),
            ))
        })?;
        Ok(dir)
    }
}

/// Idempotent. A directory that cannot be created is logged as a warning and
/// the run continues best-effort; a later move into it fails and is counted.
fn create_category_directories(working_dir: &Path) {
    for dir in CATEGORY_DIRECTORIES {
        let path = working_dir.join(dir);
        if let Err(err) = fs::create_dir_all(&path) {
            warn!("Could not create {}: {}", path.display(), err);
        }
    }
}
