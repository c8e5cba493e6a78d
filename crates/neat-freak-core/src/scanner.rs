use crate::classifier;
use glob::Pattern;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// A regular file found at the top level of the working directory.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
    /// Lowercased, empty when the name has no extension.
    pub extension: String,
}

/// List the immediate children of `dir`, filtering by glob ignore patterns.
///
/// Non-recursive by design. Skips directories and symlinks. Failure to read
/// `dir` itself is the only error returned; a child that vanishes between
/// listing and stat is skipped with a warning.
pub fn scan(dir: &Path, ignore_globs: &[String]) -> io::Result<Vec<FileEntry>> {
    let ignore_patterns = compile_patterns(ignore_globs);
    let mut entries = Vec::new();

    for entry_result in fs::read_dir(dir)? {
        let entry = entry_result?;
        let path = entry.path();

        let metadata = match fs::symlink_metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!("Error getting metadata for {}: {}", path.display(), err);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        if ignore_patterns
            .iter()
            .any(|pattern| pattern.matches_path(&path))
        {
            continue;
        }

        let file_name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_string(),
            None => {
                warn!("Skipping non-UTF8 file name: {}", path.display());
                continue;
            }
        };

        let extension = classifier::extension_of(&file_name);
        entries.push(FileEntry {
            path,
            file_name,
            size: metadata.len(),
            extension,
        });
    }

    // Deterministic processing order regardless of readdir order.
    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(entries)
}

fn compile_patterns(ignore_globs: &[String]) -> Vec<Pattern> {
    ignore_globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                error!("Invalid glob pattern '{}': {}", glob, err);
                None
            }
        })
        .collect()
}
