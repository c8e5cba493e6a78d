use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::debug;

/// Per-file move failures. Neither variant aborts the overall run; the
/// caller logs and moves on to the next file.
#[derive(Error, Debug)]
pub enum MoveError {
    #[error("source file vanished: {0}")]
    SourceMissing(PathBuf),

    #[error("move to {dest} failed: {source}")]
    MoveFailed {
        dest: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of a successful safe move.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub dest: PathBuf,
    pub backup: Option<PathBuf>,
}

/// Move `src` to `dest` without ever overwriting an existing destination.
///
/// The destination's parent directory is created if absent. An occupant at
/// `dest` is renamed to `<dest>.backup.<unix-seconds>` before the move; two
/// backups of the same destination within the same second collide and the
/// last one wins.
pub fn safe_move(src: &Path, dest: &Path) -> Result<MoveOutcome, MoveError> {
    if fs::symlink_metadata(src).is_err() {
        return Err(MoveError::SourceMissing(src.to_path_buf()));
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|err| MoveError::MoveFailed {
            dest: dest.to_path_buf(),
            source: err,
        })?;
    }

    let backup = if fs::symlink_metadata(dest).is_ok() {
        let backup_path = backup_path_for(dest);
        fs::rename(dest, &backup_path).map_err(|err| MoveError::MoveFailed {
            dest: dest.to_path_buf(),
            source: err,
        })?;
        debug!(
            "Backed up occupant of {} to {}",
            dest.display(),
            backup_path.display()
        );
        Some(backup_path)
    } else {
        None
    };

    rename_or_copy(src, dest).map_err(|err| MoveError::MoveFailed {
        dest: dest.to_path_buf(),
        source: err,
    })?;

    Ok(MoveOutcome {
        dest: dest.to_path_buf(),
        backup,
    })
}

/// Same-filesystem rename, with a copy+delete fallback so moves across
/// mount points still work.
fn rename_or_copy(src: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(src, dest) {
        Ok(()) => Ok(()),
        Err(rename_err) => match fs::copy(src, dest) {
            Ok(_) => fs::remove_file(src),
            Err(_) => Err(rename_err),
        },
    }
}

fn backup_path_for(dest: &Path) -> PathBuf {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = dest.as_os_str().to_os_string();
    name.push(format!(".backup.{}", seconds));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_plain_move() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("a.txt");
        let dest = tmp.path().join("documents").join("a.txt");
        fs::write(&src, "hello").unwrap();

        let outcome = safe_move(&src, &dest).unwrap();
        assert_eq!(outcome.dest, dest);
        assert!(outcome.backup.is_none());
        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "hello");
    }

    #[test]
    fn test_missing_source() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("gone.txt");
        let dest = tmp.path().join("documents").join("gone.txt");

        match safe_move(&src, &dest) {
            Err(MoveError::SourceMissing(path)) => assert_eq!(path, src),
            other => panic!("Expected SourceMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_occupied_destination_is_backed_up() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("report.pdf");
        let dest_dir = tmp.path().join("documents");
        let dest = dest_dir.join("report.pdf");
        fs::create_dir_all(&dest_dir).unwrap();
        fs::write(&src, "new").unwrap();
        fs::write(&dest, "old").unwrap();

        let outcome = safe_move(&src, &dest).unwrap();
        let backup = outcome.backup.expect("backup should have been created");

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
        assert_eq!(fs::read_to_string(&backup).unwrap(), "old");
        let backup_name = backup.file_name().unwrap().to_str().unwrap();
        assert!(
            backup_name.starts_with("report.pdf.backup."),
            "unexpected backup name {}",
            backup_name
        );
    }

    #[test]
    fn test_parent_directory_is_created() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("data.csv");
        let dest = tmp.path().join("research").join("data.csv");
        fs::write(&src, "x").unwrap();

        safe_move(&src, &dest).unwrap();
        assert!(dest.exists());
    }
}
