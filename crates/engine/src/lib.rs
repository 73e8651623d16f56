// crates/engine/src/lib.rs

pub mod config;
pub mod error;
pub mod exif;
pub mod filesystem;
pub mod naming;
pub mod options;
pub mod probe;
pub mod processor;
pub mod report;
pub mod sequence;
pub mod timestamp;

use crate::config::Config;
use crate::error::Result;
use crate::processor::Action;
use crate::report::{RenameRecord, RunResult};

pub use crate::sequence::run_sequence;

/// Run a stamping pass over the configured directory.
///
/// Files are processed strictly sequentially; each rename is an independent
/// same-directory filesystem call. Under `dry_run` the full plan is
/// computed and reported without touching the disk.
///
/// # Errors
///
/// Returns an error for critical failures (unreadable root directory, or
/// any per-file error when `strict` is set). Otherwise per-file errors are
/// collected in `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    let entries = filesystem::list_dir(&config.root)?;
    let mut result = RunResult::default();

    for (path, meta) in entries {
        match process_one(&path, &meta, config) {
            Ok(Outcome::Renamed(record)) => result.renamed.push(record),
            Ok(Outcome::Skipped(reason)) => result.skipped.push((path, reason)),
            Err(e) if config.strict => return Err(e),
            Err(e) => result.errors.push((path, e)),
        }
    }

    Ok(result)
}

enum Outcome {
    Renamed(RenameRecord),
    Skipped(crate::report::SkipReason),
}

fn process_one(
    path: &std::path::Path,
    meta: &std::fs::Metadata,
    config: &Config,
) -> Result<Outcome> {
    match processor::plan(path, meta, config)? {
        Action::Skip(reason) => Ok(Outcome::Skipped(reason)),
        Action::Rename { to, source } => {
            if !config.dry_run {
                filesystem::rename(path, &to)?;
            }
            Ok(Outcome::Renamed(RenameRecord {
                from: path.to_path_buf(),
                to,
                source,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SkipReason;
    use regex::Regex;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir) -> Config {
        Config {
            root: dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn full_pass_renames_and_skips() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vacation.jpg"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::write(dir.path().join("20230501_100000_old.jpg"), b"x").unwrap();

        let result = run(&config_for(&dir)).unwrap();
        assert!(result.is_clean());
        assert_eq!(result.renamed.len(), 1);
        assert_eq!(result.skipped.len(), 2);

        let renamed = result.renamed[0].to.file_name().unwrap().to_str().unwrap();
        let re = Regex::new(r"^\d{8}_\d{6}_vacation\.jpg$").unwrap();
        assert!(re.is_match(renamed), "unexpected name: {renamed}");
        assert!(result.renamed[0].to.exists());
        assert!(!dir.path().join("vacation.jpg").exists());
        // Unsupported extension left alone
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn second_pass_is_a_noop() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vacation.jpg"), b"x").unwrap();

        let config = config_for(&dir);
        let first = run(&config).unwrap();
        assert_eq!(first.renamed.len(), 1);

        let second = run(&config).unwrap();
        assert!(second.renamed.is_empty());
        assert_eq!(second.skipped.len(), 1);
        assert_eq!(second.skipped[0].1, SkipReason::AlreadyCanonical);
    }

    #[test]
    fn dry_run_reports_without_renaming() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vacation.jpg"), b"x").unwrap();

        let config = Config {
            dry_run: true,
            ..config_for(&dir)
        };
        let result = run(&config).unwrap();
        assert_eq!(result.renamed.len(), 1);
        assert!(dir.path().join("vacation.jpg").exists());
        assert!(!result.renamed[0].to.exists());
    }

    #[test]
    fn collision_is_a_per_file_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("2019_03_01_12_30_IMG_1.jpg"), b"new").unwrap();
        fs::write(dir.path().join("20190301_123000_IMG_1.jpg"), b"old").unwrap();

        let result = run(&config_for(&dir)).unwrap();
        assert!(result.renamed.is_empty());
        assert_eq!(result.errors.len(), 1);
        // The colliding source is left in place.
        assert!(dir.path().join("2019_03_01_12_30_IMG_1.jpg").exists());
        assert_eq!(
            fs::read(dir.path().join("20190301_123000_IMG_1.jpg")).unwrap(),
            b"old"
        );
    }

    #[test]
    fn dry_run_reports_collisions_instead_of_planning_them() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("2019_03_01_12_30_IMG_1.jpg"), b"new").unwrap();
        fs::write(dir.path().join("20190301_123000_IMG_1.jpg"), b"old").unwrap();

        let config = Config {
            dry_run: true,
            ..config_for(&dir)
        };
        let result = run(&config).unwrap();
        // The preview must not promise a rename the real run would refuse.
        assert!(result.renamed.is_empty());
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn strict_mode_fails_on_first_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("2019_03_01_12_30_IMG_1.jpg"), b"new").unwrap();
        fs::write(dir.path().join("20190301_123000_IMG_1.jpg"), b"old").unwrap();

        let config = Config {
            strict: true,
            ..config_for(&dir)
        };
        assert!(run(&config).is_err());
    }

    #[test]
    fn missing_root_is_a_critical_error() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            root: dir.path().join("missing"),
            ..Config::default()
        };
        assert!(run(&config).is_err());
    }
}
