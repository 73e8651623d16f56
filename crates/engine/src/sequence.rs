//! Sequential renumbering variant.
//!
//! Moves every file from a source directory into a destination directory,
//! renaming to a zero-padded running index (`00001.<fmt>`, …). Numbering
//! continues after whatever the destination already holds, probing forward
//! past occupied slots.

use crate::config::SequenceOptions;
use crate::error::{EngineError, Result};
use crate::filesystem;
use crate::report::SequenceResult;
use std::fs;
use std::path::PathBuf;

/// Move and renumber every file of the source directory.
///
/// Same-device moves only (plain `fs::rename`, like the stamping pass).
///
/// # Errors
/// Returns an error when either directory is unreadable or a move fails;
/// the pass stops at the first failed move so no file is lost track of.
pub fn run_sequence(options: &SequenceOptions) -> Result<SequenceResult> {
    let sources = filesystem::list_dir(&options.source)?;
    if !options.dest.is_dir() {
        return Err(EngineError::NotADirectory(options.dest.clone()));
    }

    // Continue numbering after the files already present.
    let mut index = filesystem::list_dir(&options.dest)?.len() + 1;
    let mut result = SequenceResult::default();

    for (path, _meta) in sources {
        let target = next_free_slot(&options.dest, &mut index, &options.image_format);
        if !options.dry_run {
            fs::rename(&path, &target).map_err(|e| EngineError::Rename {
                from: path.clone(),
                to: target.clone(),
                source: e,
            })?;
        }
        log::debug!("{} -> {}", path.display(), target.display());
        result.moved.push((path, target));
        index += 1;
    }

    Ok(result)
}

fn next_free_slot(dest: &std::path::Path, index: &mut usize, format: &str) -> PathBuf {
    loop {
        let candidate = dest.join(format!("{:05}.{format}", *index));
        if !candidate.exists() {
            return candidate;
        }
        *index += 1;
    }
}
