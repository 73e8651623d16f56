use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::options::{MediaKind, TimestampSource};
use crate::report::SkipReason;
use crate::timestamp::{self, Capture};
use crate::{exif, filesystem, naming, probe};
use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// What the pipeline decided for one file.
#[derive(Debug, Clone)]
pub enum Action {
    Skip(SkipReason),
    Rename {
        to: PathBuf,
        source: TimestampSource,
    },
}

/// Decide what to do with a single file.
///
/// Pipeline: classify extension, skip canonical stems, rewrite legacy
/// export names directly, otherwise resolve the earliest known timestamp
/// and build the canonical name. Pure planning; nothing is renamed here.
///
/// # Errors
/// Returns an error for non-UTF-8 names and for the (practically
/// unreachable) case where no timestamp at all can be determined.
pub fn plan(path: &Path, meta: &Metadata, config: &Config) -> Result<Action> {
    let (stem, ext) = filesystem::stem_and_extension(path)?;

    let Some(kind) = MediaKind::from_extension(&ext) else {
        return Ok(Action::Skip(SkipReason::UnsupportedExtension));
    };
    if !config.allows_extension(&ext) {
        return Ok(Action::Skip(SkipReason::UnsupportedExtension));
    }

    // すでに接頭辞付きのファイルはスキップ（再実行を冪等にする）
    if naming::is_canonical(&stem) {
        return Ok(Action::Skip(SkipReason::AlreadyCanonical));
    }

    // Legacy export names carry their own date; no probing needed.
    if let Some(rewritten) = naming::rewrite_legacy_apple(&stem) {
        let name = format!("{rewritten}.{}", ext.to_ascii_lowercase());
        return planned_rename(path, &name, TimestampSource::LegacyName);
    }

    let capture = if config.no_metadata {
        Capture::Unavailable
    } else {
        match kind {
            MediaKind::Image => exif::capture_time(path),
            MediaKind::Video => probe::capture_time(path),
        }
    };

    let resolved = timestamp::resolve_from_metadata(meta, capture)
        .ok_or_else(|| crate::error::EngineError::NoTimestamp(path.to_path_buf()))?;

    let name = naming::format_name(&resolved.timestamp, &stem, &ext);
    planned_rename(path, &name, resolved.source)
}

/// Build the rename action, rejecting a target that already exists.
///
/// Checking here rather than only at apply time keeps the dry-run plan
/// honest: a collision the real run would refuse shows up as an error in
/// the preview too.
fn planned_rename(path: &Path, name: &str, source: TimestampSource) -> Result<Action> {
    let to = sibling(path, name);
    if to.exists() {
        return Err(EngineError::TargetExists(to));
    }
    Ok(Action::Rename { to, source })
}

fn sibling(path: &Path, name: &str) -> PathBuf {
    path.parent()
        .map_or_else(|| PathBuf::from(name), |parent| parent.join(name))
}
