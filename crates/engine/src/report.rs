use crate::error::EngineError;
use crate::options::TimestampSource;
use serde::Serialize;
use std::path::PathBuf;

/// One applied (or planned, under dry-run) rename.
#[derive(Debug, Clone, Serialize)]
pub struct RenameRecord {
    pub from: PathBuf,
    pub to: PathBuf,
    pub source: TimestampSource,
}

/// Why a file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Stem already carries the timestamp prefix.
    AlreadyCanonical,
    /// Extension is outside the configured set.
    UnsupportedExtension,
}

/// Outcome of a directory pass.
///
/// Per-file errors are collected here in the default mode; `--strict`
/// surfaces the first one instead.
#[derive(Debug, Default, Serialize)]
pub struct RunResult {
    pub renamed: Vec<RenameRecord>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
    #[serde(serialize_with = "serialize_errors")]
    pub errors: Vec<(PathBuf, EngineError)>,
}

fn serialize_errors<S>(
    errors: &[(PathBuf, EngineError)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(
        errors
            .iter()
            .map(|(path, err)| (path.clone(), err.to_string())),
    )
}

impl RunResult {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome of a sequence (renumbering) pass.
#[derive(Debug, Default, Serialize)]
pub struct SequenceResult {
    pub moved: Vec<(PathBuf, PathBuf)>,
}
