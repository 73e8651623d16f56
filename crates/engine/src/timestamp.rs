//! Timestamp resolution.
//!
//! The renamer picks the minimum of filesystem creation time, filesystem
//! modification time and an optional embedded capture time. Metadata probes
//! never abort a file: a failed probe yields [`Capture::Unavailable`] and is
//! simply omitted from the minimum, so the chosen timestamp can never be
//! later than the filesystem times.

use crate::options::TimestampSource;
use chrono::{DateTime, Local};
use std::fs::Metadata;

/// Outcome of a metadata probe, in place of exception-style fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    Available(DateTime<Local>),
    Unavailable,
}

impl Capture {
    #[must_use]
    pub fn from_option(value: Option<DateTime<Local>>) -> Self {
        value.map_or(Self::Unavailable, Self::Available)
    }
}

/// A resolved timestamp together with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub timestamp: DateTime<Local>,
    pub source: TimestampSource,
}

/// Minimum over the filesystem times and an available capture time.
///
/// `created` is `None` on platforms/filesystems that do not report a birth
/// time; `modified` is effectively always present. Returns `None` only when
/// nothing at all is known about the file.
#[must_use]
pub fn resolve(
    created: Option<DateTime<Local>>,
    modified: Option<DateTime<Local>>,
    capture: Capture,
) -> Option<Resolved> {
    let fs_min = match (created, modified) {
        (Some(c), Some(m)) => Some(c.min(m)),
        (c, m) => c.or(m),
    };

    match (fs_min, capture) {
        (Some(fs), Capture::Available(cap)) if cap <= fs => Some(Resolved {
            timestamp: cap,
            source: TimestampSource::Capture,
        }),
        (Some(fs), _) => Some(Resolved {
            timestamp: fs,
            source: TimestampSource::Filesystem,
        }),
        (None, Capture::Available(cap)) => Some(Resolved {
            timestamp: cap,
            source: TimestampSource::Capture,
        }),
        (None, Capture::Unavailable) => None,
    }
}

/// Resolve from `std::fs` metadata plus a probe result.
#[must_use]
pub fn resolve_from_metadata(meta: &Metadata, capture: Capture) -> Option<Resolved> {
    let created = meta.created().ok().map(DateTime::<Local>::from);
    let modified = meta.modified().ok().map(DateTime::<Local>::from);
    resolve(created, modified, capture)
}
