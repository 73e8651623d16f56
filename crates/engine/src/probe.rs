//! Container capture-time probe for video files.
//!
//! Shells out to `ffprobe` and reads `format.tags.creation_time` from its
//! JSON document. The probe is strictly best-effort: a missing binary, a
//! non-zero exit, undecodable output or an absent tag all degrade to
//! [`Capture::Unavailable`].

use crate::timestamp::Capture;
use chrono::{DateTime, Local};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

const FFPROBE: &str = "ffprobe";

#[derive(Debug, Deserialize)]
struct ProbeDocument {
    format: Option<ProbeFormat>,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    #[serde(default)]
    tags: HashMap<String, String>,
}

/// Probe a video container for its creation-date tag.
#[must_use]
pub fn capture_time(path: &Path) -> Capture {
    let output = Command::new(FFPROBE)
        .arg("-v")
        .arg("quiet")
        .arg("-print_format")
        .arg("json")
        .arg("-show_format")
        .arg(path)
        .output();

    match output {
        Ok(out) if out.status.success() => {
            Capture::from_option(parse_creation_time(&out.stdout))
        }
        Ok(out) => {
            log::debug!("ffprobe failed on {}: {}", path.display(), out.status);
            Capture::Unavailable
        }
        Err(err) => {
            log::debug!("Could not run ffprobe: {err}");
            Capture::Unavailable
        }
    }
}

/// Parse `format.tags.creation_time` out of an ffprobe JSON document.
///
/// ffprobe writes the tag as RFC 3339 with a fractional-second part
/// (`2023-05-01T10:00:00.000000Z`); the instant is converted to local time
/// for filename formatting.
#[must_use]
pub fn parse_creation_time(json: &[u8]) -> Option<DateTime<Local>> {
    let doc: ProbeDocument = serde_json::from_slice(json).ok()?;
    let raw = doc.format?.tags.get("creation_time").cloned()?;
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Local))
}
