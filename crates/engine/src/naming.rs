//! Canonical filename policy.
//!
//! A canonical name is `YYYYMMDD_HHMMSS_<original-stem>.<ext>`. Stems that
//! already carry the prefix are never touched, which makes a directory pass
//! idempotent. One older export convention (`YYYY_MM_DD_HH_mm_IMG_*`) is
//! rewritten in place from its embedded date fields.

use chrono::{DateTime, Local};
use regex::Regex;
use std::sync::OnceLock;

/// strftime pattern for the filename prefix.
pub const PREFIX_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Build the canonical filename for a resolved timestamp.
///
/// The extension is lower-cased on the way out, matching the classification
/// in [`crate::options::MediaKind::from_extension`].
#[must_use]
pub fn format_name(timestamp: &DateTime<Local>, stem: &str, extension: &str) -> String {
    format!(
        "{}_{stem}.{}",
        timestamp.format(PREFIX_FORMAT),
        extension.to_ascii_lowercase()
    )
}

/// Whether a stem already carries the timestamp prefix.
///
/// Accepts `20230501_100000_x` and the dash/absent-separator spellings
/// (`20230501-100000_x`, `20230501100000_x`) so re-runs skip files stamped
/// by older releases as well.
#[must_use]
pub fn is_canonical(stem: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^\d{8}[_-]?\d{6}_").expect("valid canonical pattern"));
    re.is_match(stem)
}

/// Rewrite a legacy Apple export stem (`YYYY_MM_DD_HH_mm_IMG_*`) directly
/// into canonical form.
///
/// The embedded date is trusted as-is; seconds are not encoded in the old
/// convention and are filled with `00`. Returns `None` when the stem does
/// not match the convention, letting the caller fall through to timestamp
/// resolution.
#[must_use]
pub fn rewrite_legacy_apple(stem: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^(\d{4})_(\d{2})_(\d{2})_(\d{2})_(\d{2})_(IMG_.+)$")
            .expect("valid legacy pattern")
    });
    let caps = re.captures(stem)?;
    Some(format!(
        "{}{}{}_{}{}00_{}",
        &caps[1], &caps[2], &caps[3], &caps[4], &caps[5], &caps[6]
    ))
}
