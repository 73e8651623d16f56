//! EXIF capture-time probe for image files.
//!
//! Looks up `DateTimeOriginal` (tag 0x9003, `YYYY:MM:DD HH:MM:SS` local
//! time). Every failure mode — unreadable file, no EXIF block, missing or
//! garbled tag — degrades to [`Capture::Unavailable`]; the caller then
//! resolves from filesystem times alone.

use crate::timestamp::Capture;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Probe an image file for its capture time.
#[must_use]
pub fn capture_time(path: &Path) -> Capture {
    let Ok(file) = File::open(path) else {
        return Capture::Unavailable;
    };
    let mut reader = BufReader::new(&file);
    match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => Capture::from_option(datetime_original(&exif)),
        Err(err) => {
            log::debug!("No EXIF data in {}: {err}", path.display());
            Capture::Unavailable
        }
    }
}

/// Extract `DateTimeOriginal` from a parsed EXIF block.
#[must_use]
pub fn datetime_original(exif: &exif::Exif) -> Option<DateTime<Local>> {
    let field = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY)?;
    let Value::Ascii(ref values) = field.value else {
        return None;
    };
    let raw = values.first().and_then(|v| std::str::from_utf8(v).ok())?;
    let naive = parse_exif_datetime(raw)?;
    Local.from_local_datetime(&naive).single()
}

fn parse_exif_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim_end_matches(['\0', ' ']), "%Y:%m:%d %H:%M:%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn push_u16(buf: &mut Vec<u8>, v: u16) {
        buf.extend_from_slice(&v.to_le_bytes());
    }

    fn push_u32(buf: &mut Vec<u8>, v: u32) {
        buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Minimal little-endian TIFF: IFD0 holding an Exif-IFD pointer, the
    /// Exif IFD holding a single DateTimeOriginal ASCII field.
    fn minimal_exif(datetime: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"II");
        push_u16(&mut buf, 42);
        push_u32(&mut buf, 8); // IFD0 offset

        // IFD0: one entry, tag 0x8769 (Exif IFD pointer) -> offset 26
        push_u16(&mut buf, 1);
        push_u16(&mut buf, 0x8769);
        push_u16(&mut buf, 4); // LONG
        push_u32(&mut buf, 1);
        push_u32(&mut buf, 26);
        push_u32(&mut buf, 0); // no next IFD

        // Exif IFD at 26: one entry, tag 0x9003 ASCII, value at offset 44
        push_u16(&mut buf, 1);
        push_u16(&mut buf, 0x9003);
        push_u16(&mut buf, 2); // ASCII
        push_u32(&mut buf, 20);
        push_u32(&mut buf, 44);
        push_u32(&mut buf, 0);

        assert_eq!(buf.len(), 44);
        buf.extend_from_slice(datetime.as_bytes());
        buf.push(0);
        buf
    }

    #[test]
    fn reads_datetime_original() {
        let exif = Reader::new()
            .read_raw(minimal_exif("2023:05:01 10:00:00"))
            .unwrap();
        assert_eq!(
            datetime_original(&exif),
            Some(Local.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn garbled_datetime_is_unavailable() {
        let exif = Reader::new()
            .read_raw(minimal_exif("not a date, sorry!!"))
            .unwrap();
        assert_eq!(datetime_original(&exif), None);
    }

    #[test]
    fn parses_exif_datetime_strings() {
        assert_eq!(
            parse_exif_datetime("2023:05:01 10:00:00\0"),
            Some(
                chrono::NaiveDate::from_ymd_opt(2023, 5, 1)
                    .unwrap()
                    .and_hms_opt(10, 0, 0)
                    .unwrap()
            )
        );
        assert_eq!(parse_exif_datetime("2023-05-01 10:00:00"), None);
        assert_eq!(parse_exif_datetime(""), None);
    }

    #[test]
    fn non_image_file_is_unavailable() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"plain text, no markers").unwrap();
        assert_eq!(capture_time(file.path()), Capture::Unavailable);
    }
}
