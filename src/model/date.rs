//! Timestamp rendering for the exported date column.

use chrono::{DateTime, Local, Utc};

/// Fixed output pattern: `yyyy/MM/dd HH:mm:ss.SSS`.
const DATE_PATTERN: &str = "%Y/%m/%d %H:%M:%S%.3f";

/// Render a message timestamp in the local time zone of the process.
///
/// Messages without a date never reach this function; the record builder
/// substitutes an empty field upstream.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format(DATE_PATTERN).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_shape() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let formatted = format_date(&date);

        // 4-digit year, 2-digit month/day/hour/minute/second, 3-digit millis
        assert_eq!(formatted.len(), "yyyy/MM/dd HH:mm:ss.SSS".len());
        assert_eq!(&formatted[4..5], "/");
        assert_eq!(&formatted[7..8], "/");
        assert_eq!(&formatted[10..11], " ");
        assert_eq!(&formatted[13..14], ":");
        assert_eq!(&formatted[16..17], ":");
        assert_eq!(&formatted[19..20], ".");
        for (i, c) in formatted.char_indices() {
            if ![4, 7, 10, 13, 16, 19].contains(&i) {
                assert!(c.is_ascii_digit(), "unexpected char {c:?} at {i}");
            }
        }
    }

    #[test]
    fn test_whole_second_renders_zero_millis() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert!(format_date(&date).ends_with(".000"));
    }

    #[test]
    fn test_deterministic() {
        let date = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date(&date), format_date(&date));
    }

    #[test]
    fn test_local_zone_rendering() {
        // Whatever the process zone is, a Local-constructed instant must
        // round-trip its own wall-clock fields.
        let local = Local.with_ymd_and_hms(2024, 6, 15, 9, 30, 5).unwrap();
        let formatted = format_date(&local.with_timezone(&Utc));
        assert_eq!(formatted, "2024/06/15 09:30:05.000");
    }
}
