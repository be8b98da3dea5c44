//! Date-based article slugs.

use chrono::{DateTime, FixedOffset, Utc};

/// Japan Standard Time offset in seconds (UTC+9, no daylight saving).
const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Derive the default article slug from an instant, interpreted in JST.
///
/// Format is `YYMMDD` with zero-padded month and day, so the default is
/// deterministic and human-readable. Repeated publishes on the same JST
/// day produce the same slug -- callers that need distinct same-day
/// handles must supply an explicit slug.
pub fn date_slug_jst(now: DateTime<Utc>) -> String {
    let jst_offset = FixedOffset::east_opt(JST_OFFSET_SECS).expect("valid JST offset");
    now.with_timezone(&jst_offset).format("%y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn plain_date() {
        assert_eq!(date_slug_jst(utc(2025, 6, 7, 3, 0)), "250607");
    }

    #[test]
    fn utc_evening_is_next_jst_day() {
        // 2025-06-06 20:00 UTC is 2025-06-07 05:00 JST.
        assert_eq!(date_slug_jst(utc(2025, 6, 6, 20, 0)), "250607");
    }

    #[test]
    fn year_boundary() {
        // 2025-12-31 15:00 UTC is 2026-01-01 00:00 JST.
        assert_eq!(date_slug_jst(utc(2025, 12, 31, 15, 0)), "260101");
    }

    #[test]
    fn just_before_jst_midnight() {
        // 2025-12-31 14:59 UTC is still 2025-12-31 23:59 JST.
        assert_eq!(date_slug_jst(utc(2025, 12, 31, 14, 59)), "251231");
    }

    #[test]
    fn single_digit_month_and_day_are_padded() {
        assert_eq!(date_slug_jst(utc(2026, 1, 2, 0, 0)), "260102");
    }
}
