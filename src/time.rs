use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Fixed timezone for all user-facing timestamps. Covers both PST and PDT
/// through the IANA database bundled with `chrono-tz`.
pub const DISPLAY_TZ: Tz = chrono_tz::America::Los_Angeles;

/// Convert feed epoch-milliseconds (UTC) to an instant. Returns `None` for
/// values outside the representable range instead of panicking, so one bad
/// feature cannot abort a fetch.
pub fn from_epoch_ms(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}

/// Re-express an instant in the display timezone. The underlying instant is
/// unchanged, so converting an already-converted timestamp is a no-op.
pub fn to_display_tz<T: TimeZone>(dt: &DateTime<T>) -> DateTime<Tz> {
    dt.with_timezone(&DISPLAY_TZ)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Offset;

    #[test]
    fn epoch_ms_roundtrip() {
        let dt = from_epoch_ms(1_700_000_000_000).unwrap();
        assert_eq!(dt.to_rfc3339(), "2023-11-14T22:13:20+00:00");
        assert_eq!(dt.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn epoch_ms_out_of_range_is_none() {
        assert!(from_epoch_ms(i64::MAX).is_none());
    }

    #[test]
    fn winter_uses_standard_offset() {
        let utc = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let local = to_display_tz(&utc);
        assert_eq!(local.offset().fix().local_minus_utc(), -8 * 3600);
    }

    #[test]
    fn summer_uses_daylight_offset() {
        let utc = Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap();
        let local = to_display_tz(&utc);
        assert_eq!(local.offset().fix().local_minus_utc(), -7 * 3600);
    }

    #[test]
    fn conversion_is_idempotent() {
        let utc = Utc.with_ymd_and_hms(2025, 3, 9, 10, 30, 0).unwrap();
        let once = to_display_tz(&utc);
        let twice = to_display_tz(&once);
        assert_eq!(once, twice);
        assert_eq!(once.to_rfc3339(), twice.to_rfc3339());
    }
}
