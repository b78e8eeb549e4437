use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::errors::AppError;

/// Hour rendering preference. Stands in for the viewer's locale convention;
/// threaded from configuration rather than read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStyle {
    TwelveHour,
    TwentyFourHour,
}

/// Resolve an IANA zone name. An unknown name is a configuration defect,
/// surfaced as-is, never silently replaced with UTC or the system zone.
pub fn resolve_zone(name: &str) -> Result<Tz, AppError> {
    name.parse::<Tz>()
        .map_err(|_| AppError::UnknownTimezone(name.to_string()))
}

/// Time-of-day portion of a UTC instant as it reads on the wall clock in
/// `tz`. Never consults the system timezone.
pub fn format_time_in_zone(instant: DateTime<Utc>, tz: Tz, clock: ClockStyle) -> String {
    let local = instant.with_timezone(&tz);
    match clock {
        ClockStyle::TwelveHour => local.format("%-I:%M %p").to_string(),
        ClockStyle::TwentyFourHour => local.format("%H:%M").to_string(),
    }
}

/// Calendar-date portion of a UTC instant in `tz`, e.g. `"March 1, 2025"`.
pub fn format_date_in_zone(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%B %-d, %Y").to_string()
}

/// Combined date and time, fixed shape:
/// `"Saturday, March 1, 2025 at 12:00 PM"`.
pub fn format_datetime_in_zone(instant: DateTime<Utc>, tz: Tz, clock: ClockStyle) -> String {
    let local = instant.with_timezone(&tz);
    match clock {
        ClockStyle::TwelveHour => local.format("%A, %B %-d, %Y at %-I:%M %p").to_string(),
        ClockStyle::TwentyFourHour => local.format("%A, %B %-d, %Y at %H:%M").to_string(),
    }
}

/// Parse a bare `YYYY-MM-DD` into a calendar date.
///
/// The result is a plain calendar day with no zone attached, so it cannot
/// shift backward under a negative UTC offset the way parsing the string as
/// a UTC instant would.
pub fn parse_local_date(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Canonical `YYYY-MM-DD` rendering, the inverse of [`parse_local_date`].
pub fn format_ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_resolve_zone_known() {
        assert!(resolve_zone("America/New_York").is_ok());
        assert!(resolve_zone("Europe/Tirane").is_ok());
    }

    #[test]
    fn test_resolve_zone_unknown_is_error() {
        let err = resolve_zone("Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(err, AppError::UnknownTimezone(_)));
    }

    #[test]
    fn test_time_renders_in_business_zone_not_viewer_zone() {
        // 2025-03-01 predates the US DST switch, so New York is EST (UTC-5).
        let instant = utc("2025-03-01T17:00:00Z");
        let ny = resolve_zone("America/New_York").unwrap();
        let tirane = resolve_zone("Europe/Tirane").unwrap();
        assert_eq!(
            format_time_in_zone(instant, ny, ClockStyle::TwelveHour),
            "12:00 PM"
        );
        assert_eq!(
            format_time_in_zone(instant, tirane, ClockStyle::TwelveHour),
            "6:00 PM"
        );
        assert_eq!(
            format_time_in_zone(instant, tirane, ClockStyle::TwentyFourHour),
            "18:00"
        );
    }

    #[test]
    fn test_time_respects_dst() {
        // July: New York is EDT (UTC-4).
        let instant = utc("2025-07-01T16:00:00Z");
        let ny = resolve_zone("America/New_York").unwrap();
        assert_eq!(
            format_time_in_zone(instant, ny, ClockStyle::TwelveHour),
            "12:00 PM"
        );
    }

    #[test]
    fn test_date_follows_zone_day_boundary() {
        let instant = utc("2025-03-01T23:30:00Z");
        let ny = resolve_zone("America/New_York").unwrap();
        let tokyo = resolve_zone("Asia/Tokyo").unwrap();
        assert_eq!(format_date_in_zone(instant, ny), "March 1, 2025");
        assert_eq!(format_date_in_zone(instant, tokyo), "March 2, 2025");
    }

    #[test]
    fn test_datetime_fixed_shape() {
        let instant = utc("2025-03-01T17:00:00Z");
        let ny = resolve_zone("America/New_York").unwrap();
        assert_eq!(
            format_datetime_in_zone(instant, ny, ClockStyle::TwelveHour),
            "Saturday, March 1, 2025 at 12:00 PM"
        );
    }

    #[test]
    fn test_date_round_trip_under_opposite_offsets() {
        // The round trip must hold regardless of zone offset sign: the
        // parsed value is a calendar day, and localizing its midnight in a
        // negative-offset or positive-offset zone keeps the same day.
        for s in ["2025-03-10", "2024-02-29", "2025-12-31"] {
            let date = parse_local_date(s).unwrap();
            assert_eq!(format_ymd(date), s);

            for zone in ["America/New_York", "Europe/Tirane"] {
                let tz = resolve_zone(zone).unwrap();
                let midnight = tz
                    .from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
                    .single()
                    .unwrap();
                assert_eq!(midnight.date_naive(), date, "drift in {zone}");
            }
        }
    }

    #[test]
    fn test_parse_local_date_rejects_garbage() {
        assert!(parse_local_date("not-a-date").is_err());
        assert!(parse_local_date("2025-13-01").is_err());
        assert!(parse_local_date("2025-02-30").is_err());
        assert!(parse_local_date("").is_err());
    }
}
