//! Time and interval utilities
//!
//! All guide time handling is UTC; hour and day boundaries are computed
//! with plain epoch arithmetic, which is exact for UTC. Every function
//! here is pure and takes the timestamps it needs as parameters; only
//! [`now`] touches the system clock, so tests freeze time by passing a
//! constant instead.

use chrono::{DateTime, Utc};

use crate::types::{TimestampMs, DAY_MS, HOUR_MS};

/// The single ambient time source for the whole application.
///
/// Call sites that need "now" receive it as a parameter; only the app's
/// clock tick handler calls this directly.
pub fn now() -> TimestampMs {
    Utc::now().timestamp_millis()
}

/// Fix an overnight interval whose end wall-clock time was encoded without
/// the day rollover, leaving `end` numerically before `start`.
///
/// Returns the interval unchanged when it is already ordered.
pub fn normalize_overnight(start: TimestampMs, end: TimestampMs) -> (TimestampMs, TimestampMs) {
    if end < start {
        (start, end + DAY_MS)
    } else {
        (start, end)
    }
}

/// Half-open interval test: `start <= now < end`.
///
/// Equality at `end` is not "now playing"; the next program owns that
/// instant.
pub fn is_within(now: TimestampMs, start: TimestampMs, end: TimestampMs) -> bool {
    start <= now && now < end
}

/// Whether `ts` falls on the same UTC day as `now`
pub fn is_today(ts: TimestampMs, now: TimestampMs) -> bool {
    start_of_day(ts) == start_of_day(now)
}

/// Floor a timestamp to the start of its UTC day
pub fn start_of_day(ts: TimestampMs) -> TimestampMs {
    ts - ts.rem_euclid(DAY_MS)
}

/// Floor a timestamp to the start of its UTC hour
pub fn start_of_hour(ts: TimestampMs) -> TimestampMs {
    ts - ts.rem_euclid(HOUR_MS)
}

/// Ceiling of a timestamp to a UTC hour boundary; exact boundaries stay put
pub fn ceil_to_hour(ts: TimestampMs) -> TimestampMs {
    let floored = start_of_hour(ts);
    if floored == ts {
        ts
    } else {
        floored + HOUR_MS
    }
}

/// Signed minutes from `a` to `b`, fractional for smooth progress math
pub fn minutes_between(a: TimestampMs, b: TimestampMs) -> f64 {
    (b - a) as f64 / 60_000.0
}

/// Format a timestamp as 24-hour `HH:mm` (UTC)
pub fn format_clock(ts: TimestampMs) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ts) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Format a timestamp as a day label like `Mon, 15 Jan` (UTC)
pub fn format_day(ts: TimestampMs) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ts) {
        Some(dt) => dt.format("%a, %d %b").to_string(),
        None => "---".to_string(),
    }
}

/// Human-readable time left until `end`, clamped at zero
///
/// Used on now-playing tiles: "23 mins remaining" / "1 min remaining".
pub fn remaining_label(end: TimestampMs, now: TimestampMs) -> String {
    let remaining = minutes_between(now, end).floor().max(0.0) as i64;
    if remaining == 1 {
        "1 min remaining".to_string()
    } else {
        format!("{} mins remaining", remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-15 08:00:00 UTC (a Monday)
    const MON_0800: TimestampMs = 1_705_305_600_000;

    #[test]
    fn test_normalize_overnight_rolls_end_forward() {
        // 23:30 -> 00:30 encoded on the same day
        let start = MON_0800 + 15 * HOUR_MS + 30 * 60_000; // 23:30
        let end = MON_0800 - 8 * HOUR_MS + 30 * 60_000; // 00:30 same day
        let (s, e) = normalize_overnight(start, end);
        assert_eq!(s, start);
        assert_eq!(e, end + DAY_MS);
        assert_eq!(minutes_between(s, e), 60.0);
        assert!(e > s);
    }

    #[test]
    fn test_normalize_overnight_keeps_ordered_intervals() {
        let (s, e) = normalize_overnight(1_000, 2_000);
        assert_eq!((s, e), (1_000, 2_000));
    }

    #[test]
    fn test_is_within_half_open() {
        let start = 1_000;
        let end = 2_000;
        assert!(is_within(start, start, end));
        assert!(is_within(1_500, start, end));
        assert!(!is_within(end, start, end));
        assert!(!is_within(999, start, end));
    }

    #[test]
    fn test_hour_and_day_floors() {
        let ts = MON_0800 + 17 * 60_000 + 23_000; // 08:17:23
        assert_eq!(start_of_hour(ts), MON_0800);
        assert_eq!(start_of_day(ts), MON_0800 - 8 * HOUR_MS);
        assert_eq!(ceil_to_hour(ts), MON_0800 + HOUR_MS);
        // Exact boundary stays put
        assert_eq!(ceil_to_hour(MON_0800), MON_0800);
    }

    #[test]
    fn test_is_today() {
        assert!(is_today(MON_0800, MON_0800 + 10 * HOUR_MS));
        assert!(!is_today(MON_0800, MON_0800 + DAY_MS));
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_clock(MON_0800), "08:00");
        assert_eq!(format_day(MON_0800), "Mon, 15 Jan");
    }

    #[test]
    fn test_remaining_label() {
        let now = MON_0800;
        assert_eq!(remaining_label(now + 23 * 60_000, now), "23 mins remaining");
        assert_eq!(remaining_label(now + 60_000, now), "1 min remaining");
        // Already over: clamped, never negative
        assert_eq!(remaining_label(now - 60_000, now), "0 mins remaining");
    }
}
