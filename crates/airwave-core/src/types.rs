//! Common types for Airwave
//!
//! The domain model of the guide: channels and their program schedules,
//! plus the small shared value types (timestamps, scroll offsets) used
//! across the geometry and widget layers.

use serde::{Deserialize, Serialize};

/// Unix epoch milliseconds, UTC. All timeline math runs on this type;
/// `chrono` types appear only at the clock and formatting boundaries.
pub type TimestampMs = i64;

/// One calendar day in milliseconds (UTC days have no DST jumps)
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// One hour in milliseconds
pub const HOUR_MS: i64 = 60 * 60 * 1000;

/// A titled program interval `[start, end)` airing on one channel
///
/// After preparation (see [`crate::guide::prepare_channels`]) every
/// schedule satisfies `end > start`; raw backend data does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSchedule {
    /// Unique program identifier (assigned during preparation; backend IDs are dummies)
    pub id: String,
    /// Program title
    pub title: String,
    /// Program start time
    pub start: TimestampMs,
    /// Program end time
    pub end: TimestampMs,
}

impl ProgramSchedule {
    /// Program duration in minutes (fractional)
    pub fn duration_minutes(&self) -> f64 {
        crate::time::minutes_between(self.start, self.end)
    }
}

/// A channel with its program schedule
///
/// `schedules` is usually ordered by start time but the geometry layer
/// never relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel identifier from the backend
    pub id: String,
    /// Channel name (e.g. "Das Erste", "ZDF")
    pub title: String,
    /// Channel logo URL (kept for wire fidelity; the column renders the title)
    pub logo_url: String,
    /// Scheduled programs for this channel (may be empty)
    pub schedules: Vec<ProgramSchedule>,
}

/// Absolute scroll position of the guide viewport, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    /// Horizontal offset into the timeline
    pub left: f32,
    /// Vertical offset into the channel rows
    pub top: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_minutes() {
        let program = ProgramSchedule {
            id: "p1".into(),
            title: "News".into(),
            start: 0,
            end: 90 * 60 * 1000,
        };
        assert_eq!(program.duration_minutes(), 90.0);
    }
}
