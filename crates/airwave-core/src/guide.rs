//! Guide data preparation and the global time range
//!
//! Raw backend data arrives with dummy program IDs and overnight programs
//! whose end timestamp lands numerically before their start. Preparation
//! restores the `end > start` invariant the rest of the system relies on;
//! everything downstream may then treat schedules as well-formed.

use uuid::Uuid;

use crate::api::ChannelDto;
use crate::time;
use crate::types::{Channel, ProgramSchedule, TimestampMs, DAY_MS};

/// Convert wire channels into the domain model.
///
/// Per program: apply the overnight fix, assign a fresh UUID (backend IDs
/// are dummies), and drop anything still invalid afterwards; a degenerate
/// interval must never reach the width/position math.
pub fn prepare_channels(dtos: Vec<ChannelDto>) -> Vec<Channel> {
    dtos.into_iter()
        .map(|dto| {
            let ChannelDto {
                id,
                title,
                images,
                schedules,
            } = dto;

            let schedules = schedules
                .into_iter()
                .filter_map(|program| {
                    let (start, end) = time::normalize_overnight(program.start, program.end);
                    if end <= start {
                        log::warn!(
                            "dropping invalid schedule '{}' on channel {}: start={} end={}",
                            program.title,
                            id,
                            start,
                            end
                        );
                        return None;
                    }
                    Some(ProgramSchedule {
                        id: Uuid::new_v4().to_string(),
                        title: program.title,
                        start,
                        end,
                    })
                })
                .collect();

            Channel {
                id,
                title,
                logo_url: images.logo,
                schedules,
            }
        })
        .collect()
}

/// The minimal start and maximal end across all programs, defining the
/// timeline's horizontal extent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalTimeRange {
    /// Earliest program start across every channel
    pub earliest_start: TimestampMs,
    /// Latest program end across every channel
    pub latest_end: TimestampMs,
}

impl GlobalTimeRange {
    /// Scan every program of every channel for the extremes.
    ///
    /// An empty dataset (no channels, or channels without programs) yields
    /// the deterministic fallback range instead of infinities: the current
    /// UTC day. Downstream width and tick math never sees a degenerate
    /// range.
    pub fn of_channels(channels: &[Channel], now: TimestampMs) -> Self {
        let mut earliest = TimestampMs::MAX;
        let mut latest = TimestampMs::MIN;

        for channel in channels {
            for program in &channel.schedules {
                earliest = earliest.min(program.start);
                latest = latest.max(program.end);
            }
        }

        if earliest > latest {
            return Self::fallback(now);
        }

        Self {
            earliest_start: earliest,
            latest_end: latest,
        }
    }

    /// Fallback for an empty dataset: the current UTC day
    pub fn fallback(now: TimestampMs) -> Self {
        let day_start = time::start_of_day(now);
        Self {
            earliest_start: day_start,
            latest_end: day_start + DAY_MS,
        }
    }

    /// Pixel origin of the timeline: the earliest start floored to its hour.
    ///
    /// Tiles, hour ticks, the now indicator, and the day resolver all
    /// measure from this point, so they can never drift apart.
    pub fn origin(&self) -> TimestampMs {
        time::start_of_hour(self.earliest_start)
    }

    /// End bound of the timeline: the latest end ceiled to an hour boundary
    pub fn end_bound(&self) -> TimestampMs {
        time::ceil_to_hour(self.latest_end)
    }

    /// Number of hour cells between the rounded bounds
    pub fn total_hours(&self) -> u32 {
        let span = self.end_bound().saturating_sub(self.origin());
        (span / crate::types::HOUR_MS) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ChannelImagesDto, ScheduleDto};
    use crate::types::HOUR_MS;

    fn dto(id: &str, schedules: Vec<ScheduleDto>) -> ChannelDto {
        ChannelDto {
            id: id.to_string(),
            title: format!("Channel {}", id),
            images: ChannelImagesDto {
                logo: "https://example.com/logo.png".to_string(),
            },
            schedules,
        }
    }

    fn program(start: TimestampMs, end: TimestampMs) -> ScheduleDto {
        ScheduleDto {
            title: "Show".to_string(),
            start,
            end,
        }
    }

    #[test]
    fn test_prepare_fixes_overnight_and_assigns_ids() {
        let start = 10 * DAY_MS + 23 * HOUR_MS + 30 * 60_000; // 23:30
        let end = 10 * DAY_MS + 30 * 60_000; // 00:30, same day
        let channels = prepare_channels(vec![dto("1", vec![program(start, end)])]);

        let schedule = &channels[0].schedules[0];
        assert_eq!(schedule.start, start);
        assert_eq!(schedule.end, end + DAY_MS);
        assert_eq!(schedule.duration_minutes(), 60.0);
        assert!(!schedule.id.is_empty());
    }

    #[test]
    fn test_prepare_assigns_unique_ids() {
        let channels = prepare_channels(vec![dto(
            "1",
            vec![program(0, HOUR_MS), program(HOUR_MS, 2 * HOUR_MS)],
        )]);
        let ids: Vec<_> = channels[0].schedules.iter().map(|s| &s.id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_prepare_drops_degenerate_intervals() {
        // Identical start and end survives the overnight fix unchanged and
        // must be dropped rather than rendered as NaN geometry.
        let channels = prepare_channels(vec![dto(
            "1",
            vec![program(HOUR_MS, HOUR_MS), program(0, HOUR_MS)],
        )]);
        assert_eq!(channels[0].schedules.len(), 1);
    }

    #[test]
    fn test_prepare_keeps_empty_channels() {
        let channels = prepare_channels(vec![dto("1", vec![])]);
        assert_eq!(channels.len(), 1);
        assert!(channels[0].schedules.is_empty());
    }

    #[test]
    fn test_global_range_is_exact_min_and_max() {
        let dtos = vec![
            dto("1", vec![program(8 * HOUR_MS, 22 * HOUR_MS)]),
            dto("2", vec![program(10 * HOUR_MS, 20 * HOUR_MS)]),
        ];
        let channels = prepare_channels(dtos);
        let range = GlobalTimeRange::of_channels(&channels, 0);
        assert_eq!(range.earliest_start, 8 * HOUR_MS);
        assert_eq!(range.latest_end, 22 * HOUR_MS);
    }

    #[test]
    fn test_global_range_empty_fallback_is_one_day() {
        let now = 3 * DAY_MS + 5 * HOUR_MS;
        let range = GlobalTimeRange::of_channels(&[], now);
        assert_eq!(range.earliest_start, 3 * DAY_MS);
        assert_eq!(range.latest_end, 4 * DAY_MS);
        assert_eq!(range.total_hours(), 24);
    }

    #[test]
    fn test_rounded_bounds() {
        let range = GlobalTimeRange {
            earliest_start: 8 * HOUR_MS + 15 * 60_000, // 08:15
            latest_end: 22 * HOUR_MS + 45 * 60_000,    // 22:45
        };
        assert_eq!(range.origin(), 8 * HOUR_MS);
        assert_eq!(range.end_bound(), 23 * HOUR_MS);
        assert_eq!(range.total_hours(), 15);

        // Already aligned ends gain no phantom hour
        let aligned = GlobalTimeRange {
            earliest_start: 8 * HOUR_MS,
            latest_end: 9 * HOUR_MS,
        };
        assert_eq!(aligned.total_hours(), 1);
    }
}
