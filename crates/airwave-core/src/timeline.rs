//! Timeline geometry: layout configuration and time → pixel mapping
//!
//! Every function here is a pure derivation from the data model plus a
//! [`LayoutConfig`]; results are recomputed on demand, never stored. One
//! rounding policy applies throughout: pixel x = 0 sits at the range's
//! hour-floored origin, and the timeline ends at the hour ceiling of the
//! latest program end (see [`GlobalTimeRange::origin`]).

use crate::guide::GlobalTimeRange;
use crate::time;
use crate::types::{TimestampMs, HOUR_MS};
use crate::virtualizer::ScrollViewport;

// =============================================================================
// Layout configuration
// =============================================================================

/// Pixel dimensions of the guide grid for one device class
///
/// Selected from the window width on every resize; this is derived
/// configuration, not persisted state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Width of one hour of timeline
    pub hour_width: f32,
    /// Height of one channel row
    pub row_height: f32,
    /// Width of the sticky channel column
    pub channel_column_width: f32,
}

/// Compact phone-sized layout
pub const MOBILE_LAYOUT: LayoutConfig = LayoutConfig {
    hour_width: 90.0,
    row_height: 56.0,
    channel_column_width: 72.0,
};

/// Default tablet layout
pub const TABLET_LAYOUT: LayoutConfig = LayoutConfig {
    hour_width: 120.0,
    row_height: 66.0,
    channel_column_width: 96.0,
};

/// Desktop layout with room for longer titles
pub const DESKTOP_LAYOUT: LayoutConfig = LayoutConfig {
    hour_width: 150.0,
    row_height: 72.0,
    channel_column_width: 112.0,
};

/// Windows at least this wide use the tablet layout
pub const TABLET_BREAKPOINT: f32 = 768.0;

/// Windows at least this wide use the desktop layout
pub const DESKTOP_BREAKPOINT: f32 = 1280.0;

/// Select the layout for a window width (mobile below both breakpoints)
pub fn layout_for_width(width: f32) -> LayoutConfig {
    if width >= DESKTOP_BREAKPOINT {
        DESKTOP_LAYOUT
    } else if width >= TABLET_BREAKPOINT {
        TABLET_LAYOUT
    } else {
        MOBILE_LAYOUT
    }
}

// =============================================================================
// Timeline width and hour grid
// =============================================================================

/// Floor for the computed timeline width, keeping degenerate ranges renderable
pub const MIN_TIMELINE_WIDTH: f32 = 400.0;

/// Total pixel width of the scrollable guide content.
///
/// Hour cells cover the rounded range; the channel column rides along at
/// the left. Rounding to hour boundaries keeps the last hour cell from
/// being visually truncated.
pub fn timeline_width(range: &GlobalTimeRange, layout: &LayoutConfig) -> f32 {
    let hours = range.total_hours() as f32;
    (hours * layout.hour_width + layout.channel_column_width).max(MIN_TIMELINE_WIDTH)
}

/// One hour cell of the time header
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourTick {
    /// Wall-clock time at the cell's left edge
    pub timestamp: TimestampMs,
    /// Cell left edge, relative to the timeline origin
    pub left: f32,
}

/// Hour ticks intersecting the scrolled viewport, padded by one hour cell
/// on each side so ticks never pop in during a fast scroll.
///
/// Indices are clamped to `[0, total_hours)`; overscroll past either edge
/// of the content cannot produce out-of-range ticks.
pub fn visible_hour_ticks(
    range: &GlobalTimeRange,
    hour_width: f32,
    viewport: &ScrollViewport,
) -> Vec<HourTick> {
    if hour_width <= 0.0 {
        return Vec::new();
    }

    let span_start = viewport.scroll_left;
    let span_end = viewport.scroll_left + viewport.width;
    let padding = hour_width;

    let start_index = (((span_start - padding) / hour_width).floor() as i64).max(0);
    let end_index = ((span_end + padding) / hour_width).ceil() as i64;
    let clamped_end = end_index.min(range.total_hours() as i64);

    let origin = range.origin();
    (start_index..clamped_end)
        .map(|i| HourTick {
            timestamp: origin + i * HOUR_MS,
            left: i as f32 * hour_width,
        })
        .collect()
}

/// The day shown in the sticky day header for a scroll position.
///
/// Scrolling one full day of hour cells past the channel column advances
/// the label by one day; overscroll to the left stays on the first day.
pub fn day_for_scroll(
    range: &GlobalTimeRange,
    scroll_left: f32,
    layout: &LayoutConfig,
) -> TimestampMs {
    let day_width = layout.hour_width * 24.0;
    let day_index =
        (((scroll_left - layout.channel_column_width) / day_width).floor() as i64).max(0);
    time::start_of_day(range.origin()) + day_index * crate::types::DAY_MS
}

// =============================================================================
// Coordinate mapping
// =============================================================================

/// Horizontal offset of a timestamp relative to the timeline origin.
///
/// Negative for timestamps before the origin; correct for tile placement.
/// Indicators should use [`indicator_x`] instead.
pub fn time_to_x(ts: TimestampMs, range: &GlobalTimeRange, hour_width: f32) -> f32 {
    (time::minutes_between(range.origin(), ts) / 60.0) as f32 * hour_width
}

/// [`time_to_x`] clamped at zero, for markers that must stay on the timeline
pub fn indicator_x(ts: TimestampMs, range: &GlobalTimeRange, hour_width: f32) -> f32 {
    time_to_x(ts, range, hour_width).max(0.0)
}

/// Pixel box of one program tile along the timeline axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBox {
    /// Left edge relative to the timeline origin
    pub left: f32,
    /// Tile width, never below 1 px
    pub width: f32,
}

/// Map a program interval to its tile box.
///
/// Width is floored at 1 px so degenerate entries stay visible and
/// clickable instead of collapsing.
pub fn interval_to_box(
    start: TimestampMs,
    end: TimestampMs,
    range: &GlobalTimeRange,
    hour_width: f32,
) -> TileBox {
    let width = (time::minutes_between(start, end) / 60.0) as f32 * hour_width;
    TileBox {
        left: time_to_x(start, range, hour_width),
        width: width.max(1.0),
    }
}

/// Elapsed share of a program, as a percentage.
///
/// 0 at or before start, 100 at or after end, linear in between.
pub fn progress_percent(start: TimestampMs, end: TimestampMs, now: TimestampMs) -> f32 {
    if now <= start || end <= start {
        return 0.0;
    }
    if now >= end {
        return 100.0;
    }
    let total = (end - start) as f64;
    let elapsed = (now - start) as f64;
    ((elapsed / total) * 100.0).clamp(0.0, 100.0) as f32
}

/// Scroll offset that centers the current moment in the viewport.
///
/// Clamped at zero; the caller clamps against the content's right edge
/// because only it knows the live viewport width.
pub fn scroll_to_now_target(
    range: &GlobalTimeRange,
    now: TimestampMs,
    layout: &LayoutConfig,
    container_width: f32,
) -> f32 {
    let now_x = time_to_x(now, range, layout.hour_width);
    (now_x - container_width / 2.0 + layout.channel_column_width).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DAY_MS;

    fn range(start: TimestampMs, end: TimestampMs) -> GlobalTimeRange {
        GlobalTimeRange {
            earliest_start: start,
            latest_end: end,
        }
    }

    fn viewport(scroll_left: f32, width: f32) -> ScrollViewport {
        ScrollViewport {
            scroll_left,
            scroll_top: 0.0,
            width,
            height: 600.0,
        }
    }

    #[test]
    fn test_layout_breakpoints() {
        assert_eq!(layout_for_width(500.0), MOBILE_LAYOUT);
        assert_eq!(layout_for_width(768.0), TABLET_LAYOUT);
        assert_eq!(layout_for_width(1279.0), TABLET_LAYOUT);
        assert_eq!(layout_for_width(1920.0), DESKTOP_LAYOUT);
    }

    #[test]
    fn test_one_hour_program_geometry() {
        // One program 08:00-09:00 UTC at 120 px/hour: left 0, width 120.
        let r = range(8 * HOUR_MS, 9 * HOUR_MS);
        let tile = interval_to_box(8 * HOUR_MS, 9 * HOUR_MS, &r, 120.0);
        assert_eq!(tile.left, 0.0);
        assert_eq!(tile.width, 120.0);
    }

    #[test]
    fn test_timeline_width_rounds_to_hour_boundaries() {
        // 08:15 - 22:45 spans 15 rounded hours
        let r = range(8 * HOUR_MS + 15 * 60_000, 22 * HOUR_MS + 45 * 60_000);
        let width = timeline_width(&r, &TABLET_LAYOUT);
        assert_eq!(width, 15.0 * 120.0 + 96.0);
    }

    #[test]
    fn test_timeline_width_monotonic_and_floored() {
        let short = range(8 * HOUR_MS, 9 * HOUR_MS);
        let long = range(8 * HOUR_MS, 20 * HOUR_MS);
        assert!(timeline_width(&long, &TABLET_LAYOUT) >= timeline_width(&short, &TABLET_LAYOUT));

        let narrow = LayoutConfig {
            hour_width: 60.0,
            ..TABLET_LAYOUT
        };
        assert!(timeline_width(&long, &TABLET_LAYOUT) >= timeline_width(&long, &narrow));

        // Degenerate range collapses to the floor width
        let degenerate = range(8 * HOUR_MS, 8 * HOUR_MS);
        assert_eq!(timeline_width(&degenerate, &TABLET_LAYOUT), MIN_TIMELINE_WIDTH);
    }

    #[test]
    fn test_tick_count_covers_whole_range() {
        // A viewport covering the whole timeline yields ceil(total_hours) ticks.
        let r = range(8 * HOUR_MS + 15 * 60_000, 22 * HOUR_MS + 45 * 60_000);
        let total_width = r.total_hours() as f32 * 120.0;
        let ticks = visible_hour_ticks(&r, 120.0, &viewport(0.0, total_width));
        assert_eq!(ticks.len(), r.total_hours() as usize);
        assert_eq!(ticks[0].timestamp, 8 * HOUR_MS);
        assert_eq!(ticks[0].left, 0.0);
    }

    #[test]
    fn test_fallback_range_yields_24_ticks() {
        let r = GlobalTimeRange::fallback(5 * HOUR_MS);
        let ticks = visible_hour_ticks(&r, 120.0, &viewport(0.0, 24.0 * 120.0));
        assert_eq!(ticks.len(), 24);
    }

    #[test]
    fn test_visible_ticks_window_with_padding() {
        // scroll_left=240, width=480, hour_width=120: hour cells 2..6 are on
        // screen; one cell of padding each side keeps ticks 1..=5 present.
        let r = range(0, DAY_MS);
        let ticks = visible_hour_ticks(&r, 120.0, &viewport(240.0, 480.0));
        let indices: Vec<i64> = ticks.iter().map(|t| (t.left / 120.0) as i64).collect();
        for expected in 1..=5 {
            assert!(indices.contains(&expected), "missing tick {}", expected);
        }
        assert!(indices.iter().all(|&i| i >= 0 && i < r.total_hours() as i64));
    }

    #[test]
    fn test_visible_ticks_clamped_under_overscroll() {
        let r = range(0, 4 * HOUR_MS);
        // Overscrolled far left
        let left = visible_hour_ticks(&r, 120.0, &viewport(-900.0, 480.0));
        assert!(left.iter().all(|t| t.left >= 0.0));
        // Overscrolled far right: nothing beyond the last hour cell
        let right = visible_hour_ticks(&r, 120.0, &viewport(10_000.0, 480.0));
        assert!(right.is_empty());
    }

    #[test]
    fn test_indicator_clamps_before_origin() {
        let r = range(8 * HOUR_MS, 20 * HOUR_MS);
        assert_eq!(indicator_x(6 * HOUR_MS, &r, 120.0), 0.0);
        assert!(time_to_x(6 * HOUR_MS, &r, 120.0) < 0.0);
        assert_eq!(indicator_x(9 * HOUR_MS, &r, 120.0), 120.0);
    }

    #[test]
    fn test_tile_width_floor() {
        let r = range(0, HOUR_MS);
        let tile = interval_to_box(30 * 60_000, 30 * 60_000 + 1, &r, 120.0);
        assert!(tile.width >= 1.0);
    }

    #[test]
    fn test_progress_percent_endpoints_and_monotonicity() {
        let (start, end) = (1_000_000, 4_600_000);
        assert_eq!(progress_percent(start, end, start), 0.0);
        assert_eq!(progress_percent(start, end, end), 100.0);
        assert_eq!(progress_percent(start, end, start - 1), 0.0);
        assert_eq!(progress_percent(start, end, end + 1), 100.0);

        let mut last = 0.0;
        for now in (start..end).step_by(600_000) {
            let p = progress_percent(start, end, now);
            assert!(p >= last);
            last = p;
        }
        assert_eq!(progress_percent(start, end, (start + end) / 2), 50.0);
    }

    #[test]
    fn test_day_for_scroll() {
        let r = range(0, 3 * DAY_MS);
        let layout = TABLET_LAYOUT;
        assert_eq!(day_for_scroll(&r, 0.0, &layout), 0);
        // One full day of hour cells past the channel column
        let one_day = layout.channel_column_width + 24.0 * layout.hour_width;
        assert_eq!(day_for_scroll(&r, one_day, &layout), DAY_MS);
        // Overscroll left stays on day zero
        assert_eq!(day_for_scroll(&r, -500.0, &layout), 0);
    }

    #[test]
    fn test_scroll_to_now_centers_and_clamps() {
        let r = range(0, DAY_MS);
        let layout = TABLET_LAYOUT;
        // Now at 10:00, container 480 wide: center 10h of pixels in view
        let target = scroll_to_now_target(&r, 10 * HOUR_MS, &layout, 480.0);
        assert_eq!(target, 10.0 * 120.0 - 240.0 + 96.0);
        // Early morning clamps to the left edge
        assert_eq!(scroll_to_now_target(&r, 0, &layout, 480.0), 0.0);
    }
}
