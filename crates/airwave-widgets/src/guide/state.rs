//! Guide state: the data behind the grid and header widgets
//!
//! [`GuideState`] holds the prepared channels together with everything
//! derived from them: the global time range, the active layout config,
//! the row virtualizer, the scroll offset, and the selection. All
//! mutation goes through methods here so invariants (clamped scroll,
//! re-measured virtualizer after a layout swap) hold by construction.

use iced::Size;

use airwave_core::guide::GlobalTimeRange;
use airwave_core::timeline::{self, LayoutConfig};
use airwave_core::virtualizer::{RowVirtualizer, ScrollViewport, DEFAULT_OVERSCAN};
use airwave_core::{Channel, ProgramSchedule, ScrollOffset, TimestampMs};

/// Height of the time header canvas
pub const TIME_HEADER_HEIGHT: f32 = 40.0;

/// Height of the day header bar
pub const DAY_HEADER_HEIGHT: f32 = 32.0;

/// Application-level state for one loaded guide
#[derive(Debug, Clone)]
pub struct GuideState {
    /// Prepared channels (overnight-fixed, IDs assigned)
    pub channels: Vec<Channel>,
    /// Global time range across every program
    pub range: GlobalTimeRange,
    /// Layout for the current device class
    pub layout: LayoutConfig,
    /// Current scroll position of the grid viewport
    pub scroll: ScrollOffset,
    /// Selected program ID, if any
    pub selected: Option<String>,
    virtualizer: RowVirtualizer,
}

impl GuideState {
    /// Build state for a freshly loaded guide.
    ///
    /// Selection starts empty and the viewport at the origin; the layout
    /// is picked from the window width.
    pub fn new(channels: Vec<Channel>, now: TimestampMs, window_width: f32) -> Self {
        let range = GlobalTimeRange::of_channels(&channels, now);
        let layout = timeline::layout_for_width(window_width);
        let row_height = layout.row_height;
        let virtualizer =
            RowVirtualizer::new(channels.len(), |_| row_height, DEFAULT_OVERSCAN);

        log::info!(
            "guide loaded: {} channels, {} timeline hours",
            channels.len(),
            range.total_hours()
        );

        Self {
            channels,
            range,
            layout,
            scroll: ScrollOffset::default(),
            selected: None,
            virtualizer,
        }
    }

    /// Re-select the layout after a window resize.
    ///
    /// Crossing a breakpoint changes every row height, so the virtualizer
    /// is re-measured synchronously; the caller should re-clamp scroll
    /// against the new content extents afterwards. Returns whether the
    /// layout actually changed.
    pub fn relayout(&mut self, window_width: f32) -> bool {
        let layout = timeline::layout_for_width(window_width);
        if layout == self.layout {
            return false;
        }
        self.layout = layout;
        let row_height = layout.row_height;
        self.virtualizer.remeasure(self.channels.len(), |_| row_height);
        true
    }

    /// Total pixel width of the scrollable content
    pub fn timeline_width(&self) -> f32 {
        timeline::timeline_width(&self.range, &self.layout)
    }

    /// Total pixel height of the scrollable content
    pub fn content_height(&self) -> f32 {
        self.virtualizer.total_size()
    }

    /// The row virtualizer, for visible-row queries
    pub fn virtualizer(&self) -> &RowVirtualizer {
        &self.virtualizer
    }

    /// Scroll metrics for a grid viewport of the given size
    pub fn viewport(&self, grid_size: Size) -> ScrollViewport {
        ScrollViewport {
            scroll_left: self.scroll.left,
            scroll_top: self.scroll.top,
            width: grid_size.width,
            height: grid_size.height,
        }
    }

    /// Clamp a scroll offset to the content extents for a viewport size
    pub fn clamp_scroll(&self, offset: ScrollOffset, grid_size: Size) -> ScrollOffset {
        let max_left = (self.timeline_width() - grid_size.width).max(0.0);
        let max_top = (self.content_height() - grid_size.height).max(0.0);
        ScrollOffset {
            left: offset.left.clamp(0.0, max_left),
            top: offset.top.clamp(0.0, max_top),
        }
    }

    /// The scroll offset after applying a wheel delta, clamped
    pub fn scrolled_by(&self, dx: f32, dy: f32, grid_size: Size) -> ScrollOffset {
        self.clamp_scroll(
            ScrollOffset {
                left: self.scroll.left + dx,
                top: self.scroll.top + dy,
            },
            grid_size,
        )
    }

    /// Apply an already-clamped scroll offset
    pub fn set_scroll(&mut self, offset: ScrollOffset) {
        self.scroll = offset;
    }

    /// Center the viewport on the current moment
    pub fn scroll_to_now(&mut self, now: TimestampMs, grid_size: Size) {
        let left =
            timeline::scroll_to_now_target(&self.range, now, &self.layout, grid_size.width);
        self.scroll = self.clamp_scroll(
            ScrollOffset {
                left,
                top: self.scroll.top,
            },
            grid_size,
        );
    }

    /// Select a program by ID (clicking the selected tile deselects it)
    pub fn select(&mut self, program_id: String) {
        if self.selected.as_deref() == Some(program_id.as_str()) {
            self.selected = None;
        } else {
            self.selected = Some(program_id);
        }
    }

    /// Whether the given program is selected
    pub fn is_selected(&self, program_id: &str) -> bool {
        self.selected.as_deref() == Some(program_id)
    }

    /// The program under a canvas-local point, if any.
    ///
    /// Points over the channel column miss; otherwise the point is mapped
    /// into content space and matched against the row's tile boxes.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<&ProgramSchedule> {
        if x < self.layout.channel_column_width {
            return None;
        }
        let content_x = x - self.layout.channel_column_width + self.scroll.left;
        let content_y = y + self.scroll.top;

        let row = self.virtualizer.index_at(content_y)?;
        let channel = self.channels.get(row)?;

        channel.schedules.iter().find(|program| {
            let tile = timeline::interval_to_box(
                program.start,
                program.end,
                &self.range,
                self.layout.hour_width,
            );
            tile.left <= content_x && content_x < tile.left + tile.width
        })
    }
}
