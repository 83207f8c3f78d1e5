//! Canvas Program implementations for the guide grid and time header
//!
//! These implement the iced canvas `Program` trait. The grid canvas owns
//! wheel input: it clamps the candidate offset against the content
//! extents and publishes the result through `on_scroll`, so the
//! application state never holds an out-of-range offset. Drawing only
//! touches the rows the virtualizer reports and the tiles intersecting
//! the horizontal window.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{mouse, Font, Point, Rectangle, Size, Theme};

use airwave_core::virtualizer::{ScrollViewport, VirtualItem};
use airwave_core::{time, timeline, Channel, ScrollOffset, TimestampMs};

use super::state::GuideState;
use crate::theme::{
    ACCENT, BORDER, BORDER_SOFT, GRID_BACKGROUND, NOW_LINE, PANEL_BACKGROUND, TEXT_PRIMARY,
    TEXT_SECONDARY, TILE_BACKGROUND, TILE_NOW_PLAYING, TILE_SELECTED,
};

/// Pixels per wheel "line" for mice that report line deltas
const SCROLL_LINE_PX: f32 = 40.0;

/// Tiles narrower than this skip their text entirely
const MIN_LABELED_TILE_WIDTH: f32 = 24.0;

/// Now-playing tiles at least this wide also show the remaining-time label
const MIN_REMAINING_LABEL_WIDTH: f32 = 200.0;

fn wheel_to_pixels(delta: mouse::ScrollDelta) -> (f32, f32) {
    match delta {
        mouse::ScrollDelta::Lines { x, y } => (-x * SCROLL_LINE_PX, -y * SCROLL_LINE_PX),
        mouse::ScrollDelta::Pixels { x, y } => (-x, -y),
    }
}

// =============================================================================
// Grid Canvas Program
// =============================================================================

/// Canvas program for the virtualized channel/program grid.
///
/// `on_scroll` receives the clamped absolute offset after a wheel event;
/// `on_select` receives the ID of a clicked program tile.
pub struct GridCanvas<'a, Message, ScrollFn, SelectFn>
where
    ScrollFn: Fn(ScrollOffset) -> Message,
    SelectFn: Fn(String) -> Message,
{
    pub state: &'a GuideState,
    pub now: TimestampMs,
    pub on_scroll: ScrollFn,
    pub on_select: SelectFn,
}

impl<'a, Message, ScrollFn, SelectFn> Program<Message>
    for GridCanvas<'a, Message, ScrollFn, SelectFn>
where
    Message: Clone,
    ScrollFn: Fn(ScrollOffset) -> Message,
    SelectFn: Fn(String) -> Message,
{
    type State = ();

    fn update(
        &self,
        _interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if cursor.is_over(bounds) {
                    let (dx, dy) = wheel_to_pixels(*delta);
                    let next = self.state.scrolled_by(dx, dy, bounds.size());
                    if next != self.state.scroll {
                        return Some(canvas::Action::publish((self.on_scroll)(next)));
                    }
                }
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    if let Some(program) = self.state.hit_test(position.x, position.y) {
                        return Some(canvas::Action::publish((self.on_select)(
                            program.id.clone(),
                        )));
                    }
                }
            }
            _ => {}
        }

        None
    }

    fn mouse_interaction(
        &self,
        _interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if let Some(position) = cursor.position_in(bounds) {
            if self.state.hit_test(position.x, position.y).is_some() {
                return mouse::Interaction::Pointer;
            }
        }
        mouse::Interaction::default()
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();

        frame.fill_rectangle(Point::ORIGIN, size, GRID_BACKGROUND);

        if self.state.channels.is_empty() {
            draw_empty_hint(&mut frame, size);
            return vec![frame.into_geometry()];
        }

        let viewport = self.state.viewport(size);
        let rows = self.state.virtualizer().visible_items(&viewport);

        for row in &rows {
            let channel = &self.state.channels[row.index];
            draw_program_tiles(&mut frame, self.state, channel, row, self.now, size);
        }

        for row in &rows {
            let channel = &self.state.channels[row.index];
            draw_channel_cell(&mut frame, self.state, channel, row);
        }

        // Column right edge sits above the cells
        let column_edge = self.state.layout.channel_column_width;
        frame.stroke(
            &Path::line(Point::new(column_edge, 0.0), Point::new(column_edge, size.height)),
            Stroke::default().with_color(BORDER).with_width(1.0),
        );

        draw_now_line(&mut frame, self.state, self.now, size);

        vec![frame.into_geometry()]
    }
}

// =============================================================================
// Time Header Canvas Program
// =============================================================================

/// Canvas program for the hour-cell header above the grid.
///
/// Purely presentational: it shares the grid's scroll offset through
/// [`GuideState`], so the two can never drift apart.
pub struct TimeHeaderCanvas<'a> {
    pub state: &'a GuideState,
    pub now: TimestampMs,
}

impl<Message> Program<Message> for TimeHeaderCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();
        let layout = &self.state.layout;
        let column_width = layout.channel_column_width;

        frame.fill_rectangle(Point::ORIGIN, size, PANEL_BACKGROUND);

        let viewport = ScrollViewport {
            scroll_left: self.state.scroll.left,
            scroll_top: 0.0,
            width: size.width,
            height: size.height,
        };
        let ticks = timeline::visible_hour_ticks(&self.state.range, layout.hour_width, &viewport);

        for tick in &ticks {
            let x = column_width + tick.left - self.state.scroll.left;

            let separator_x = x + layout.hour_width;
            if separator_x > column_width && separator_x < size.width {
                frame.stroke(
                    &Path::line(
                        Point::new(separator_x, 0.0),
                        Point::new(separator_x, size.height),
                    ),
                    Stroke::default().with_color(BORDER_SOFT).with_width(1.0),
                );
            }

            let center_x = x + layout.hour_width / 2.0;
            if center_x > column_width && center_x < size.width {
                frame.fill_text(Text {
                    content: time::format_clock(tick.timestamp),
                    position: Point::new(center_x, size.height / 2.0),
                    size: 12.0.into(),
                    color: TEXT_SECONDARY,
                    align_x: Horizontal::Center.into(),
                    align_y: Vertical::Center.into(),
                    ..Text::default()
                });
            }
        }

        // Blank channel-column cell covers any label sliding underneath
        frame.fill_rectangle(
            Point::ORIGIN,
            Size::new(column_width, size.height),
            PANEL_BACKGROUND,
        );
        frame.stroke(
            &Path::line(Point::new(column_width, 0.0), Point::new(column_width, size.height)),
            Stroke::default().with_color(BORDER).with_width(1.0),
        );

        // Current-time marker at the header's bottom edge
        let now_x = column_width
            + timeline::indicator_x(self.now, &self.state.range, layout.hour_width)
            - self.state.scroll.left;
        if now_x >= column_width && now_x <= size.width {
            frame.fill_rectangle(
                Point::new(now_x - 2.0, size.height - 4.0),
                Size::new(4.0, 4.0),
                ACCENT,
            );
        }

        frame.stroke(
            &Path::line(
                Point::new(0.0, size.height - 0.5),
                Point::new(size.width, size.height - 0.5),
            ),
            Stroke::default().with_color(BORDER).with_width(1.0),
        );

        vec![frame.into_geometry()]
    }
}

// =============================================================================
// Drawing Helper Functions
// =============================================================================

/// Draw every tile of one channel row that intersects the viewport
fn draw_program_tiles(
    frame: &mut Frame,
    state: &GuideState,
    channel: &Channel,
    row: &VirtualItem,
    now: TimestampMs,
    size: Size,
) {
    let layout = &state.layout;
    let column_width = layout.channel_column_width;
    let y = row.start - state.scroll.top;

    // Row separator under the timeline area
    frame.stroke(
        &Path::line(
            Point::new(column_width, y + row.size),
            Point::new(size.width, y + row.size),
        ),
        Stroke::default().with_color(BORDER_SOFT).with_width(1.0),
    );

    for program in &channel.schedules {
        let tile = timeline::interval_to_box(
            program.start,
            program.end,
            &state.range,
            layout.hour_width,
        );
        let x = column_width + tile.left - state.scroll.left;

        // Horizontal cull: the virtualizer windows rows, this windows tiles
        if x + tile.width <= column_width || x >= size.width {
            continue;
        }

        let now_playing = time::is_within(now, program.start, program.end);
        let selected = state.is_selected(&program.id);
        let background = if selected {
            TILE_SELECTED
        } else if now_playing {
            TILE_NOW_PLAYING
        } else {
            TILE_BACKGROUND
        };

        let tile_rect = Rectangle {
            x,
            y: y + 1.0,
            width: (tile.width - 1.0).max(1.0),
            height: row.size - 2.0,
        };
        frame.fill_rectangle(tile_rect.position(), tile_rect.size(), background);
        frame.stroke(
            &Path::rectangle(tile_rect.position(), tile_rect.size()),
            Stroke::default().with_color(BORDER_SOFT).with_width(1.0),
        );

        if tile.width >= MIN_LABELED_TILE_WIDTH {
            draw_tile_labels(frame, program, &tile_rect, now, now_playing);
        }

        if now_playing {
            let progress = timeline::progress_percent(program.start, program.end, now);
            let bar_width = (progress / 100.0) * (tile_rect.width - 2.0).max(0.0);
            frame.fill_rectangle(
                Point::new(tile_rect.x + 1.0, tile_rect.y + tile_rect.height - 3.0),
                Size::new(bar_width, 2.0),
                ACCENT,
            );
        }
    }
}

/// Title and time labels, clipped to the tile box
fn draw_tile_labels(
    frame: &mut Frame,
    program: &airwave_core::ProgramSchedule,
    tile_rect: &Rectangle,
    now: TimestampMs,
    now_playing: bool,
) {
    let clip = Rectangle {
        x: tile_rect.x + 6.0,
        y: tile_rect.y,
        width: (tile_rect.width - 12.0).max(0.0),
        height: tile_rect.height,
    };
    if clip.width <= 0.0 {
        return;
    }

    let title = program.title.clone();
    let times = format!(
        "{} - {}",
        time::format_clock(program.start),
        time::format_clock(program.end)
    );
    let remaining = (now_playing && tile_rect.width >= MIN_REMAINING_LABEL_WIDTH)
        .then(|| time::remaining_label(program.end, now));

    frame.with_clip(clip, |clipped| {
        let middle = clip.height / 2.0;
        clipped.fill_text(Text {
            content: title,
            position: Point::new(0.0, middle - 2.0),
            size: 13.0.into(),
            color: TEXT_PRIMARY,
            font: Font {
                weight: iced::font::Weight::Semibold,
                ..Font::DEFAULT
            },
            align_x: Horizontal::Left.into(),
            align_y: Vertical::Bottom.into(),
            ..Text::default()
        });
        clipped.fill_text(Text {
            content: times,
            position: Point::new(0.0, middle + 2.0),
            size: 11.0.into(),
            color: TEXT_SECONDARY,
            align_x: Horizontal::Left.into(),
            align_y: Vertical::Top.into(),
            ..Text::default()
        });
        if let Some(remaining) = remaining {
            clipped.fill_text(Text {
                content: remaining,
                position: Point::new(clip.width, middle + 2.0),
                size: 11.0.into(),
                color: ACCENT,
                align_x: Horizontal::Right.into(),
                align_y: Vertical::Top.into(),
                ..Text::default()
            });
        }
    });
}

/// One sticky channel-column cell, drawn over anything scrolled beneath it
fn draw_channel_cell(frame: &mut Frame, state: &GuideState, channel: &Channel, row: &VirtualItem) {
    let column_width = state.layout.channel_column_width;
    let y = row.start - state.scroll.top;

    frame.fill_rectangle(
        Point::new(0.0, y),
        Size::new(column_width, row.size),
        PANEL_BACKGROUND,
    );
    frame.stroke(
        &Path::line(Point::new(0.0, y + row.size), Point::new(column_width, y + row.size)),
        Stroke::default().with_color(BORDER_SOFT).with_width(1.0),
    );

    let clip = Rectangle {
        x: 4.0,
        y,
        width: column_width - 8.0,
        height: row.size,
    };
    frame.with_clip(clip, |clipped| {
        clipped.fill_text(Text {
            content: channel.title.clone(),
            position: Point::new(clip.width / 2.0, clip.height / 2.0),
            size: 13.0.into(),
            color: TEXT_PRIMARY,
            font: Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            },
            align_x: Horizontal::Center.into(),
            align_y: Vertical::Center.into(),
            ..Text::default()
        });
    });
}

/// The vertical current-time line across the grid
fn draw_now_line(frame: &mut Frame, state: &GuideState, now: TimestampMs, size: Size) {
    let column_width = state.layout.channel_column_width;
    let now_x = column_width
        + timeline::indicator_x(now, &state.range, state.layout.hour_width)
        - state.scroll.left;

    if now_x >= column_width && now_x <= size.width {
        frame.stroke(
            &Path::line(Point::new(now_x, 0.0), Point::new(now_x, size.height)),
            Stroke::default().with_color(NOW_LINE).with_width(2.0),
        );
    }
}

/// Hint shown instead of the grid when the dataset has no channels
fn draw_empty_hint(frame: &mut Frame, size: Size) {
    frame.fill_text(Text {
        content: "No channels available".to_string(),
        position: Point::new(size.width / 2.0, size.height / 2.0),
        size: 14.0.into(),
        color: TEXT_SECONDARY,
        align_x: Horizontal::Center.into(),
        align_y: Vertical::Center.into(),
        ..Text::default()
    });
}
