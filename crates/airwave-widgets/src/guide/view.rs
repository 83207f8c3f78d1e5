//! Guide view functions
//!
//! Plain functions that take state references and callback closures and
//! return `Element`s, following the iced 0.14 pattern.
//!
//! ```ignore
//! // In your application's view function:
//! column![
//!     day_header(&self.guide),
//!     time_header(&self.guide, self.now),
//!     guide_grid(&self.guide, self.now, Message::Scrolled, Message::ProgramSelected),
//! ]
//! .into()
//! ```

use iced::widget::{container, text, Canvas};
use iced::{Background, Element, Length, Theme};

use airwave_core::{time, timeline, ScrollOffset, TimestampMs};

use super::canvas::{GridCanvas, TimeHeaderCanvas};
use super::state::{GuideState, DAY_HEADER_HEIGHT, TIME_HEADER_HEIGHT};

/// The virtualized guide grid.
///
/// * `on_scroll` - called with the clamped absolute offset after wheel input
/// * `on_select` - called with the program ID of a clicked tile
pub fn guide_grid<'a, Message>(
    state: &'a GuideState,
    now: TimestampMs,
    on_scroll: impl Fn(ScrollOffset) -> Message + 'a,
    on_select: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(GridCanvas {
        state,
        now,
        on_scroll,
        on_select,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// The hour-cell header, synchronized to the grid's scroll offset
pub fn time_header<'a, Message>(state: &'a GuideState, now: TimestampMs) -> Element<'a, Message>
where
    Message: 'a,
{
    Canvas::new(TimeHeaderCanvas { state, now })
        .width(Length::Fill)
        .height(Length::Fixed(TIME_HEADER_HEIGHT))
        .into()
}

/// Sticky day label for the day currently under the viewport
pub fn day_header<'a, Message>(state: &GuideState) -> Element<'a, Message>
where
    Message: 'a,
{
    let day = timeline::day_for_scroll(&state.range, state.scroll.left, &state.layout);

    container(
        text(time::format_day(day))
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.base.text),
            }),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(DAY_HEADER_HEIGHT))
    .style(|theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        ..Default::default()
    })
    .into()
}
