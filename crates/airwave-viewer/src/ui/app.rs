//! Main iced application for the Airwave EPG viewer
//!
//! The app is a small phase machine: Loading until the guide fetch
//! resolves, Failed with a retry affordance on error, Ready with the
//! interactive grid afterwards. One shared clock subscription feeds every
//! consumer of "now"; window resizes re-derive the layout config and
//! re-clamp scroll synchronously.

use std::time::Duration;

use iced::widget::{button, column, container, row, text, Space};
use iced::{window, Center, Element, Length, Size, Subscription, Task, Theme};

use airwave_core::api::{EpgClient, GuideError};
use airwave_core::{guide, time, Channel, ScrollOffset, TimestampMs};
use airwave_widgets::{
    day_header, guide_grid, time_header, GuideState, DAY_HEADER_HEIGHT, TIME_HEADER_HEIGHT,
};

use crate::config::{self, ViewerConfig};

/// Initial window width, also the synchronous first read of the viewport
pub const INITIAL_WINDOW_WIDTH: f32 = 1200.0;

/// Initial window height
pub const INITIAL_WINDOW_HEIGHT: f32 = 800.0;

/// Height of the top bar (title + Now button)
const TOP_BAR_HEIGHT: f32 = 56.0;

/// Loading lifecycle of the guide data
enum Phase {
    /// Fetch in flight
    Loading,
    /// Fetch failed; the user can retry
    Failed(GuideError),
    /// Guide loaded and interactive
    Ready(GuideState),
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Data
    GuideFetched(Result<Vec<Channel>, GuideError>),
    Retry,

    // Clock and window
    ClockTick,
    WindowResized(Size),

    // Guide interaction
    Scrolled(ScrollOffset),
    ProgramSelected(String),
    JumpToNow,
}

/// Main application
pub struct ViewerApp {
    /// Global configuration
    config: ViewerConfig,
    /// Guide backend client
    client: EpgClient,
    /// Current data phase
    phase: Phase,
    /// The shared current moment, refreshed by the clock subscription
    now: TimestampMs,
    /// Last known window size
    window_size: Size,
}

impl ViewerApp {
    /// Create the application and kick off the initial guide fetch
    pub fn new() -> (Self, Task<Message>) {
        let config_path = config::default_config_path();
        let config = config::load_config(&config_path);

        // Materialize defaults on first launch so users have a file to edit
        if !config_path.exists() {
            if let Err(e) = config::save_config(&config, &config_path) {
                log::warn!("could not write default config: {:#}", e);
            }
        }

        let client = EpgClient::new(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )
        .expect("Failed to create HTTP client for the guide backend");

        let app = Self {
            config,
            client,
            phase: Phase::Loading,
            now: time::now(),
            window_size: Size::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT),
        };

        let fetch = app.fetch_guide();
        (app, fetch)
    }

    /// Dispatch the guide fetch; preparation runs in the same task so the
    /// UI thread only ever sees well-formed channels
    fn fetch_guide(&self) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move { client.fetch_guide().await.map(guide::prepare_channels) },
            Message::GuideFetched,
        )
    }

    /// Size of the grid viewport: the window minus the fixed chrome
    fn grid_size(&self) -> Size {
        Size::new(
            self.window_size.width,
            (self.window_size.height - TOP_BAR_HEIGHT - DAY_HEADER_HEIGHT - TIME_HEADER_HEIGHT)
                .max(0.0),
        )
    }

    /// Update state based on message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GuideFetched(Ok(channels)) => {
                self.phase =
                    Phase::Ready(GuideState::new(channels, self.now, self.window_size.width));
            }
            Message::GuideFetched(Err(error)) => {
                log::error!("guide fetch failed: {}", error);
                self.phase = Phase::Failed(error);
            }
            Message::Retry => {
                self.phase = Phase::Loading;
                return self.fetch_guide();
            }

            Message::ClockTick => {
                self.now = time::now();
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                let grid = self.grid_size();
                if let Phase::Ready(state) = &mut self.phase {
                    if state.relayout(size.width) {
                        log::debug!("layout changed for window width {}", size.width);
                    }
                    let clamped = state.clamp_scroll(state.scroll, grid);
                    state.set_scroll(clamped);
                }
            }

            Message::Scrolled(offset) => {
                if let Phase::Ready(state) = &mut self.phase {
                    state.set_scroll(offset);
                }
            }
            Message::ProgramSelected(program_id) => {
                if let Phase::Ready(state) = &mut self.phase {
                    state.select(program_id);
                }
            }
            Message::JumpToNow => {
                let grid = self.grid_size();
                let now = self.now;
                if let Phase::Ready(state) = &mut self.phase {
                    state.scroll_to_now(now, grid);
                }
            }
        }

        Task::none()
    }

    /// Render the current phase
    pub fn view(&self) -> Element<'_, Message> {
        match &self.phase {
            Phase::Loading => self.view_loading(),
            Phase::Failed(error) => self.view_error(error),
            Phase::Ready(state) => self.view_guide(state),
        }
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Shared clock plus window-resize tracking.
    ///
    /// The clock is the only timer in the process; every now-dependent
    /// view reads the value it refreshes. Both subscriptions are dropped
    /// with the app, which is the teardown hook an embedding host would
    /// omit.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            iced::time::every(Duration::from_secs(self.config.clock.tick_secs.max(1)))
                .map(|_| Message::ClockTick),
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
        ])
    }

    /// Top bar with the title and the Now button
    fn view_top_bar(&self, now_enabled: bool) -> Element<'_, Message> {
        let now_button = button(text("Now").size(14)).style(button::primary);
        let now_button = if now_enabled {
            now_button.on_press(Message::JumpToNow)
        } else {
            now_button
        };

        container(
            row![
                text("Airwave").size(20),
                Space::new().width(Length::Fill),
                now_button,
            ]
            .spacing(10)
            .align_y(Center),
        )
        .padding([12, 16])
        .height(Length::Fixed(TOP_BAR_HEIGHT))
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            ..Default::default()
        })
        .into()
    }

    /// The loaded guide: headers over the virtualized grid
    fn view_guide<'a>(&'a self, state: &'a GuideState) -> Element<'a, Message> {
        column![
            self.view_top_bar(true),
            day_header(state),
            time_header(state, self.now),
            guide_grid(state, self.now, Message::Scrolled, Message::ProgramSelected),
        ]
        .into()
    }

    /// Full-screen loading page shown while the fetch is in flight
    fn view_loading(&self) -> Element<'_, Message> {
        let content = column![
            text("LOADING...").size(16),
            text("Fetching the program guide").size(13).style(
                |theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }
            ),
        ]
        .spacing(8)
        .align_x(Center);

        column![
            self.view_top_bar(false),
            container(content)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        ]
        .into()
    }

    /// Full-screen error page with a retry affordance
    fn view_error(&self, error: &GuideError) -> Element<'_, Message> {
        let content = column![
            text("Something went wrong").size(20),
            text(error.to_string())
                .size(13)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
            button(text("Retry").size(14))
                .on_press(Message::Retry)
                .style(button::primary),
        ]
        .spacing(12)
        .align_x(Center);

        column![
            self.view_top_bar(false),
            container(content)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        ]
        .into()
    }
}
