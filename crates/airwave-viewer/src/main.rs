//! Airwave - Electronic Program Guide viewer
//!
//! Entry point for the GUI application. Initializes logging, then hands
//! control to the iced runtime; all state lives in [`ui::ViewerApp`].

mod config;
mod ui;

use ui::app::{Message, ViewerApp, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("airwave-viewer starting up");

    iced::application(ViewerApp::new, update, view)
        .subscription(subscription)
        .theme(theme)
        .title("Airwave TV Guide")
        .window_size(iced::Size::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT))
        .run()
}

/// Update function for iced
fn update(app: &mut ViewerApp, message: Message) -> iced::Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &ViewerApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &ViewerApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &ViewerApp) -> iced::Theme {
    app.theme()
}
