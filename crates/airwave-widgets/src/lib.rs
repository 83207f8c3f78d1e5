//! iced widgets for the Airwave EPG viewer
//!
//! This crate renders what `airwave-core` computes. It follows iced 0.14
//! patterns throughout:
//!
//! - **State structs**: pure data ([`GuideState`]) owned by the application
//! - **View functions**: take state references + callback closures, return
//!   `Element<Message>`
//! - **Canvas Programs**: custom drawing and event-to-callback translation
//!   for the guide grid and the time header
//!
//! ## View functions
//!
//! - [`guide_grid`]: the virtualized channel/program grid with wheel
//!   scrolling, click-to-select, and the now line
//! - [`time_header`]: hour cells synchronized to the grid's scroll offset,
//!   with the current-time marker
//! - [`day_header`]: sticky day label derived from the scroll position

pub mod guide;
pub mod theme;

pub use guide::{
    day_header, guide_grid, time_header, GuideState, DAY_HEADER_HEIGHT, TIME_HEADER_HEIGHT,
};
