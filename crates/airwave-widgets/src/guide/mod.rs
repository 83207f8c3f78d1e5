//! The guide grid widget family
//!
//! State lives in [`GuideState`] at the application level; the canvas
//! programs in [`canvas`] translate input events into callbacks and paint
//! the geometry the core computes; [`view`] wraps them as plain view
//! functions.

mod canvas;
mod state;
mod view;

pub use state::{GuideState, DAY_HEADER_HEIGHT, TIME_HEADER_HEIGHT};
pub use view::{day_header, guide_grid, time_header};
