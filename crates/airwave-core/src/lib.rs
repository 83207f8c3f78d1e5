//! Airwave Core - Shared library for the Airwave EPG viewer
//!
//! Everything in this crate is UI-framework-agnostic: the data model, the
//! time/interval math, the timeline geometry (time → pixel mapping), the
//! row virtualizer, and the HTTP client for the EPG backend. The widget
//! and app crates consume these as pure functions; nothing here holds
//! mutable shared state.

pub mod api;
pub mod guide;
pub mod time;
pub mod timeline;
pub mod types;
pub mod virtualizer;

pub use types::*;
