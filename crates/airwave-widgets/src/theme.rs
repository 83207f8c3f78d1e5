//! Shared theme constants for the guide widgets
//!
//! Colors used by the grid and header canvases. Widget-level containers
//! (day header, buttons) use the iced theme palette instead; these
//! constants cover only custom canvas drawing.

use iced::Color;

/// Grid background behind the timeline area
pub const GRID_BACKGROUND: Color = Color::from_rgb(0.07, 0.07, 0.09);

/// Background of the channel column and the time header
pub const PANEL_BACKGROUND: Color = Color::from_rgb(0.11, 0.11, 0.14);

/// Strong border (column edge, header bottom)
pub const BORDER: Color = Color::from_rgb(0.24, 0.24, 0.28);

/// Soft border (tile outlines, hour separators, row separators)
pub const BORDER_SOFT: Color = Color::from_rgb(0.17, 0.17, 0.21);

/// Default program tile fill
pub const TILE_BACKGROUND: Color = Color::from_rgb(0.13, 0.13, 0.16);

/// Tile fill for the program airing now
pub const TILE_NOW_PLAYING: Color = Color::from_rgb(0.19, 0.19, 0.25);

/// Tile fill for the selected program
pub const TILE_SELECTED: Color = Color::from_rgb(0.16, 0.22, 0.32);

/// Primary text (titles)
pub const TEXT_PRIMARY: Color = Color::from_rgb(0.92, 0.92, 0.94);

/// Secondary text (times, hour labels)
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.62, 0.62, 0.68);

/// Accent for progress bars and the header's now marker (amber)
pub const ACCENT: Color = Color::from_rgb(0.98, 0.77, 0.18);

/// The vertical current-time line across the grid (pink)
pub const NOW_LINE: Color = Color::from_rgb(0.93, 0.28, 0.60);
