//! Sizing, color, and styling constants for the game UI.

/// Fixed raster resolution for the wheel image (physical pixels).
pub const WHEEL_RASTER_SIZE: u32 = 512;

/// On-screen wheel diameter.
pub const WHEEL_SIZE: f32 = 260.0;

/// Marker ring radius on the wheel.
pub const MARKER_RADIUS: f64 = 8.0;

/// Border radius for cards and swatches.
pub const RADIUS: f32 = 8.0;

/// Gap between panels.
pub const GAP: f32 = 12.0;

/// Padding around the window content.
pub const PADDING: f32 = 16.0;

/// Username input field width.
pub const NAME_INPUT_WIDTH: f32 = 150.0;

/// Target / guess swatch side length.
pub const SWATCH_SIZE: f32 = 88.0;

/// Sidebar (leaderboard + roster) width.
pub const SIDEBAR_WIDTH: f32 = 280.0;

/// Heading font size.
pub const HEADING_FONT: f32 = 16.0;

/// Body font size.
pub const BODY_FONT: f32 = 13.0;

/// Small-label font size.
pub const LABEL_FONT: f32 = 11.0;
