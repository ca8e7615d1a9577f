//! Shared color constants for the UI.

use egui::Color32;

/// Parsed import and success notices.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Errors and failed imports.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Requests in flight.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Table frame border.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header row background.
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);
