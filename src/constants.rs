//! Sizing, color, and styling constants for the panel.

/// Channel slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Thumb radius on channel sliders
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for the preview swatch and buttons
pub const RADIUS: f32 = 10.0;

/// Gap between panel rows
pub const GAP: f32 = 8.0;

/// Padding around the whole panel
pub const PADDING: f32 = 12.0;

/// Channel text field width
pub const INPUT_WIDTH: f32 = 36.0;

/// Channel value label width
pub const LABEL_WIDTH: f32 = 28.0;

/// Preview swatch height
pub const PREVIEW_HEIGHT: f32 = 96.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Button caption font size
pub const BUTTON_FONT: f32 = 12.0;
