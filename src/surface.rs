//! The controls the panel drives, seen as opaque get/set targets.

use crate::color::SolidColor;
use crate::state::Channel;

/// How a slider's track is painted after a redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackPaint {
    /// Evenly spaced stops, left to right. Used for both the normal and
    /// selected track.
    Gradient([SolidColor; 3]),
    /// Minimum-track tint.
    Tint(SolidColor),
}

/// Setters and getters for the preview swatch and the three channel
/// bindings (slider, label, text field).
pub trait ControlSurface {
    fn set_preview(&mut self, color: SolidColor);

    /// `value` is on the 0–255 display scale.
    fn set_slider(&mut self, channel: Channel, value: f64);

    fn set_track(&mut self, channel: Channel, paint: TrackPaint);

    fn set_label(&mut self, channel: Channel, text: &str);

    /// Current text field contents; `None` when the field holds no text.
    fn field_text(&self, channel: Channel) -> Option<String>;

    fn set_field_text(&mut self, channel: Channel, text: &str);
}
