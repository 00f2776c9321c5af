//! Slider track paint derived from the current color.

use crate::color::SolidColor;
use crate::state::{Channel, ColorState};
use crate::surface::TrackPaint;

/// Positions the channel sweeps along its own track.
const SWEEP: [f64; 3] = [0.0, 0.5, 1.0];

/// Three stops where `channel` runs through 0.0, 0.5 and 1.0 while the other
/// two channels hold their current values.
pub fn channel_gradient(state: &ColorState, channel: Channel) -> [SolidColor; 3] {
    SWEEP.map(|v| {
        let mut stop = *state;
        stop.set_channel(channel, v);
        stop.composed_color()
    })
}

/// Color holding only `channel`'s value, the others at zero.
pub fn channel_tint(state: &ColorState, channel: Channel) -> SolidColor {
    let mut tint = ColorState::new();
    for ch in Channel::ALL {
        tint.set_channel(ch, if ch == channel { state.channel(ch) } else { 0.0 });
    }
    tint.composed_color()
}

pub fn track_paint(state: &ColorState, channel: Channel, gradient: bool) -> TrackPaint {
    if gradient {
        TrackPaint::Gradient(channel_gradient(state, channel))
    } else {
        TrackPaint::Tint(channel_tint(state, channel))
    }
}
