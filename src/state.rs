//! Canonical color state for the settings panel.

use crate::color::{Fill, SolidColor};
use crate::error::DecompositionError;
use crate::math;

/// One independently editable color dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Short label shown next to the channel's controls.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// RGBA held in normalized 0.0–1.0 form. Alpha is carried but not editable;
/// the composed color is always opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    rgb: [f64; 3],
    alpha: f64,
}

impl Default for ColorState {
    fn default() -> Self {
        Self {
            rgb: [1.0; 3],
            alpha: 1.0,
        }
    }
}

impl ColorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` for one channel. Callers clamp beforehand; anything
    /// that slips through is clamped here so the state stays in range.
    pub fn set_channel(&mut self, channel: Channel, value: f64) {
        debug_assert!((0.0..=1.0).contains(&value), "unclamped channel value {value}");
        self.rgb[channel.index()] = math::clamp_unit(value);
    }

    pub fn channel(&self, channel: Channel) -> f64 {
        self.rgb[channel.index()]
    }

    /// Channel value on the 0–255 display scale.
    pub fn display(&self, channel: Channel) -> u8 {
        math::to_display(self.channel(channel))
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn composed_color(&self) -> SolidColor {
        let [r, g, b] = self.rgb;
        SolidColor::from_rgba(r, g, b, 1.0)
    }

    /// Replace the state with the channels of `fill`. Leaves the state
    /// untouched when the fill has no RGB decomposition.
    pub fn from_fill(&mut self, fill: &Fill) -> Result<(), DecompositionError> {
        let c = fill.decompose()?;
        self.rgb = [c.r(), c.g(), c.b()].map(math::clamp_unit);
        self.alpha = math::clamp_unit(c.a());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_opaque_white() {
        let state = ColorState::new();
        for ch in Channel::ALL {
            assert_eq!(state.channel(ch), 1.0);
        }
        assert_eq!(state.composed_color(), SolidColor::WHITE);
    }

    #[test]
    fn set_channel_touches_only_that_channel() {
        let mut state = ColorState::new();
        state.from_fill(&Fill::Solid(SolidColor::from_rgba(0.1, 0.2, 0.3, 1.0))).unwrap();
        let green = state.channel(Channel::Green).to_bits();
        let blue = state.channel(Channel::Blue).to_bits();

        state.set_channel(Channel::Red, 0.75);

        assert_eq!(state.channel(Channel::Red), 0.75);
        assert_eq!(state.channel(Channel::Green).to_bits(), green);
        assert_eq!(state.channel(Channel::Blue).to_bits(), blue);
    }

    #[test]
    fn composed_color_is_always_opaque() {
        let mut state = ColorState::new();
        state.from_fill(&Fill::Solid(SolidColor::from_rgba(0.2, 0.4, 0.6, 0.3))).unwrap();
        assert_eq!(state.alpha(), 0.3);
        assert_eq!(state.composed_color().a(), 1.0);
        assert_eq!(state.composed_color().g(), 0.4);
    }

    #[test]
    fn failed_decomposition_keeps_previous_state() {
        let mut state = ColorState::new();
        state.set_channel(Channel::Blue, 0.25);
        let before = state;

        let err = state.from_fill(&Fill::Pattern("checker".into())).unwrap_err();

        assert_eq!(err, DecompositionError::Pattern("checker".into()));
        assert_eq!(state, before);
        assert!(state.from_fill(&Fill::Gray { white: 0.1, alpha: 1.0 }).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn display_rounds_to_nearest() {
        let mut state = ColorState::new();
        state.set_channel(Channel::Green, 0.5);
        assert_eq!(state.display(Channel::Green), 128);
    }
}
