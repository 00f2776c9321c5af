//! Settings panel controller.
//!
//! Owns the [`ColorState`] and keeps the three channel bindings (slider,
//! label, text field) and the preview swatch in step with it. Every accepted
//! change to one channel ends in a full [`SettingsPanel::redraw`], so no
//! control is ever left showing a stale value.

use crate::color::{Fill, SolidColor};
use crate::config::{PanelConfig, ParsePolicy};
use crate::edit::{Commit, FieldState, PendingEditCache, resolve_channel_text};
use crate::math;
use crate::state::{Channel, ColorState};
use crate::surface::ControlSurface;
use crate::track;

/// Receives the composed color when the user confirms.
pub trait HostCallback {
    fn on_color_confirmed(&mut self, color: SolidColor);
}

impl<F: FnMut(SolidColor)> HostCallback for F {
    fn on_color_confirmed(&mut self, color: SolidColor) {
        self(color)
    }
}

pub struct SettingsPanel<S: ControlSurface> {
    surface: S,
    config: PanelConfig,
    state: ColorState,
    pending: PendingEditCache,
    host: Box<dyn HostCallback>,
}

impl<S: ControlSurface> SettingsPanel<S> {
    pub fn new(surface: S, config: PanelConfig, host: impl HostCallback + 'static) -> Self {
        Self {
            surface,
            config,
            state: ColorState::new(),
            pending: PendingEditCache::default(),
            host: Box::new(host),
        }
    }

    /// Seed the state from the host's fill and draw every control once.
    ///
    /// A fill without an RGB decomposition keeps the current state.
    pub fn present(&mut self, initial: &Fill) {
        if let Err(e) = self.state.from_fill(initial) {
            tracing::warn!("Ignoring initial fill: {}", e);
        }
        self.redraw();
    }

    /// A slider moved. `display_value` is on the 0–255 scale.
    pub fn on_slider_changed(&mut self, channel: Channel, display_value: f64) {
        let value = math::from_display(display_value);
        tracing::debug!(?channel, display_value, "slider changed");
        self.state.set_channel(channel, value);
        self.redraw();
    }

    pub fn begin_edit(&mut self, channel: Channel) {
        let text = self.surface.field_text(channel);
        self.pending.begin(channel, text);
    }

    /// Commit a channel's text field.
    ///
    /// Empty text is put back to what the field held before editing and the
    /// color is left alone. Otherwise the text is parsed, clamped to 0–255
    /// and stored; unparseable text follows the configured [`ParsePolicy`].
    ///
    /// [`ParsePolicy`]: crate::config::ParsePolicy
    pub fn end_edit(&mut self, channel: Channel) {
        let text = self.surface.field_text(channel).unwrap_or_default();
        let before = self.pending.end(channel).map(str::to_owned);

        let (commit, issue) = resolve_channel_text(&text, self.config.parse_policy);
        if let Some(issue) = &issue {
            tracing::debug!(?channel, "Recovering channel text: {}", issue);
        }

        match (commit, before) {
            (Commit::Value(display), _) => {
                self.state.set_channel(channel, math::from_display(display));
                self.redraw();
            }
            (Commit::Revert, Some(before)) => self.surface.set_field_text(channel, &before),
            // Nothing to roll back to: an empty field parses like any other
            // garbage, so it commits the maximum only when failing open.
            (Commit::Revert, None)
                if text.is_empty() && self.config.parse_policy == ParsePolicy::FailOpen =>
            {
                self.state.set_channel(channel, 1.0);
                self.redraw();
            }
            (Commit::Revert, None) => self.redraw(),
        }
    }

    /// Hand the composed color to the host. The panel stays open.
    pub fn confirm(&mut self) {
        let color = self.state.composed_color();
        tracing::info!("Confirmed color #{}", color.to_hex());
        self.host.on_color_confirmed(color);
    }

    /// Re-derive the preview and all six controls from the state.
    pub fn redraw(&mut self) {
        self.surface.set_preview(self.state.composed_color());
        for ch in Channel::ALL {
            self.surface.set_slider(ch, self.state.display(ch) as f64);
            let text = math::format_display(self.state.channel(ch));
            self.surface.set_label(ch, &text);
            self.surface.set_field_text(ch, &text);
            self.surface
                .set_track(ch, track::track_paint(&self.state, ch, self.config.gradient_tracks));
        }
    }

    /// `"R, G, B"` on the display scale, for copying.
    pub fn rgb_text(&self) -> String {
        let [r, g, b] = Channel::ALL.map(|ch| self.state.display(ch));
        format!("{}, {}, {}", r, g, b)
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn field_state(&self, channel: Channel) -> FieldState {
        self.pending.state(channel)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The host widgets own their text while editing; this is how it gets in.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
