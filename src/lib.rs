//! # floem-rgb-panel
//!
//! An RGB settings panel for [Floem](https://github.com/lapce/floem).
//!
//! Three channel sliders and three channel text fields edit a single color,
//! with a live preview swatch. Every change to one channel redraws all six
//! controls, so they never disagree. Confirming hands the color back to the
//! host through a callback.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_rgb_panel::{rgb_settings, Fill, SolidColor};
//!
//! let chosen = RwSignal::new(SolidColor::WHITE);
//! let panel = rgb_settings(Fill::Solid(chosen.get_untracked()), move |c: SolidColor| chosen.set(c));
//! // Put `panel` in your Floem view tree.
//! ```
//!
//! The synchronization logic lives in [`SettingsPanel`] and only talks to
//! the widgets through [`ControlSurface`], so it can be driven without a
//! window.

mod channel_slider;
mod color;
mod config;
mod constants;
mod edit;
mod error;
mod inputs;
mod math;
mod panel;
mod settings_view;
mod state;
mod surface;
mod track;

pub use color::{Fill, SolidColor};
pub use config::{PanelConfig, ParsePolicy};
pub use edit::{Commit, FieldState, PendingEditCache, parse_channel_text, resolve_channel_text};
pub use error::{ChannelTextError, ConfigError, DecompositionError};
pub use math::DISPLAY_MAX;
pub use panel::{HostCallback, SettingsPanel};
pub use state::{Channel, ColorState};
pub use surface::{ControlSurface, TrackPaint};
pub use track::{channel_gradient, channel_tint};

use std::sync::Once;

use floem::prelude::*;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the settings panel view with the default [`PanelConfig`].
///
/// `initial` seeds the color; a fill that cannot be split into RGB leaves
/// the panel at opaque white. `on_confirm` receives the composed color each
/// time the user confirms.
pub fn rgb_settings(initial: Fill, on_confirm: impl HostCallback + 'static) -> impl IntoView {
    rgb_settings_with_config(initial, PanelConfig::default(), on_confirm)
}

/// Creates the settings panel view with an explicit [`PanelConfig`].
pub fn rgb_settings_with_config(
    initial: Fill,
    config: PanelConfig,
    on_confirm: impl HostCallback + 'static,
) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    settings_view::settings_view(initial, config, on_confirm)
}
