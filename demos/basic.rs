//! Standalone demo: a parent swatch next to the RGB settings panel.
//! Confirming in the panel repaints the swatch.
//!
//! Usage: `basic [CONFIG.toml] [RRGGBB]`

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_rgb_panel::{Fill, PanelConfig, SolidColor, rgb_settings_with_config};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = std::env::args()
        .nth(1)
        .map(|path| match PanelConfig::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                PanelConfig::default()
            }
        })
        .unwrap_or_default();

    let seed = std::env::args()
        .nth(2)
        .and_then(|hex| SolidColor::from_hex(&hex))
        .unwrap_or(SolidColor::WHITE);
    let parent = RwSignal::new(seed);

    floem::Application::new()
        .window(
            move |_| {
                h_stack((
                    empty().style(move |s| {
                        let c = parent.get();
                        s.size(120.0, 120.0)
                            .margin(12.0)
                            .border(1.0)
                            .border_color(Color::rgb8(180, 180, 180))
                            .background(Color::rgba(c.r(), c.g(), c.b(), c.a()))
                    }),
                    rgb_settings_with_config(
                        Fill::Solid(parent.get_untracked()),
                        config.clone(),
                        move |c: SolidColor| parent.set(c),
                    ),
                ))
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((520.0, 300.0))
                    .title("floem-rgb-panel"),
            ),
        )
        .run();
}
