//! Floem binding for [`SettingsPanel`]: preview swatch, one slider / label /
//! text field row per channel, the copy button and the confirm trigger.
//! Pressing the panel background ends any text edit in progress.

use std::cell::RefCell;
use std::rc::Rc;

use floem::View;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::channel_slider::channel_slider;
use crate::color::{Fill, SolidColor};
use crate::config::PanelConfig;
use crate::constants;
use crate::inputs::{DoneAccessory, FieldHandlers, channel_input, copy_button};
use crate::panel::{HostCallback, SettingsPanel};
use crate::state::Channel;
use crate::surface::{ControlSurface, TrackPaint};

/// Control surface backed by reactive signals; the views below read them.
#[derive(Clone, Copy)]
pub(crate) struct SignalSurface {
    preview: RwSignal<SolidColor>,
    sliders: [RwSignal<f64>; 3],
    tracks: [RwSignal<TrackPaint>; 3],
    labels: [RwSignal<String>; 3],
    fields: [RwSignal<String>; 3],
}

impl SignalSurface {
    fn new() -> Self {
        Self {
            preview: RwSignal::new(SolidColor::WHITE),
            sliders: [(); 3].map(|_| RwSignal::new(0.0)),
            tracks: [(); 3].map(|_| RwSignal::new(TrackPaint::Tint(SolidColor::WHITE))),
            labels: [(); 3].map(|_| RwSignal::new(String::new())),
            fields: [(); 3].map(|_| RwSignal::new(String::new())),
        }
    }
}

impl ControlSurface for SignalSurface {
    fn set_preview(&mut self, color: SolidColor) {
        self.preview.set(color);
    }

    fn set_slider(&mut self, channel: Channel, value: f64) {
        self.sliders[channel.index()].set(value);
    }

    fn set_track(&mut self, channel: Channel, paint: TrackPaint) {
        self.tracks[channel.index()].set(paint);
    }

    fn set_label(&mut self, channel: Channel, text: &str) {
        self.labels[channel.index()].set(text.to_string());
    }

    fn field_text(&self, channel: Channel) -> Option<String> {
        let text = self.fields[channel.index()].get_untracked();
        (!text.is_empty()).then_some(text)
    }

    fn set_field_text(&mut self, channel: Channel, text: &str) {
        let field = self.fields[channel.index()];
        if field.get_untracked() != text {
            field.set(text.to_string());
        }
    }
}

type SharedPanel = Rc<RefCell<SettingsPanel<SignalSurface>>>;

fn channel_row(
    panel: SharedPanel,
    surface: SignalSurface,
    channel: Channel,
    done: DoneAccessory,
) -> impl IntoView {
    let i = channel.index();
    let on_slide = {
        let panel = panel.clone();
        move |v: f64| panel.borrow_mut().on_slider_changed(channel, v)
    };
    let handlers = FieldHandlers {
        begin: {
            let panel = panel.clone();
            Box::new(move || panel.borrow_mut().begin_edit(channel))
        },
        end: Box::new(move || panel.borrow_mut().end_edit(channel)),
    };
    let value_label = surface.labels[i];

    h_stack((
        label(move || channel.label()).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
                .width(12.0)
        }),
        channel_slider(surface.sliders[i], surface.tracks[i], on_slide)
            .style(|s| s.flex_grow(1.0)),
        label(move || value_label.get()).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .font_family("monospace".to_string())
                .width(constants::LABEL_WIDTH)
                .justify_content(Some(floem::taffy::AlignContent::End))
        }),
        channel_input(surface.fields[i], handlers, done),
    ))
    .style(|s| s.items_center().gap(constants::GAP / 2.0))
}

fn confirm_button(panel: SharedPanel) -> impl IntoView {
    container(label(|| "Confirm").style(|s| {
        s.font_size(constants::BUTTON_FONT).color(Color::WHITE)
    }))
    .style(|s| {
        s.padding_horiz(12.0)
            .padding_vert(4.0)
            .border_radius(constants::RADIUS / 2.0)
            .background(Color::rgb8(0, 122, 255))
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(0, 100, 220)))
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        panel.borrow_mut().confirm();
    })
}

/// Builds the panel view, seeds it from `initial` and draws it once.
pub(crate) fn settings_view(
    initial: Fill,
    config: PanelConfig,
    host: impl HostCallback + 'static,
) -> impl IntoView {
    let surface = SignalSurface::new();
    let done = DoneAccessory::new(&config.done_label);
    let panel: SharedPanel = Rc::new(RefCell::new(SettingsPanel::new(surface, config, host)));
    panel.borrow_mut().present(&initial);

    let preview = surface.preview;
    let copy_panel = panel.clone();

    let root = v_stack((
        empty().style(move |s| {
            let c = preview.get();
            s.width_full()
                .height(constants::PREVIEW_HEIGHT)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(Color::rgba(c.r(), c.g(), c.b(), c.a()))
        }),
        channel_row(panel.clone(), surface, Channel::Red, done.clone()),
        channel_row(panel.clone(), surface, Channel::Green, done.clone()),
        channel_row(panel.clone(), surface, Channel::Blue, done.clone()),
        h_stack((
            copy_button(move || copy_panel.borrow().rgb_text()),
            empty().style(|s| s.flex_grow(1.0)),
            confirm_button(panel),
        ))
        .style(|s| s.items_center()),
    ))
    .keyboard_navigable()
    .style(|s| {
        s.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .background(Color::rgb8(242, 242, 242))
    });
    // A press on the background takes focus off any channel field, which
    // ends its edit. Fields, sliders and buttons stop the press themselves.
    let root_id = root.id();
    root.on_event_cont(floem::event::EventListener::PointerDown, move |_| {
        root_id.request_focus();
    })
}
