//! Channel text fields and the small buttons around them.

use std::rc::Rc;

use floem::View;
use floem::event::{Event, EventPropagation};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::constants;

/// The "Done" control shown beside a text field while it is being edited.
/// One value is built per panel and shared by all three fields.
#[derive(Debug, Clone)]
pub(crate) struct DoneAccessory {
    label: Rc<str>,
}

impl DoneAccessory {
    pub(crate) fn new(label: &str) -> Self {
        Self {
            label: Rc::from(label),
        }
    }

    /// Taking focus away from the field ends its edit; the field's own
    /// focus-lost handler does the commit.
    fn view(self, editing: RwSignal<bool>) -> impl IntoView {
        let text = self.label;
        let button = container(label(move || text.to_string()).style(|s| {
            s.font_size(constants::BUTTON_FONT)
                .color(Color::rgb8(0, 122, 255))
        }))
        .keyboard_navigable()
        .style(move |s| {
            s.padding_horiz(4.0)
                .border_radius(3.0)
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.background(Color::rgb8(230, 230, 230)))
                .apply_if(!editing.get(), |s| s.hide())
        });
        let id = button.id();
        button.on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            id.request_focus();
        })
    }
}

/// Edit lifecycle hooks for one channel field.
pub(crate) struct FieldHandlers {
    pub begin: Box<dyn Fn()>,
    pub end: Box<dyn Fn()>,
}

/// A channel text field. Gaining focus begins an edit; losing focus or
/// pressing Enter ends it. Enter keeps the field focused, so a fresh edit
/// begins right after the commit.
pub(crate) fn channel_input(
    text: RwSignal<String>,
    handlers: FieldHandlers,
    done: DoneAccessory,
) -> impl IntoView {
    let editing = RwSignal::new(false);
    let FieldHandlers { begin, end } = handlers;
    let begin: Rc<dyn Fn()> = Rc::from(begin);
    let end: Rc<dyn Fn()> = Rc::from(end);

    let on_focus = {
        let begin = begin.clone();
        move |_: &Event| {
            editing.set(true);
            begin();
        }
    };
    let on_blur = {
        let end = end.clone();
        move |_: &Event| {
            editing.set(false);
            end();
        }
    };
    let on_key = move |e: &Event| {
        if let Event::KeyDown(ke) = e
            && ke.key.logical_key == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
        {
            end();
            begin();
            return EventPropagation::Stop;
        }
        EventPropagation::Continue
    };

    h_stack((
        text_input(text)
            .style(|s| {
                s.width(constants::INPUT_WIDTH)
                    .padding(2.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(Color::WHITE)
                    .border(1.0)
                    .border_color(Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
            })
            .on_event_cont(floem::event::EventListener::FocusGained, on_focus)
            .on_event_cont(floem::event::EventListener::FocusLost, on_blur)
            .on_event(floem::event::EventListener::KeyDown, on_key),
        done.view(editing),
    ))
    .style(|s| s.items_center().gap(2.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    match result {
        Ok(()) => tracing::debug!("Copied {:?} to clipboard", text),
        Err(e) => tracing::warn!("Failed to copy to clipboard: {}", e),
    }
}
