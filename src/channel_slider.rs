//! Channel slider (0–255 display scale).
//!
//! The track shows either the three-stop gradient the channel sweeps through
//! or, when gradients are off, a tint of the channel's own value up to the
//! thumb. Gradients are rasterized to an image, as vger's linear gradient
//! coordinate handling cannot be trusted.

#[cfg(feature = "gradient")]
use std::sync::Arc;

use floem::kurbo::Rect;
#[cfg(feature = "gradient")]
use floem::peniko::{self, Blob};
use floem::peniko::Color;

use floem::reactive::{RwSignal, SignalGet, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::color::SolidColor;
use crate::constants;
#[cfg(feature = "gradient")]
use crate::math;
use crate::math::DISPLAY_MAX;
use crate::surface::TrackPaint;

const EMPTY_TRACK: Color = Color::rgb8(220, 220, 220);

fn to_color(c: SolidColor) -> Color {
    Color::rgba(c.r(), c.g(), c.b(), c.a())
}

enum SliderUpdate {
    Value(f64),
    Track(TrackPaint),
}

pub struct ChannelSlider {
    id: ViewId,
    held: bool,
    /// Display-scale value, 0–255.
    value: f64,
    track: TrackPaint,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64)>>,
    #[cfg(feature = "gradient")]
    grad_img: Option<peniko::Image>,
    #[cfg(feature = "gradient")]
    grad_hash: Vec<u8>,
    #[cfg(feature = "gradient")]
    cached_stops: [(u8, u8, u8); 3],
    #[cfg(feature = "gradient")]
    cached_dims: (u32, u32),
}

/// Creates a horizontal channel slider.
///
/// - `value`: display-scale position, 0 (left) to 255 (right).
/// - `track`: paint for the track, refreshed on every redraw.
/// - `on_change`: called with the new display-scale value when the user
///   drags; the slider does not write `value` itself.
pub fn channel_slider(
    value: RwSignal<f64>,
    track: RwSignal<TrackPaint>,
    on_change: impl Fn(f64) + 'static,
) -> ChannelSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let v = value.get();
        id.update_state(SliderUpdate::Value(v));
    });

    create_effect(move |_| {
        let t = track.get();
        id.update_state(SliderUpdate::Track(t));
    });

    ChannelSlider {
        id,
        held: false,
        value: value.get_untracked(),
        track: track.get_untracked(),
        size: Default::default(),
        on_change: Some(Box::new(on_change)),
        #[cfg(feature = "gradient")]
        grad_img: None,
        #[cfg(feature = "gradient")]
        grad_hash: Vec::new(),
        #[cfg(feature = "gradient")]
        cached_stops: [(0, 0, 0); 3],
        #[cfg(feature = "gradient")]
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ChannelSlider {
    /// Move to the pointer and report it. Returns false when the position
    /// did not change.
    fn update_from_pointer(&mut self, x: f64) -> bool {
        let w = self.size.width as f64;
        let r = constants::THUMB_RADIUS;
        let usable = w - 2.0 * r;
        if usable <= 0.0 {
            return false;
        }
        let next = ((x - r) / usable).clamp(0.0, 1.0) * DISPLAY_MAX;
        if next == self.value {
            return false;
        }
        self.value = next;
        if let Some(cb) = &self.on_change {
            cb(self.value);
        }
        true
    }

    #[cfg(feature = "gradient")]
    fn ensure_gradient_image(&mut self, stops: [SolidColor; 3], scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let key = stops.map(|c| c.to_rgb());
        let dims = (pw, ph);
        if self.grad_img.is_some() && self.cached_dims == dims && self.cached_stops == key {
            return;
        }

        let pixels = math::rasterize_stops(pw, ph, &stops.map(|c| (c.r(), c.g(), c.b())));
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        let id = blob.id();
        self.grad_hash = id.to_le_bytes().to_vec();
        self.grad_img = Some(img);
        self.cached_stops = key;
        self.cached_dims = dims;
    }

    fn paint_track(&mut self, cx: &mut PaintCx, rect: Rect, thumb_x: f64) {
        match self.track {
            #[cfg(feature = "gradient")]
            TrackPaint::Gradient(stops) => {
                let scale = cx.scale();
                self.ensure_gradient_image(stops, scale);
                if let Some(ref img) = self.grad_img {
                    cx.draw_img(
                        floem_renderer::Img {
                            img: img.clone(),
                            hash: &self.grad_hash,
                        },
                        rect,
                    );
                }
            }
            // Without rasterization, the middle stop is the best single color.
            #[cfg(not(feature = "gradient"))]
            TrackPaint::Gradient(stops) => cx.fill(&rect, to_color(stops[1]), 0.0),
            TrackPaint::Tint(tint) => {
                cx.fill(&rect, EMPTY_TRACK, 0.0);
                let filled = Rect::new(rect.x0, rect.y0, thumb_x, rect.y1);
                cx.fill(&filled, to_color(tint), 0.0);
            }
        }
    }
}

impl View for ChannelSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                SliderUpdate::Value(v) => self.value = v.clamp(0.0, DISPLAY_MAX),
                SliderUpdate::Track(t) => self.track = t,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                if self.update_from_pointer(e.pos.x) {
                    self.id.request_layout();
                }
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    if self.update_from_pointer(e.pos.x) {
                        self.id.request_layout();
                    }
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.held = false;
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        let radius = constants::THUMB_RADIUS;
        let thumb_x = radius + (self.value / DISPLAY_MAX) * (w - 2.0 * radius);

        // Clip to rounded rect for rounded ends
        cx.save();
        cx.clip(&rrect);
        self.paint_track(cx, rect, thumb_x);
        cx.restore();

        // Slider outline
        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb (circular ring; left = 0, right = 255)
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let innermost = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 3.0);
        cx.stroke(
            &innermost,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
