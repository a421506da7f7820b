//! The clickable HSV color wheel.
//!
//! Renders a wheel where angle maps to hue and radius maps to saturation,
//! always at full brightness. The wheel is rasterized once to an RGBA8
//! pixel buffer and the raster is scaled to widget size rather than
//! redrawn. A click inside the disc becomes a pick; clicks outside the
//! disc, and any click while the wheel is disabled, do nothing.

use std::f64::consts::TAU;
use std::sync::Arc;

use floem::kurbo::{BezPath, Circle, Point, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::Hsv;
use crate::constants;
use crate::math;

/// Build a closed `BezPath` circle from line segments (no cubic curves).
fn circle_path(center: Point, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    for i in 0..64 {
        let angle = TAU * i as f64 / 64.0;
        let pt = Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        );
        if i == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    path.close_path();
    path
}

/// Feather width in raster pixels for anti-aliasing the circle edge.
const FEATHER: f64 = 3.0;

/// Rasterize the full-brightness wheel to an RGBA8 buffer.
///
/// `width`/`height` are in physical pixels. The circle is inset by
/// [`FEATHER`] so the full anti-alias gradient fits inside the buffer.
/// Saturation reaches 1.0 at the circle edge; the feather zone only
/// affects alpha, not color, so edge pixels stay fully saturated.
fn rasterize_wheel(width: u32, height: u32) -> Vec<u8> {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    let radius = cx.min(cy) - FEATHER;

    let mut buf = vec![0u8; (width * height * 4) as usize];

    for py in 0..height {
        let dy = py as f64 + 0.5 - cy;
        let row_offset = (py * width * 4) as usize;

        for px in 0..width {
            let dx = px as f64 + 0.5 - cx;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist > radius + FEATHER {
                continue; // fully outside
            }

            // Anti-alias: smooth fade over FEATHER pixels at the edge
            let alpha = ((radius + FEATHER - dist) / FEATHER).clamp(0.0, 1.0);

            // Clamp saturation to the circle edge so colors stay fully
            // saturated in the feather zone (feather only affects alpha).
            let sat = (dist / radius).min(1.0);
            let mut hue = dy.atan2(dx).to_degrees();
            if hue < 0.0 {
                hue += 360.0;
            }

            let (r, g, b) = math::hsv_to_rgb(hue, sat, 1.0);
            let offset = row_offset + (px * 4) as usize;
            buf[offset] = r;
            buf[offset + 1] = g;
            buf[offset + 2] = b;
            buf[offset + 3] = (alpha * 255.0 + 0.5) as u8;
        }
    }

    buf
}

enum WheelUpdate {
    Marker(Option<Hsv>),
    Enabled(bool),
}

pub(crate) struct ColorWheel {
    id: ViewId,
    enabled: bool,
    marker: Option<Hsv>,
    size: floem::taffy::prelude::Size<f32>,
    on_pick: Option<Box<dyn Fn(Hsv)>>,
    /// Cached wheel image, rasterized once at a fixed resolution.
    wheel_img: Option<peniko::Image>,
    wheel_hash: Vec<u8>,
}

/// Creates the color wheel.
///
/// - `marker`: the last picked wheel position, drawn as a ring; `None`
///   clears it.
/// - `enabled`: when false, clicks pass through and the wheel dims.
/// - `on_pick`: fired with the wheel-space color of a click inside the
///   disc.
pub(crate) fn color_wheel(
    marker: RwSignal<Option<Hsv>>,
    enabled: RwSignal<bool>,
    on_pick: impl Fn(Hsv) + 'static,
) -> ColorWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        let m = marker.get();
        id.update_state(WheelUpdate::Marker(m));
    });

    create_effect(move |_| {
        let e = enabled.get();
        id.update_state(WheelUpdate::Enabled(e));
    });

    ColorWheel {
        id,
        enabled: enabled.get_untracked(),
        marker: marker.get_untracked(),
        size: Default::default(),
        on_pick: Some(Box::new(on_pick)),
        wheel_img: None,
        wheel_hash: Vec::new(),
    }
    .style(move |s| {
        let cursor = if enabled.get() {
            floem::style::CursorStyle::Pointer
        } else {
            floem::style::CursorStyle::Default
        };
        s.size(constants::WHEEL_SIZE, constants::WHEEL_SIZE)
            .cursor(cursor)
    })
}

impl ColorWheel {
    fn radius(&self) -> f64 {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        w.min(h) / 2.0
    }

    fn center(&self) -> (f64, f64) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        (w / 2.0, h / 2.0)
    }

    /// The square rect centered within the widget, used for drawing the wheel.
    fn wheel_rect(&self) -> Rect {
        let (cx, cy) = self.center();
        let r = self.radius();
        Rect::new(cx - r, cy - r, cx + r, cy + r)
    }

    /// Wheel-space color under a pointer position, `None` outside the disc.
    fn color_at(&self, pos: Point) -> Option<Hsv> {
        let (cx, cy) = self.center();
        let max_r = self.radius();
        if max_r <= 0.0 {
            return None;
        }
        Hsv::from_wheel_coords(pos.x - cx, pos.y - cy, max_r)
    }

    fn marker_position(&self) -> Option<(f64, f64)> {
        let hsv = self.marker?;
        let (cx, cy) = self.center();
        let angle = hsv.h.to_radians();
        let r = hsv.s * self.radius();
        Some((cx + angle.cos() * r, cy + angle.sin() * r))
    }

    /// Rasterize at a fixed resolution, then scale to widget size.
    fn ensure_wheel_image(&mut self) {
        if self.wheel_img.is_some() {
            return;
        }

        let size = constants::WHEEL_RASTER_SIZE;
        let pixels = rasterize_wheel(size, size);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob, peniko::Format::Rgba8, size, size);

        self.wheel_hash = b"wheel".to_vec();
        self.wheel_img = Some(img);
    }
}

impl View for ColorWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<WheelUpdate>() {
            match *update {
                WheelUpdate::Marker(m) => self.marker = m,
                WheelUpdate::Enabled(e) => self.enabled = e,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, _cx: &mut EventCx, event: &Event) -> EventPropagation {
        if let Event::PointerDown(e) = event {
            if !self.enabled {
                return EventPropagation::Continue;
            }
            // Outside the disc the click picks nothing.
            let Some(hsv) = self.color_at(e.pos) else {
                return EventPropagation::Continue;
            };
            if let Some(cb) = &self.on_pick {
                cb(hsv);
            }
            self.id.request_layout();
            return EventPropagation::Stop;
        }
        EventPropagation::Continue
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

        let (center_x, center_y) = self.center();
        let radius = self.radius();
        let center_pt = Point::new(center_x, center_y);

        // Draw the wheel image (fixed-resolution, scaled by the renderer)
        let wheel_rect = self.wheel_rect();
        let clip = Circle::new(center_pt, radius);
        cx.save();
        cx.clip(&clip);
        self.ensure_wheel_image();
        if let Some(ref img) = self.wheel_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.wheel_hash,
                },
                wheel_rect,
            );
        }
        cx.restore();

        // Dim the wheel while picks are not being accepted
        if !self.enabled {
            let overlay = circle_path(center_pt, radius);
            cx.fill(&overlay, Color::rgba(1.0, 1.0, 1.0, 0.55), 0.0);
        }

        // Marker ring on the last pick
        if let Some((mx, my)) = self.marker_position() {
            let marker_pt = Point::new(mx, my);
            let outer = Circle::new(marker_pt, constants::MARKER_RADIUS + 1.0);
            cx.stroke(
                &outer,
                Color::rgba8(0, 0, 0, 80),
                &floem::kurbo::Stroke::new(1.0),
            );
            let ring = Circle::new(marker_pt, constants::MARKER_RADIUS);
            cx.stroke(&ring, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
            let inner = Circle::new(marker_pt, constants::MARKER_RADIUS - 1.5);
            cx.stroke(
                &inner,
                Color::rgba8(0, 0, 0, 80),
                &floem::kurbo::Stroke::new(1.0),
            );
        }
    }
}
