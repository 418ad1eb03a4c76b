//! Channel level slider (0–100 steps).
//!
//! Renders a horizontal gradient from black (left) to the pure channel color
//! (right) as a rasterized image, avoiding vger's broken linear gradient
//! coordinate handling.

use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect, Size, Stroke};
use floem::peniko::{self, Blob, Color};

use floem::reactive::create_effect;
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::channel::Channel;
use crate::constants;
use crate::controller::{SLIDER_STEPS, level_to_progress};

/// Rasterize a horizontal gradient: black on the left → `(r, g, b)` on the right.
fn rasterize_channel_gradient(width: u32, height: u32, r: f64, g: f64, b: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        let cr = (t * r * 255.0 + 0.5) as u8;
        let cg = (t * g * 255.0 + 0.5) as u8;
        let cb = (t * b * 255.0 + 0.5) as u8;
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = cr;
            buf[offset + 1] = cg;
            buf[offset + 2] = cb;
            buf[offset + 3] = 255;
        }
    }
    buf
}

/// Map a pointer x coordinate to a slider step, given the track width.
fn progress_at(x: f64, width: f64) -> Option<u32> {
    let r = constants::THUMB_RADIUS;
    let usable = width - 2.0 * r;
    if usable <= 0.0 {
        return None;
    }
    let t = ((x - r) / usable).clamp(0.0, 1.0);
    Some((t * f64::from(SLIDER_STEPS)).round() as u32)
}

/// Thumb center for a slider step; the inverse of [`progress_at`].
fn thumb_center_x(progress: u32, width: f64) -> f64 {
    let r = constants::THUMB_RADIUS;
    let t = f64::from(progress.min(SLIDER_STEPS)) / f64::from(SLIDER_STEPS);
    r + t * (width - 2.0 * r).max(0.0)
}

/// Thumb rings, outside in: (inset from the thumb radius, alpha, stroke width).
/// Alpha 255 draws white, anything else a translucent black edge.
const THUMB_RINGS: [(f64, u8, f64); 3] = [(0.0, 80, 1.0), (1.5, 255, 2.0), (3.0, 80, 1.0)];

fn stroke_thumb(cx: &mut PaintCx, center: Point) {
    for (inset, alpha, width) in THUMB_RINGS {
        let color = if alpha == u8::MAX {
            Color::WHITE
        } else {
            Color::rgba8(0, 0, 0, alpha)
        };
        let ring = Circle::new(center, constants::THUMB_RADIUS - inset);
        cx.stroke(&ring, color, &Stroke::new(width));
    }
}

/// Rasterized track gradient, rebuilt only when the pixel size changes.
struct GradientCache {
    base: (f64, f64, f64),
    image: Option<(peniko::Image, Vec<u8>)>,
    dims: (u32, u32),
}

impl GradientCache {
    fn new(base: (f64, f64, f64)) -> Self {
        Self {
            base,
            image: None,
            dims: (0, 0),
        }
    }

    /// The gradient image for a track of `size` logical pixels, with its
    /// renderer cache key.
    fn image(&mut self, size: Size, scale: f64) -> Option<&(peniko::Image, Vec<u8>)> {
        let scale = scale.max(1.0);
        let dims = (
            (size.width * scale).round() as u32,
            (size.height * scale).round() as u32,
        );
        if dims.0 == 0 || dims.1 == 0 {
            return None;
        }
        if self.dims != dims || self.image.is_none() {
            let (r, g, b) = self.base;
            let blob = Blob::new(Arc::new(rasterize_channel_gradient(dims.0, dims.1, r, g, b)));
            let key = blob.id().to_le_bytes().to_vec();
            let img = peniko::Image::new(blob, peniko::Format::Rgba8, dims.0, dims.1);
            self.image = Some((img, key));
            self.dims = dims;
        }
        self.image.as_ref()
    }
}

enum SliderUpdate {
    Level(f64),
    Enabled(bool),
}

pub struct ChannelSlider {
    id: ViewId,
    held: bool,
    enabled: bool,
    progress: u32,
    track: Size,
    on_change: Box<dyn Fn(u32)>,
    gradient: GradientCache,
}

/// Creates a horizontal slider for one channel.
///
/// - `level`: displayed level (0.0–1.0), re-read whenever its signals change.
/// - `enabled`: a disabled slider is dimmed and ignores the pointer.
/// - `on_change`: receives the new step (0–100) while dragging.
pub fn channel_slider(
    channel: Channel,
    level: impl Fn() -> f64 + 'static,
    enabled: impl Fn() -> bool + 'static,
    on_change: impl Fn(u32) + 'static,
) -> ChannelSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(SliderUpdate::Level(level()));
    });

    create_effect(move |_| {
        id.update_state(SliderUpdate::Enabled(enabled()));
    });

    ChannelSlider {
        id,
        held: false,
        enabled: true,
        progress: 0,
        track: Size::ZERO,
        on_change: Box::new(on_change),
        gradient: GradientCache::new(channel.primary()),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .flex_grow(1.0)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ChannelSlider {
    fn update_from_pointer(&mut self, x: f64) {
        if let Some(progress) = progress_at(x, self.track.width)
            && progress != self.progress
        {
            self.progress = progress;
            (self.on_change)(progress);
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
                SliderUpdate::Level(level) => {
                    if !self.held {
                        self.progress = level_to_progress(level);
                    }
                }
                SliderUpdate::Enabled(enabled) => {
                    self.enabled = enabled;
                    if !enabled {
                        self.held = false;
                    }
                }
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        if !self.enabled {
            return EventPropagation::Continue;
        }
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        if let Some(layout) = self.id.get_layout() {
            self.track = Size::new(layout.size.width.into(), layout.size.height.into());
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        if self.track.is_zero_area() {
            return;
        }
        let rect = self.track.to_rect();
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        let scale = cx.scale();
        if let Some((img, key)) = self.gradient.image(self.track, scale) {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: key,
                },
                rect,
            );
        }
        if !self.enabled {
            cx.fill(
                &rect,
                Color::rgba8(242, 242, 242, constants::DISABLED_OVERLAY_ALPHA),
                0.0,
            );
        }
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        // No thumb while disabled
        if self.enabled {
            let center = Point::new(
                thumb_center_x(self.progress, self.track.width),
                self.track.height / 2.0,
            );
            stroke_thumb(cx, center);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_runs_black_to_channel() {
        let buf = rasterize_channel_gradient(3, 1, 0.0, 1.0, 0.0);
        assert_eq!(&buf[0..4], &[0, 0, 0, 255]);
        assert_eq!(&buf[4..8], &[0, 128, 0, 255]);
        assert_eq!(&buf[8..12], &[0, 255, 0, 255]);
    }

    #[test]
    fn test_progress_at_track_edges() {
        let r = constants::THUMB_RADIUS;
        assert_eq!(progress_at(0.0, 100.0 + 2.0 * r), Some(0));
        assert_eq!(progress_at(r + 50.0, 100.0 + 2.0 * r), Some(50));
        assert_eq!(progress_at(500.0, 100.0 + 2.0 * r), Some(SLIDER_STEPS));
        assert_eq!(progress_at(5.0, 2.0 * r), None);
    }

    #[test]
    fn test_thumb_follows_progress() {
        let r = constants::THUMB_RADIUS;
        let width = 100.0 + 2.0 * r;
        assert_eq!(thumb_center_x(0, width), r);
        assert_eq!(thumb_center_x(SLIDER_STEPS, width), width - r);
        assert_eq!(thumb_center_x(SLIDER_STEPS + 7, width), width - r);
        for step in [0, 13, 50, 87, SLIDER_STEPS] {
            assert_eq!(progress_at(thumb_center_x(step, width), width), Some(step));
        }
    }
}
