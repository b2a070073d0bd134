use crate::{Canvas, draw};
use peek_base::{Rect, Vec2};
use peek_image::{RgbFrame, argb_to_rgb_into};

// room for stroke bands and label glyphs past the edges
const PIXEL_MARGIN: f32 = 4096.0;
const PIXEL_LIMIT: f32 = (1 << 24) as f32;

/// The drawing surface: an in-memory `0x00RRGGBB` framebuffer that video
/// frames and annotations are composited onto.
#[derive(Clone, Default)]
pub struct Surface {
    size: Vec2<usize>,
    pixels: Vec<u32>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface").field("size", &self.size).finish()
    }
}

impl Surface {
    pub fn new(size: Vec2<usize>) -> Self {
        Self {
            size,
            pixels: vec![0; size.area()],
        }
    }

    /// Pixels in row-major order, ready for `minifb::Window::update_with_buffer`.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.size.x + x]
    }

    /// Round `p` to pixels, clamped to a band around the surface wide enough
    /// that anything clamped is drawn fully off-screen.
    fn to_pixel(&self, p: Vec2<f32>) -> Vec2<i32> {
        let limit = (self.size.x.max(self.size.y) as f32 + PIXEL_MARGIN).min(PIXEL_LIMIT);
        let clamp = |v: f32| {
            if v.is_nan() {
                0
            } else {
                v.round().clamp(-limit, limit) as i32
            }
        };
        Vec2::new(clamp(p.x), clamp(p.y))
    }

    /// Copy the current contents into `frame`, which must have the same
    /// size. Returns `false`, leaving `frame` alone, when it does not.
    pub fn copy_into(&self, frame: &mut RgbFrame) -> bool {
        if frame.size() != self.size {
            return false;
        }
        argb_to_rgb_into(&self.pixels, frame.data_mut());
        true
    }

    /// Copy of the current contents as an RGB frame.
    pub fn to_rgb_frame(&self) -> RgbFrame {
        let mut frame = RgbFrame::black(self.size);
        self.copy_into(&mut frame);
        frame
    }
}

impl Canvas for Surface {
    fn size(&self) -> Vec2<usize> {
        self.size
    }

    fn resize(&mut self, size: Vec2<usize>) {
        if size != self.size {
            self.size = size;
            self.pixels = vec![0; size.area()];
        }
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn draw_frame(&mut self, frame: &RgbFrame) {
        if frame.is_empty() || self.size.is_empty() {
            return;
        }
        let src = frame.data();
        if frame.size() == self.size {
            for (dst, rgb) in self.pixels.iter_mut().zip(src.chunks_exact(3)) {
                *dst = (rgb[0] as u32) << 16 | (rgb[1] as u32) << 8 | rgb[2] as u32;
            }
            return;
        }
        // nearest neighbour
        let (sw, sh) = (frame.width(), frame.height());
        for y in 0..self.size.y {
            let sy = y * sh / self.size.y;
            for x in 0..self.size.x {
                let sx = x * sw / self.size.x;
                let [r, g, b] = frame.pixel(sx, sy);
                self.pixels[y * self.size.x + x] = (r as u32) << 16 | (g as u32) << 8 | b as u32;
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect<f32>, color: u32, line_width: u32) {
        // clamp the corners, not origin and size, so a far edge stays far
        let min = self.to_pixel(rect.min());
        let max = self.to_pixel(rect.max());
        let rect = Rect::new(min, max - min);
        draw::stroke_rect(&mut self.pixels, self.size, rect, line_width, color);
    }

    fn fill_text(&mut self, text: &str, origin: Vec2<f32>, color: u32, font_px: u32) {
        let origin = self.to_pixel(origin);
        let scale = (font_px as i32 / draw::GLYPH_SIZE).max(1) as u32;
        draw::draw_text(&mut self.pixels, self.size, text, origin, scale, color);
    }
}
