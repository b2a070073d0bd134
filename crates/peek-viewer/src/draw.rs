//! Raster helpers over a row-major `0x00RRGGBB` pixel buffer.
//!
//! All drawing is clipped to the buffer; coordinates may be negative or lie
//! past the edges.

use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use peek_base::{Rect, Vec2};

/// Side of one unscaled glyph cell.
pub const GLYPH_SIZE: i32 = 8;

/// Fill the inclusive rectangle `(x0, y0)..=(x1, y1)`.
pub fn fill_rect(
    buf: &mut [u32],
    size: Vec2<usize>,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: u32,
) {
    let (width, height) = (size.x as i32, size.y as i32);
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(width - 1);
    let y1 = y1.min(height - 1);
    if x0 > x1 || y0 > y1 {
        return;
    }
    for y in y0..=y1 {
        let row = y as usize * size.x;
        buf[row + x0 as usize..=row + x1 as usize].fill(color);
    }
}

/// Outline `rect` with a stroke `line_width` pixels wide, centred on the
/// rectangle's edges the way a 2D canvas strokes a path.
pub fn stroke_rect(
    buf: &mut [u32],
    size: Vec2<usize>,
    rect: Rect<i32>,
    line_width: u32,
    color: u32,
) {
    if line_width == 0 {
        return;
    }
    let lw = line_width.min(i32::MAX as u32) as i32;
    let inner = lw / 2;
    let outer = lw - inner;
    let min = rect.origin;
    let max = Vec2::new(
        min.x.saturating_add(rect.size.x),
        min.y.saturating_add(rect.size.y),
    );
    // band covering `edge`, as an inclusive range
    let band = |edge: i32| (edge.saturating_sub(inner), edge.saturating_add(outer - 1));
    let (left, right) = (band(min.x).0, band(max.x).1);
    let (top, bottom) = (band(min.y).0, band(max.y).1);

    for y in [min.y, max.y] {
        let (y0, y1) = band(y);
        fill_rect(buf, size, left, y0, right, y1, color);
    }
    for x in [min.x, max.x] {
        let (x0, x1) = band(x);
        fill_rect(buf, size, x0, top, x1, bottom, color);
    }
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Draw `text` with its baseline at `origin.y`, starting at `origin.x`.
///
/// Glyphs are 8x8 bitmaps magnified by `scale`, so the text is
/// `8 * scale` pixels tall and sits entirely above the baseline.
pub fn draw_text(
    buf: &mut [u32],
    size: Vec2<usize>,
    text: &str,
    origin: Vec2<i32>,
    scale: u32,
    color: u32,
) {
    let scale = scale.clamp(1, 64) as i32;
    let cell = GLYPH_SIZE * scale;
    let top = origin.y.saturating_sub(cell);
    let mut x = origin.x;
    for c in text.chars() {
        if x >= size.x as i32 {
            break;
        }
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                // leftmost pixel is the least significant bit
                if bits & (1 << col) == 0 {
                    continue;
                }
                let px = x.saturating_add(col * scale);
                let py = top.saturating_add(row as i32 * scale);
                fill_rect(
                    buf,
                    size,
                    px,
                    py,
                    px.saturating_add(scale - 1),
                    py.saturating_add(scale - 1),
                    color,
                );
            }
        }
        x = x.saturating_add(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: u32 = 0xFF0000;

    fn at(buf: &[u32], size: Vec2<usize>, x: usize, y: usize) -> u32 {
        buf[y * size.x + x]
    }

    #[test]
    fn test_fill_rect_clips() {
        let size = Vec2::new(4, 4);
        let mut buf = vec![0; 16];
        fill_rect(&mut buf, size, -5, -5, 1, 1, RED);
        assert_eq!(buf.iter().filter(|&&p| p == RED).count(), 4);
        fill_rect(&mut buf, size, 10, 10, 20, 20, RED);
        assert_eq!(buf.iter().filter(|&&p| p == RED).count(), 4);
    }

    #[test]
    fn test_stroke_rect_three_wide_band() {
        let size = Vec2::new(20, 20);
        let mut buf = vec![0; 400];
        let rect = Rect::new(Vec2::new(5, 5), Vec2::new(10, 8));
        stroke_rect(&mut buf, size, rect, 3, RED);

        // top edge at y=5 covers rows 4..=6
        for y in 4..=6 {
            assert_eq!(at(&buf, size, 10, y), RED, "row {y}");
        }
        assert_eq!(at(&buf, size, 10, 3), 0);
        assert_eq!(at(&buf, size, 10, 7), 0);
        // left edge at x=5 covers cols 4..=6
        for x in 4..=6 {
            assert_eq!(at(&buf, size, x, 9), RED, "col {x}");
        }
        // right edge at x=15, bottom edge at y=13
        assert_eq!(at(&buf, size, 15, 9), RED);
        assert_eq!(at(&buf, size, 10, 13), RED);
        // interior untouched
        assert_eq!(at(&buf, size, 10, 9), 0);
    }

    #[test]
    fn test_stroke_rect_partly_offscreen() {
        let size = Vec2::new(10, 10);
        let mut buf = vec![0; 100];
        stroke_rect(&mut buf, size, Rect::new(Vec2::new(-3, -3), Vec2::new(6, 6)), 3, RED);
        assert_eq!(at(&buf, size, 3, 0), RED);
        assert_eq!(at(&buf, size, 0, 3), RED);
    }

    #[test]
    fn test_draw_text_sits_above_baseline() {
        let size = Vec2::new(40, 40);
        let mut buf = vec![0; 1600];
        draw_text(&mut buf, size, "H", Vec2::new(2, 20), 2, RED);

        let lit: Vec<(usize, usize)> = (0..40)
            .flat_map(|y| (0..40).map(move |x| (x, y)))
            .filter(|&(x, y)| at(&buf, size, x, y) == RED)
            .collect();
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|&(x, y)| (4..20).contains(&y) && (2..18).contains(&x)));
    }

    #[test]
    fn test_extreme_coordinates_saturate() {
        let size = Vec2::new(10, 10);
        let mut buf = vec![0; 100];
        let far = Rect::new(Vec2::new(i32::MAX - 1, i32::MIN + 1), Vec2::new(i32::MAX, i32::MAX));
        stroke_rect(&mut buf, size, far, u32::MAX, RED);
        stroke_rect(&mut buf, size, Rect::new(Vec2::new(i32::MIN, 2), Vec2::new(-5, 3)), 3, RED);
        draw_text(&mut buf, size, "ab", Vec2::new(i32::MAX - 3, i32::MIN), u32::MAX, RED);
        draw_text(&mut buf, size, "ab", Vec2::new(i32::MIN, i32::MAX), 2, RED);
    }

    #[test]
    fn test_draw_text_unknown_glyph_does_not_panic() {
        let size = Vec2::new(16, 16);
        let mut buf = vec![0; 256];
        draw_text(&mut buf, size, "\u{1F431}", Vec2::new(0, 8), 1, RED);
        draw_text(&mut buf, size, "far away", Vec2::new(100, 100), 1, RED);
    }
}
