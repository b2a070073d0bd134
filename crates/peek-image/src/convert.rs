use peek_base::Vec2;

// BT.601 YUV-to-RGB for a single pixel (fixed-point, shift 8)
fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    [
        (y + ((359 * v) >> 8)).clamp(0, 255) as u8,
        (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8,
        (y + ((454 * u) >> 8)).clamp(0, 255) as u8,
    ]
}

/// Convert packed YUYV 4:2:2 (`[Y0, U, Y1, V, ...]`) to RGB8.
///
/// Returns `None` when `data` is shorter than `size` requires.
pub fn yuyv_to_rgb(size: Vec2<usize>, data: &[u8]) -> Option<Vec<u8>> {
    let expected = size.area() * 2;
    if data.len() < expected {
        return None;
    }
    let mut rgb = Vec::with_capacity(size.area() * 3);
    for chunk in data[..expected].chunks_exact(4) {
        rgb.extend_from_slice(&yuv_to_rgb(chunk[0], chunk[1], chunk[3]));
        rgb.extend_from_slice(&yuv_to_rgb(chunk[2], chunk[1], chunk[3]));
    }
    Some(rgb)
}

/// Pack RGB8 into `0x00RRGGBB` words, the layout minifb presents.
pub fn rgb_to_argb(rgb: &[u8]) -> Vec<u32> {
    rgb.chunks_exact(3)
        .map(|c| (c[0] as u32) << 16 | (c[1] as u32) << 8 | c[2] as u32)
        .collect()
}

/// Unpack `0x00RRGGBB` words back into RGB8, ignoring the top byte.
/// Write `argb` into an existing RGB buffer, stopping at whichever runs out
/// first.
pub fn argb_to_rgb_into(argb: &[u32], rgb: &mut [u8]) {
    for (&p, out) in argb.iter().zip(rgb.chunks_exact_mut(3)) {
        out.copy_from_slice(&[(p >> 16) as u8, (p >> 8) as u8, p as u8]);
    }
}

pub fn argb_to_rgb(argb: &[u32]) -> Vec<u8> {
    argb.iter()
        .flat_map(|&p| [(p >> 16) as u8, (p >> 8) as u8, p as u8])
        .collect()
}
