use crate::ImageError;
use peek_base::Vec2;

/// Packed RGB8 image, row major, 3 bytes per pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct RgbFrame {
    size: Vec2<usize>,
    data: Vec<u8>,
}

impl std::fmt::Debug for RgbFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbFrame")
            .field("size", &self.size)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl RgbFrame {
    /// Wrap an RGB buffer, checking that it holds exactly `size` pixels.
    pub fn new(size: Vec2<usize>, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = size.area() * 3;
        if data.len() != expected {
            return Err(ImageError::Size {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// An all-black frame.
    pub fn black(size: Vec2<usize>) -> Self {
        Self {
            size,
            data: vec![0; size.area() * 3],
        }
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// RGB triple at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.size.x + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}
