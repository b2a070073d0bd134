use peek_base::Vec2;
use std::path::{Path, PathBuf};

const DEFAULT_DEVICE: &str = "/dev/video0";

/// Which V4L2 node to open and what to ask it for.
///
/// The size and frame rate are requests; the driver may settle on something
/// else, and `Camera::size` reports what it chose.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    device: PathBuf,
    size: Vec2<usize>,
    fps: u32,
    buffer_count: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_DEVICE),
            size: Vec2::new(640, 480),
            fps: 30,
            buffer_count: 4,
        }
    }
}

impl CameraConfig {
    pub fn with_device(mut self, device: impl Into<PathBuf>) -> Self {
        self.device = device.into();
        self
    }

    pub fn with_size(mut self, size: Vec2<usize>) -> Self {
        self.size = size;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Driver buffers to map; also the depth of the frame queue.
    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count.max(1);
        self
    }

    pub fn device(&self) -> &Path {
        &self.device
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }
}
