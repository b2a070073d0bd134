use peek_base::Vec2;
use peek_camera::CameraConfig;
use peek_detect::DetectConfig;
use std::time::Duration;

/// How detections are painted onto the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Stroke and label colour, `0x00RRGGBB`.
    pub color: u32,
    pub line_width: u32,
    /// Label height in pixels; a multiple of 8 keeps the bitmap font crisp.
    pub font_px: u32,
    /// Gap between the box's top edge and the label baseline.
    pub label_offset: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: 0xFF0000,
            line_width: 3,
            font_px: 16,
            label_offset: 5.0,
        }
    }
}

/// Everything the viewer binary needs.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub camera: CameraConfig,
    pub detect: DetectConfig,
    /// Logical size of the window the surface is presented in.
    pub window_size: Vec2<usize>,
    /// Fixed drawing surface size. `None` follows the native video size.
    pub surface_size: Option<Vec2<usize>>,
    pub poll_interval: Duration,
    pub jpeg_quality: u8,
    pub target_fps: usize,
    pub style: OverlayStyle,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            detect: DetectConfig::default(),
            window_size: Vec2::new(640, 480),
            surface_size: None,
            poll_interval: Duration::from_millis(200),
            jpeg_quality: 92,
            target_fps: 60,
            style: OverlayStyle::default(),
        }
    }
}

impl ViewerConfig {
    /// Defaults overridden by `PEEK_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for:
    ///
    /// - `PEEK_DEVICE`: capture device path
    /// - `PEEK_ENDPOINT`: detection service base URL
    /// - `PEEK_POLL_MS`: poll interval in milliseconds
    /// - `PEEK_SURFACE`: fixed surface size as `WIDTHxHEIGHT`
    ///
    /// Values that do not parse are logged and ignored.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(device) = lookup("PEEK_DEVICE") {
            config.camera = config.camera.with_device(device);
        }
        if let Some(url) = lookup("PEEK_ENDPOINT") {
            config.detect = config.detect.with_base_url(url);
        }
        if let Some(value) = lookup("PEEK_POLL_MS") {
            match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.poll_interval = Duration::from_millis(ms),
                _ => log::warn!("ignoring PEEK_POLL_MS={:?}: expected a positive integer", value),
            }
        }
        if let Some(value) = lookup("PEEK_SURFACE") {
            match parse_size(&value) {
                Some(size) => config.surface_size = Some(size),
                None => log::warn!("ignoring PEEK_SURFACE={:?}: expected WIDTHxHEIGHT", value),
            }
        }

        config
    }
}

fn parse_size(value: &str) -> Option<Vec2<usize>> {
    let (w, h) = value.trim().split_once(['x', 'X'])?;
    let size = Vec2::new(w.parse().ok()?, h.parse().ok()?);
    (!size.is_empty()).then_some(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("640x480"), Some(Vec2::new(640, 480)));
        assert_eq!(parse_size(" 1280X720 "), Some(Vec2::new(1280, 720)));
        assert_eq!(parse_size("0x480"), None);
        assert_eq!(parse_size("640"), None);
        assert_eq!(parse_size("ax480"), None);
    }
}
