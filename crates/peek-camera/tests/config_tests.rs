use peek_base::Vec2;
use peek_camera::CameraConfig;
use std::path::Path;

#[test]
fn test_default_config() {
    let config = CameraConfig::default();
    assert_eq!(config.device(), Path::new("/dev/video0"));
    assert_eq!(config.size(), Vec2::new(640, 480));
    assert_eq!(config.fps(), 30);
    assert_eq!(config.buffer_count(), 4);
}

#[test]
fn test_builder_overrides() {
    let config = CameraConfig::default()
        .with_device("/dev/video2")
        .with_size(Vec2::new(1280, 720))
        .with_fps(15)
        .with_buffer_count(2);
    assert_eq!(config.device(), Path::new("/dev/video2"));
    assert_eq!(config.size(), Vec2::new(1280, 720));
    assert_eq!(config.fps(), 15);
    assert_eq!(config.buffer_count(), 2);
}

#[test]
fn test_counts_at_least_one() {
    let config = CameraConfig::default().with_buffer_count(0).with_fps(0);
    assert_eq!(config.buffer_count(), 1);
    assert_eq!(config.fps(), 1);
}
