#![cfg(feature = "v4l2")]

use peek_camera::{Camera, CameraConfig, CameraError, V4l2Camera};

#[test]
fn test_missing_device_is_an_error() {
    let config = CameraConfig::default().with_device("/dev/peek-no-such-video-node");
    match V4l2Camera::new(config) {
        Err(CameraError::Device(_)) => {}
        other => panic!("expected device error, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "requires a camera at /dev/video0"]
async fn test_capture_and_stop() {
    let mut camera = V4l2Camera::new(CameraConfig::default()).unwrap();
    let frame = camera.recv().await.unwrap();
    assert_eq!(frame.size(), camera.size());
    camera.stop();
    camera.stop();
    assert!(camera.try_recv().is_err());
}
