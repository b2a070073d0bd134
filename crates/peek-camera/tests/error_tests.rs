use peek_camera::CameraError;
use peek_image::ImageError;
use std::io;

#[test]
fn test_from_io_not_found_is_device_error() {
    let err: CameraError = io::Error::new(io::ErrorKind::NotFound, "no /dev/video0").into();
    match err {
        CameraError::Device(msg) => assert!(msg.contains("no /dev/video0")),
        other => panic!("expected Device, got {other:?}"),
    }
}

#[test]
fn test_from_io_permission_denied() {
    let err: CameraError = io::Error::new(io::ErrorKind::PermissionDenied, "video group").into();
    assert!(matches!(err, CameraError::Permission(_)));
    assert!(err.to_string().starts_with("permission denied"));
}

#[test]
fn test_from_image_error() {
    let err: CameraError = ImageError::Decode("bad huffman table".to_string()).into();
    assert!(matches!(err, CameraError::Decode(_)));
    assert!(err.to_string().contains("bad huffman table"));
}

#[test]
fn test_error_display() {
    assert!(
        CameraError::Stream("dequeue failed".to_string())
            .to_string()
            .contains("dequeue failed")
    );
    assert!(
        CameraError::Channel("closed".to_string())
            .to_string()
            .contains("closed")
    );
}
