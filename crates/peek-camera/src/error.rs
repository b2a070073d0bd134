use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    /// No usable device, or the device rejected the requested format.
    Device(String),
    /// The device exists but we may not open it.
    Permission(String),
    Stream(String),
    Decode(peek_image::ImageError),
    Channel(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
            CameraError::Permission(msg) => write!(f, "permission denied: {msg}"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Decode(err) => write!(f, "decode error: {err}"),
            CameraError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => CameraError::Permission(err.to_string()),
            _ => CameraError::Device(err.to_string()),
        }
    }
}

impl From<peek_image::ImageError> for CameraError {
    fn from(err: peek_image::ImageError) -> Self {
        CameraError::Decode(err)
    }
}
