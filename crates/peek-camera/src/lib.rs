//! Camera capture for peek.
//!
//! A `Camera` hands out decoded `RgbFrame`s. The V4L2 backend (feature
//! `v4l2`) captures on its own thread and releases the device when dropped.

pub mod config;
pub mod error;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::CameraError;
pub use traits::Camera;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
