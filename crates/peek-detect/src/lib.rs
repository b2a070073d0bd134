//! Client side of the detection endpoint.
//!
//! Frames go out as `{"frame": "<jpeg data uri>"}`; detections come back as
//! `{"bounding_boxes": [{x, y, width, height, name}, ...]}`. The endpoint
//! itself is an external service.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{Detector, HttpDetector, parse_response};
pub use config::DetectConfig;
pub use error::DetectError;
pub use types::{BoundingBox, DetectionResponse, FrameRequest};
