//! Frame buffers and image codecs for peek.
//!
//! Frames travel through the viewer as packed RGB8 (`RgbFrame`). This crate
//! decodes camera output into that layout, converts it to and from the
//! 0RGB `u32` pixels the display wants, and encodes it back into JPEG data
//! URIs for the detection endpoint.

pub mod convert;
pub mod error;
pub mod frame;
pub mod jpeg;

pub use convert::{argb_to_rgb, argb_to_rgb_into, rgb_to_argb, yuyv_to_rgb};
pub use error::ImageError;
pub use frame::RgbFrame;
pub use jpeg::{
    JPEG_DATA_URI_PREFIX, decode_data_uri, decode_jpeg, encode_data_uri, encode_jpeg,
    jpeg_data_uri,
};
