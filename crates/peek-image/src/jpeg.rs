use crate::{ImageError, RgbFrame};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use crates_image::{ExtendedColorType, ImageEncoder, ImageFormat, codecs::jpeg::JpegEncoder};
use peek_base::Vec2;
use std::sync::Arc;

pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Decode a JPEG (e.g. one MJPEG camera frame) into RGB8.
pub fn decode_jpeg(data: &[u8]) -> Result<RgbFrame, ImageError> {
    let decoded = crates_image::load_from_memory_with_format(data, ImageFormat::Jpeg)?;
    let rgb = decoded.to_rgb8();
    let size = Vec2::new(rgb.width() as usize, rgb.height() as usize);
    RgbFrame::new(size, rgb.into_raw())
}

/// Encode a frame as baseline JPEG at `quality` (1..=100).
pub fn encode_jpeg(frame: &RgbFrame, quality: u8) -> Result<Vec<u8>, ImageError> {
    if frame.is_empty() {
        return Err(ImageError::Encode("cannot encode an empty frame".to_string()));
    }
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(
            frame.data(),
            frame.width() as u32,
            frame.height() as u32,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Wrap JPEG bytes in a `data:image/jpeg;base64,` URI.
pub fn jpeg_data_uri(jpeg: &[u8]) -> String {
    let mut uri = String::with_capacity(JPEG_DATA_URI_PREFIX.len() + jpeg.len() * 4 / 3 + 4);
    uri.push_str(JPEG_DATA_URI_PREFIX);
    BASE64_STANDARD.encode_string(jpeg, &mut uri);
    uri
}

/// Extract the payload of a base64 data URI (anything after the first comma).
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, ImageError> {
    let (header, payload) = uri
        .split_once(',')
        .ok_or_else(|| ImageError::Decode("data URI has no payload".to_string()))?;
    if !header.starts_with("data:") || !header.ends_with(";base64") {
        return Err(ImageError::Decode(format!("not a base64 data URI: {header}")));
    }
    Ok(BASE64_STANDARD.decode(payload)?)
}

/// Encode a frame into a JPEG data URI.
///
/// The CPU-bound encoding runs on tokio's blocking thread pool.
pub async fn encode_data_uri(frame: Arc<RgbFrame>, quality: u8) -> Result<String, ImageError> {
    tokio::task::spawn_blocking(move || {
        encode_jpeg(&frame, quality).map(|jpeg| jpeg_data_uri(&jpeg))
    })
    .await
    .map_err(|e| ImageError::Encode(e.to_string()))?
}
