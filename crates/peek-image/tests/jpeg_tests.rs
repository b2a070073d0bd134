use peek_base::Vec2;
use peek_image::{
    JPEG_DATA_URI_PREFIX, RgbFrame, decode_data_uri, decode_jpeg, encode_data_uri, encode_jpeg,
    jpeg_data_uri,
};
use std::sync::Arc;

fn gradient(size: Vec2<usize>) -> RgbFrame {
    let mut data = Vec::with_capacity(size.area() * 3);
    for y in 0..size.y {
        for x in 0..size.x {
            data.extend_from_slice(&[(x * 4) as u8, (y * 4) as u8, 128]);
        }
    }
    RgbFrame::new(size, data).unwrap()
}

#[test]
fn test_encode_jpeg_produces_soi_marker() {
    let jpeg = encode_jpeg(&gradient(Vec2::new(32, 16)), 92).unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_jpeg_decode_keeps_dimensions() {
    let jpeg = encode_jpeg(&gradient(Vec2::new(40, 24)), 90).unwrap();
    let decoded = decode_jpeg(&jpeg).unwrap();
    assert_eq!(decoded.size(), Vec2::new(40, 24));
}

#[test]
fn test_encode_empty_frame_fails() {
    assert!(encode_jpeg(&RgbFrame::black(Vec2::new(0, 0)), 92).is_err());
}

#[test]
fn test_decode_garbage_fails() {
    assert!(decode_jpeg(b"not a jpeg").is_err());
}

#[test]
fn test_data_uri_prefix_and_payload() {
    let uri = jpeg_data_uri(&[0xFF, 0xD8, 0xFF]);
    assert!(uri.starts_with(JPEG_DATA_URI_PREFIX));
    assert_eq!(&uri[JPEG_DATA_URI_PREFIX.len()..], "/9j/");
    assert_eq!(decode_data_uri(&uri).unwrap(), vec![0xFF, 0xD8, 0xFF]);
}

#[test]
fn test_decode_data_uri_rejects_plain_text() {
    assert!(decode_data_uri("hello").is_err());
    assert!(decode_data_uri("data:text/plain,hello").is_err());
}

#[tokio::test]
async fn test_encode_data_uri_decodes_back_to_frame() {
    let frame = Arc::new(gradient(Vec2::new(16, 8)));
    let uri = encode_data_uri(frame, 92).await.unwrap();
    let jpeg = decode_data_uri(&uri).unwrap();
    let decoded = decode_jpeg(&jpeg).unwrap();
    assert_eq!(decoded.size(), Vec2::new(16, 8));
}
