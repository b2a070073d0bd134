use peek_base::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// One detected object, in the pixel coordinates of the submitted frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub name: String,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32, name: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            name: name.into(),
        }
    }

    pub fn rect(&self) -> Rect<f32> {
        Rect::new(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }
}

/// Request body for `POST /process_frame`.
#[derive(Debug, Serialize)]
pub struct FrameRequest<'a> {
    pub frame: &'a str,
}

/// Response body of `POST /process_frame`.
///
/// `bounding_boxes` is optional: a body without it (an error detail, say)
/// carries no detections and must not replace the current ones.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DetectionResponse {
    #[serde(default)]
    pub bounding_boxes: Option<Vec<BoundingBox>>,
}
