use crate::{BoxReader, OverlayStyle, SnapshotPublisher, Surface};
use peek_base::{Rect, Vec2};
use peek_detect::BoundingBox;
use peek_image::RgbFrame;

/// Something the render pass can draw onto.
pub trait Canvas {
    fn size(&self) -> Vec2<usize>;

    /// Change the pixel dimensions. A no-op if they already match.
    fn resize(&mut self, size: Vec2<usize>);

    fn clear(&mut self);

    /// Paint `frame` stretched over the whole canvas.
    fn draw_frame(&mut self, frame: &RgbFrame);

    fn stroke_rect(&mut self, rect: Rect<f32>, color: u32, line_width: u32);

    /// Draw `text` with its baseline starting at `origin`.
    fn fill_text(&mut self, text: &str, origin: Vec2<f32>, color: u32, font_px: u32);
}

/// Per-axis factor mapping video pixels onto surface pixels.
///
/// An axis whose video dimension is still unknown (zero) scales by 1.
pub fn scale_factor(surface: Vec2<usize>, video: Vec2<usize>) -> Vec2<f32> {
    let axis = |s: usize, v: usize| if v == 0 { 1.0 } else { s as f32 / v as f32 };
    Vec2::new(axis(surface.x, video.x), axis(surface.y, video.y))
}

/// A bounding box mapped into surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub rect: Rect<f32>,
    pub label_origin: Vec2<f32>,
    pub label: String,
}

/// Map `boxes` from video coordinates into surface coordinates, placing
/// each label `label_offset` above its box's top-left corner.
pub fn layout(
    boxes: &[BoundingBox],
    surface: Vec2<usize>,
    video: Vec2<usize>,
    label_offset: f32,
) -> Vec<Annotation> {
    let factor = scale_factor(surface, video);
    boxes
        .iter()
        .map(|b| {
            let rect = b.rect().scale(factor);
            Annotation {
                label_origin: Vec2::new(rect.origin.x, rect.origin.y - label_offset),
                rect,
                label: b.name.clone(),
            }
        })
        .collect()
}

/// One complete redraw: resize, clear, paint the frame, then outline and
/// label every box.
pub fn render_pass<C: Canvas>(
    canvas: &mut C,
    frame: Option<&RgbFrame>,
    surface_size: Vec2<usize>,
    video_size: Vec2<usize>,
    boxes: &[BoundingBox],
    style: &OverlayStyle,
) {
    canvas.resize(surface_size);
    canvas.clear();
    if let Some(frame) = frame {
        canvas.draw_frame(frame);
    }
    for annotation in layout(boxes, canvas.size(), video_size, style.label_offset) {
        canvas.stroke_rect(annotation.rect, style.color, style.line_width);
        canvas.fill_text(
            &annotation.label,
            annotation.label_origin,
            style.color,
            style.font_px,
        );
    }
}

/// The render loop's state: owns the surface and reads the current boxes
/// fresh on every pass.
pub struct Renderer {
    surface: Surface,
    boxes: BoxReader,
    snapshots: SnapshotPublisher,
    style: OverlayStyle,
    fixed_size: Option<Vec2<usize>>,
}

impl Renderer {
    /// `fixed_size` pins the surface dimensions; `None` follows the video.
    pub fn new(
        boxes: BoxReader,
        snapshots: SnapshotPublisher,
        style: OverlayStyle,
        fixed_size: Option<Vec2<usize>>,
    ) -> Self {
        Self {
            surface: Surface::default(),
            boxes,
            snapshots,
            style,
            fixed_size,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Redraw the surface from `frame` and the current boxes.
    ///
    /// When a frame was drawn, the composited surface is published for the
    /// detection poller.
    pub fn render(&mut self, frame: Option<&RgbFrame>, video_size: Vec2<usize>) -> &Surface {
        let surface_size = self.fixed_size.unwrap_or(video_size);
        let boxes = self.boxes.current();
        render_pass(
            &mut self.surface,
            frame,
            surface_size,
            video_size,
            &boxes,
            &self.style,
        );
        if frame.is_some() && !surface_size.is_empty() {
            let surface = &self.surface;
            self.snapshots.publish_with(surface_size, |snapshot| {
                surface.copy_into(snapshot);
            });
        }
        &self.surface
    }
}
