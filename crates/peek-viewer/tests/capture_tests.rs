use peek_base::Vec2;
use peek_camera::{Camera, CameraError};
use peek_image::RgbFrame;
use peek_viewer::CaptureSession;
use peek_viewer::capture::acquire_with;
use std::collections::VecDeque;

// Each try_recv pops one scripted result.
struct ScriptedCamera {
    size: Vec2<usize>,
    script: VecDeque<Result<Option<RgbFrame>, CameraError>>,
}

impl ScriptedCamera {
    fn new(script: Vec<Result<Option<RgbFrame>, CameraError>>) -> Self {
        Self {
            size: Vec2::new(2, 2),
            script: script.into(),
        }
    }
}

impl Camera for ScriptedCamera {
    fn size(&self) -> Vec2<usize> {
        self.size
    }

    async fn recv(&mut self) -> Result<RgbFrame, CameraError> {
        Err(CameraError::Channel("not scripted".to_string()))
    }

    fn try_recv(&mut self) -> Result<Option<RgbFrame>, CameraError> {
        self.script.pop_front().unwrap_or(Ok(None))
    }
}

fn frame(value: u8) -> RgbFrame {
    RgbFrame::new(Vec2::new(2, 2), vec![value; 12]).unwrap()
}

#[test]
fn test_refresh_keeps_last_frame() {
    let camera = ScriptedCamera::new(vec![Ok(Some(frame(1))), Ok(None), Ok(Some(frame(2)))]);
    let mut session = CaptureSession::new(camera);
    assert!(session.frame().is_none());
    assert_eq!(session.size(), Vec2::new(2, 2));

    assert_eq!(session.refresh().unwrap().pixel(0, 0), [1, 1, 1]);
    assert_eq!(session.refresh().unwrap().pixel(0, 0), [1, 1, 1]);
    assert_eq!(session.refresh().unwrap().pixel(0, 0), [2, 2, 2]);
    assert_eq!(session.frame().unwrap().pixel(0, 0), [2, 2, 2]);
}

#[test]
fn test_lost_stream_freezes_last_frame() {
    let camera = ScriptedCamera::new(vec![
        Ok(Some(frame(7))),
        Err(CameraError::Stream("unplugged".to_string())),
        Ok(Some(frame(9))),
    ]);
    let mut session = CaptureSession::new(camera);
    session.refresh();
    assert!(!session.is_lost());

    assert_eq!(session.refresh().unwrap().pixel(0, 0), [7, 7, 7]);
    assert!(session.is_lost());
    // no further reads once lost
    assert_eq!(session.refresh().unwrap().pixel(0, 0), [7, 7, 7]);
}

#[test]
fn test_size_follows_frames() {
    let big = RgbFrame::black(Vec2::new(8, 6));
    let camera = ScriptedCamera::new(vec![Ok(Some(big))]);
    let mut session = CaptureSession::new(camera);
    session.refresh();
    assert_eq!(session.size(), Vec2::new(8, 6));
}

#[test]
fn test_acquire_failure_is_swallowed() {
    let session = acquire_with(|| -> Result<ScriptedCamera, CameraError> {
        Err(CameraError::Permission("/dev/video0".to_string()))
    });
    assert!(session.is_none());
}

#[test]
fn test_acquire_success() {
    let session = acquire_with(|| Ok(ScriptedCamera::new(Vec::new())));
    assert!(session.is_some());
}
