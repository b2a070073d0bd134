use peek_base::Vec2;
use peek_camera::{Camera, CameraError};
use peek_image::RgbFrame;
use std::collections::VecDeque;

// Queue-backed camera standing in for real hardware.
struct MockCamera {
    size: Vec2<usize>,
    queued: VecDeque<RgbFrame>,
}

impl MockCamera {
    fn with_frames(count: usize) -> Self {
        let size = Vec2::new(2, 2);
        let queued = (0..count)
            .map(|i| RgbFrame::new(size, vec![i as u8; 12]).unwrap())
            .collect();
        Self { size, queued }
    }
}

impl Camera for MockCamera {
    fn size(&self) -> Vec2<usize> {
        self.size
    }

    async fn recv(&mut self) -> Result<RgbFrame, CameraError> {
        self.queued
            .pop_front()
            .ok_or_else(|| CameraError::Channel("channel closed".to_string()))
    }

    fn try_recv(&mut self) -> Result<Option<RgbFrame>, CameraError> {
        let latest = self.queued.pop_back();
        self.queued.clear();
        Ok(latest)
    }
}

#[tokio::test]
async fn test_recv_in_order() {
    let mut camera = MockCamera::with_frames(3);
    assert_eq!(camera.recv().await.unwrap().pixel(0, 0), [0, 0, 0]);
    assert_eq!(camera.recv().await.unwrap().pixel(0, 0), [1, 1, 1]);
}

#[test]
fn test_try_recv_returns_newest_and_drains() {
    let mut camera = MockCamera::with_frames(3);
    let frame = camera.try_recv().unwrap().unwrap();
    assert_eq!(frame.pixel(1, 1), [2, 2, 2]);
    assert!(camera.try_recv().unwrap().is_none());
}

#[tokio::test]
async fn test_camera_generic_use() {
    async fn grab(camera: &mut impl Camera, count: usize) -> Result<Vec<RgbFrame>, CameraError> {
        let mut frames = Vec::new();
        for _ in 0..count {
            frames.push(camera.recv().await?);
        }
        Ok(frames)
    }

    let mut camera = MockCamera::with_frames(2);
    assert_eq!(camera.size(), Vec2::new(2, 2));
    assert_eq!(grab(&mut camera, 2).await.unwrap().len(), 2);
    assert!(grab(&mut camera, 1).await.is_err());
}
