use peek_base::Vec2;
use peek_camera::{Camera, CameraConfig, CameraError, V4l2Camera};
use peek_image::RgbFrame;

/// A camera held for the lifetime of the viewer.
///
/// The device is released when the session is dropped; the camera's own
/// `Drop` stops its capture thread and closes the node.
pub struct CaptureSession<C: Camera> {
    camera: C,
    last_frame: Option<RgbFrame>,
    lost: bool,
}

impl<C: Camera> CaptureSession<C> {
    pub fn new(camera: C) -> Self {
        Self {
            camera,
            last_frame: None,
            lost: false,
        }
    }

    /// Native video size, zero until the camera reports one.
    pub fn size(&self) -> Vec2<usize> {
        match &self.last_frame {
            Some(frame) => frame.size(),
            None => self.camera.size(),
        }
    }

    /// Pick up the newest frame without blocking.
    ///
    /// Returns the most recent frame seen so far; once the stream is lost the
    /// last good frame stays on screen.
    pub fn refresh(&mut self) -> Option<&RgbFrame> {
        if !self.lost {
            match self.camera.try_recv() {
                Ok(Some(frame)) => self.last_frame = Some(frame),
                Ok(None) => {}
                Err(e) => {
                    log::error!("camera stream lost: {}", e);
                    self.lost = true;
                }
            }
        }
        self.last_frame.as_ref()
    }

    /// The frame picked up by the last `refresh`, if any.
    pub fn frame(&self) -> Option<&RgbFrame> {
        self.last_frame.as_ref()
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }
}

impl<C: Camera> Drop for CaptureSession<C> {
    fn drop(&mut self) {
        log::info!("releasing camera");
    }
}

/// Open a camera with `open`, logging and swallowing any failure.
pub fn acquire_with<C, F>(open: F) -> Option<CaptureSession<C>>
where
    C: Camera,
    F: FnOnce() -> Result<C, CameraError>,
{
    match open() {
        Ok(camera) => {
            log::info!("camera ready at {}", camera.size());
            Some(CaptureSession::new(camera))
        }
        Err(e) => {
            log::error!("Error accessing camera: {}", e);
            None
        }
    }
}

/// Open the V4L2 device described by `config`.
///
/// `None` means the viewer runs without video: the surface stays blank but
/// boxes are still drawn if the poller ever receives any.
pub fn acquire(config: &CameraConfig) -> Option<CaptureSession<V4l2Camera>> {
    let config = config.clone();
    acquire_with(move || V4l2Camera::new(config))
}
