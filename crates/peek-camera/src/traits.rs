use crate::CameraError;
use peek_base::Vec2;
use peek_image::RgbFrame;

/// A video-only capture source.
#[allow(async_fn_in_trait)]
pub trait Camera {
    /// Native resolution negotiated with the device.
    fn size(&self) -> Vec2<usize>;

    /// Wait for the next frame.
    async fn recv(&mut self) -> Result<RgbFrame, CameraError>;

    /// Newest frame captured since the last call, without waiting.
    ///
    /// Older queued frames are discarded. Returns `Ok(None)` when nothing
    /// new has arrived.
    fn try_recv(&mut self) -> Result<Option<RgbFrame>, CameraError>;
}
