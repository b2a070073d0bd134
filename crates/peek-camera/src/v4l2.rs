use crate::{Camera, CameraConfig, CameraError};
use peek_base::Vec2;
use peek_image::RgbFrame;
use std::{
    io::ErrorKind,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread::{self, JoinHandle},
    time::Duration,
};
use tokio::sync::mpsc::{self, error::TryRecvError};
use v4l::{
    Device, Format, FourCC,
    buffer::Type,
    io::{mmap::Stream as MmapStream, traits::CaptureStream},
    video::Capture,
};

type FrameResult = Result<RgbFrame, CameraError>;

// how long a dequeue may block before the stop flag is rechecked
const DEQUEUE_TIMEOUT_MS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WireFormat {
    Mjpeg,
    Yuyv,
}

/// V4L2 capture device.
///
/// Capture runs on a dedicated thread from construction on. Dropping the
/// camera (or calling `stop`) stops that thread and closes the device before
/// returning.
pub struct V4l2Camera {
    config: CameraConfig,
    size: Vec2<usize>,
    receiver: Option<mpsc::Receiver<FrameResult>>,
    cancel: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("size", &self.size)
            .field("running", &self.thread_handle.is_some())
            .finish()
    }
}

impl V4l2Camera {
    /// Open the device at `config.device()` and start capturing.
    ///
    /// MJPEG is requested first; YUYV is accepted if the driver falls back
    /// to it. The driver may also adjust the size, which `size()` reports.
    ///
    /// # Errors
    ///
    /// `CameraError::Permission` if the node cannot be opened for lack of
    /// rights, `CameraError::Device` if it is missing or offers neither
    /// MJPEG nor YUYV.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let device = Device::with_path(config.device())?;

        let requested = Format::new(
            config.size().x as u32,
            config.size().y as u32,
            FourCC::new(b"MJPG"),
        );
        let actual = Capture::set_format(&device, &requested)?;
        let wire = match &actual.fourcc.repr {
            b"MJPG" => WireFormat::Mjpeg,
            b"YUYV" => WireFormat::Yuyv,
            _ => {
                return Err(CameraError::Device(format!(
                    "unsupported pixel format: {}",
                    actual.fourcc
                )));
            }
        };
        let size = Vec2::new(actual.width as usize, actual.height as usize);

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        Capture::set_params(&device, &params)?;

        log::info!(
            "opened {} at {} ({:?}, {} fps requested)",
            config.device().display(),
            size,
            wire,
            config.fps()
        );

        let buffer_count = config.buffer_count();
        let (tx, rx) = mpsc::channel(buffer_count as usize);
        let cancel = Arc::new(AtomicBool::new(false));

        let thread_handle = thread::Builder::new()
            .name("peek-capture".to_string())
            .spawn({
                let cancel = Arc::clone(&cancel);
                move || {
                    if let Err(e) = capture_loop(device, wire, size, buffer_count, &tx, &cancel) {
                        log::error!("capture thread: {}", e);
                        let _ = tx.blocking_send(Err(e));
                    }
                    log::debug!("capture thread: exiting");
                }
            })?;

        Ok(Self {
            config,
            size,
            receiver: Some(rx),
            cancel,
            thread_handle: Some(thread_handle),
        })
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Stop capturing and release the device. Safe to call more than once.
    pub fn stop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        // unblocks a capture thread waiting on a full channel
        drop(self.receiver.take());
        if let Some(handle) = self.thread_handle.take() {
            if handle.join().is_err() {
                log::error!("capture thread panicked");
            }
        }
    }

    fn receiver(&mut self) -> Result<&mut mpsc::Receiver<FrameResult>, CameraError> {
        self.receiver
            .as_mut()
            .ok_or_else(|| CameraError::Channel("camera stopped".to_string()))
    }
}

impl Camera for V4l2Camera {
    fn size(&self) -> Vec2<usize> {
        self.size
    }

    async fn recv(&mut self) -> Result<RgbFrame, CameraError> {
        self.receiver()?
            .recv()
            .await
            .ok_or_else(|| CameraError::Channel("channel closed".to_string()))?
    }

    fn try_recv(&mut self) -> Result<Option<RgbFrame>, CameraError> {
        let receiver = self.receiver()?;
        let mut latest = None;
        loop {
            match receiver.try_recv() {
                Ok(frame) => latest = Some(frame?),
                Err(TryRecvError::Empty) => return Ok(latest),
                Err(TryRecvError::Disconnected) => {
                    return match latest {
                        Some(frame) => Ok(Some(frame)),
                        None => Err(CameraError::Channel("channel closed".to_string())),
                    };
                }
            }
        }
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Dequeue, decode and forward frames until cancelled or the receiver
/// goes away.
fn capture_loop(
    device: Device,
    wire: WireFormat,
    size: Vec2<usize>,
    buffer_count: u32,
    tx: &mpsc::Sender<FrameResult>,
    cancel: &AtomicBool,
) -> Result<(), CameraError> {
    let mut stream = MmapStream::with_buffers(&device, Type::VideoCapture, buffer_count)
        .map_err(|e| CameraError::Stream(e.to_string()))?;
    stream.set_timeout(Duration::from_millis(DEQUEUE_TIMEOUT_MS));

    while !cancel.load(Ordering::Relaxed) {
        let (data, metadata) = match CaptureStream::next(&mut stream) {
            Ok(next) => next,
            Err(e) if e.kind() == ErrorKind::TimedOut => continue,
            Err(e) => return Err(CameraError::Stream(e.to_string())),
        };
        let used = (metadata.bytesused as usize).min(data.len());
        let data = if used > 0 { &data[..used] } else { data };

        let frame = match decode(wire, size, data) {
            Ok(frame) => frame,
            Err(e) => {
                // single corrupt MJPEG frames are common; skip them
                log::warn!("capture thread: dropping frame: {}", e);
                continue;
            }
        };

        if tx.blocking_send(Ok(frame)).is_err() {
            break;
        }
    }
    Ok(())
}

fn decode(wire: WireFormat, size: Vec2<usize>, data: &[u8]) -> Result<RgbFrame, CameraError> {
    match wire {
        WireFormat::Mjpeg => Ok(peek_image::decode_jpeg(data)?),
        WireFormat::Yuyv => {
            let rgb = peek_image::yuyv_to_rgb(size, data).ok_or_else(|| {
                CameraError::Stream(format!("short YUYV frame: {} bytes", data.len()))
            })?;
            Ok(RgbFrame::new(size, rgb)?)
        }
    }
}
