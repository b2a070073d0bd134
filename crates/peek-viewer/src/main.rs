use minifb::{Key, ScaleMode, Window, WindowOptions};
use peek_base::Vec2;
use peek_detect::HttpDetector;
use peek_viewer::{Canvas, Poller, Renderer, ViewerConfig, acquire, box_slot, snapshot_slot};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match std::env::var("PEEK_LOG_DIR") {
        Ok(dir) => peek_base::init_file_logger(dir)?,
        Err(_) => peek_base::init_stdout_logger(),
    }

    let config = ViewerConfig::from_env();
    log::info!("peek: endpoint {}", config.detect.endpoint());
    log::info!("peek: polling every {:?}", config.poll_interval);

    let detector = Arc::new(HttpDetector::new(config.detect.clone()));
    tokio::spawn({
        let detector = Arc::clone(&detector);
        async move {
            match detector.probe().await {
                Ok(status) => log::info!("backend says: {}", status.trim()),
                Err(e) => log::warn!("backend not reachable yet: {}", e),
            }
        }
    });

    // no camera is not fatal; the viewer keeps running with a blank surface
    let mut capture = acquire(&config.camera);

    let (box_writer, box_reader) = box_slot();
    let (snapshot_publisher, snapshot_reader) = snapshot_slot();

    let mut poller = Poller::spawn(
        detector,
        snapshot_reader,
        box_writer,
        config.poll_interval,
        config.jpeg_quality,
    );
    let mut renderer = Renderer::new(
        box_reader,
        snapshot_publisher,
        config.style.clone(),
        config.surface_size,
    );

    let window_size = config.window_size;
    let mut window = Window::new(
        "peek - ESC to exit",
        window_size.x,
        window_size.y,
        WindowOptions {
            resize: true,
            scale_mode: ScaleMode::Stretch,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(config.target_fps);
    let blank = vec![0u32; window_size.area()];

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if let Some(session) = capture.as_mut() {
            session.refresh();
        }
        let (frame, video_size) = match &capture {
            Some(session) => (session.frame(), session.size()),
            None => (None, Vec2::zero()),
        };

        let surface = renderer.render(frame, video_size);
        let size = surface.size();
        if size.is_empty() {
            window.update_with_buffer(&blank, window_size.x, window_size.y)?;
        } else {
            window.update_with_buffer(surface.pixels(), size.x, size.y)?;
        }
    }

    poller.stop();
    drop(capture);
    log::info!("Exiting...");
    Ok(())
}
