//! Live camera viewer that overlays detections from a remote endpoint.
//!
//! Three loops cooperate:
//! - camera acquisition (`capture`), once at start-up,
//! - the render loop (`render`), once per display refresh,
//! - the detection poller (`poller`), on a fixed timer.
//!
//! The poller writes the current bounding boxes into a `state::BoxWriter`;
//! the renderer reads them through the matching `state::BoxReader` and
//! publishes each composited surface back for the poller to submit.

pub mod capture;
pub mod config;
pub mod draw;
pub mod poller;
pub mod render;
pub mod state;
pub mod surface;

pub use capture::{CaptureSession, acquire};
pub use config::{OverlayStyle, ViewerConfig};
pub use poller::{PollOutcome, Poller, poll_once};
pub use render::{Annotation, Canvas, Renderer, layout, render_pass, scale_factor};
pub use state::{
    BoxReader, BoxWriter, Boxes, SnapshotPublisher, SnapshotReader, box_slot, snapshot_slot,
};
pub use surface::Surface;
