use peek_base::{Stamped, Vec2};
use peek_detect::BoundingBox;
use peek_image::RgbFrame;
use std::sync::Arc;
use tokio::sync::watch;

/// Immutable snapshot of the current detections.
pub type Boxes = Arc<[BoundingBox]>;

/// Create the bounding box cell: one writer for the poller, one reader for
/// the renderer. Starts empty, stamped with sequence 0.
pub fn box_slot() -> (BoxWriter, BoxReader) {
    let (sender, receiver) = watch::channel(Stamped::new(0, Boxes::from(Vec::new())));
    (BoxWriter { sender }, BoxReader { receiver })
}

#[derive(Debug)]
pub struct BoxWriter {
    sender: watch::Sender<Stamped<Boxes>>,
}

impl BoxWriter {
    /// Replace the current boxes with the result of request `seq`.
    ///
    /// Returns `false`, leaving the cell untouched, when the result of a
    /// request issued later than `seq` has already been applied.
    pub fn publish(&self, seq: u64, boxes: Vec<BoundingBox>) -> bool {
        self.sender.send_if_modified(move |current| {
            if !current.is_superseded_by(seq) {
                return false;
            }
            *current = Stamped::new(seq, Boxes::from(boxes));
            true
        })
    }

    /// Sequence number of the result currently shown.
    pub fn applied_seq(&self) -> u64 {
        self.sender.borrow().seq
    }
}

#[derive(Debug)]
pub struct BoxReader {
    receiver: watch::Receiver<Stamped<Boxes>>,
}

impl BoxReader {
    pub fn current(&self) -> Boxes {
        Arc::clone(&self.receiver.borrow().inner)
    }

    pub fn seq(&self) -> u64 {
        self.receiver.borrow().seq
    }
}

/// Create the cell through which the renderer hands its latest composited
/// surface to the poller. Empty until the first frame is drawn.
pub fn snapshot_slot() -> (SnapshotPublisher, SnapshotReader) {
    let (sender, receiver) = watch::channel(None);
    (SnapshotPublisher { sender }, SnapshotReader { receiver })
}

#[derive(Debug)]
pub struct SnapshotPublisher {
    sender: watch::Sender<Option<Arc<RgbFrame>>>,
}

impl SnapshotPublisher {
    pub fn publish(&self, frame: RgbFrame) {
        self.sender.send_replace(Some(Arc::new(frame)));
    }

    /// Publish a `size` frame filled in by `fill`.
    ///
    /// The previous frame's buffer is written over in place when no reader
    /// still holds it and the size is unchanged; otherwise a new one is
    /// allocated.
    pub fn publish_with(&self, size: Vec2<usize>, fill: impl FnOnce(&mut RgbFrame)) {
        self.sender.send_modify(|slot| {
            if let Some(frame) = slot
                .as_mut()
                .and_then(Arc::get_mut)
                .filter(|frame| frame.size() == size)
            {
                fill(frame);
                return;
            }
            let mut frame = RgbFrame::black(size);
            fill(&mut frame);
            *slot = Some(Arc::new(frame));
        });
    }
}

#[derive(Debug, Clone)]
pub struct SnapshotReader {
    receiver: watch::Receiver<Option<Arc<RgbFrame>>>,
}

impl SnapshotReader {
    pub fn latest(&self) -> Option<Arc<RgbFrame>> {
        self.receiver.borrow().clone()
    }
}
