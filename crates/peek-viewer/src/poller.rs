use crate::{BoxWriter, SnapshotReader};
use peek_base::Sequence;
use peek_detect::Detector;
use peek_image::RgbFrame;
use std::{sync::Arc, time::Duration};
use tokio::{
    task::{JoinHandle, JoinSet},
    time::{self, Instant, MissedTickBehavior},
};

/// What a single poll tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Nothing drawn yet; no request was sent.
    Skipped,
    /// The response replaced the current boxes.
    Applied,
    /// A response to a later request was applied first; this one was dropped.
    Stale,
    /// The response had no `bounding_boxes` field.
    Unchanged,
    /// Encoding or the request failed. Already logged.
    Failed,
}

/// Run one poll: encode `snapshot`, submit it, and publish the returned
/// boxes if no later request has beaten this one to it.
///
/// The sequence number is taken before the request goes out, so responses
/// are ordered by when their frames were sent, not when they arrived.
pub async fn poll_once<D: Detector>(
    detector: &D,
    snapshot: Option<Arc<RgbFrame>>,
    sequence: &Sequence,
    writer: &BoxWriter,
    quality: u8,
) -> PollOutcome {
    let Some(frame) = snapshot.filter(|frame| !frame.is_empty()) else {
        return PollOutcome::Skipped;
    };
    let seq = sequence.next();

    let uri = match peek_image::encode_data_uri(frame, quality).await {
        Ok(uri) => uri,
        Err(e) => {
            log::error!("Error encoding frame #{}: {}", seq, e);
            return PollOutcome::Failed;
        }
    };

    let response = match detector.detect(uri).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Error sending frame #{} to backend: {}", seq, e);
            return PollOutcome::Failed;
        }
    };

    match response.bounding_boxes {
        None => PollOutcome::Unchanged,
        Some(boxes) => {
            let count = boxes.len();
            if writer.publish(seq, boxes) {
                log::debug!("frame #{}: {} boxes", seq, count);
                PollOutcome::Applied
            } else {
                log::debug!(
                    "frame #{}: dropped, #{} already applied",
                    seq,
                    writer.applied_seq()
                );
                PollOutcome::Stale
            }
        }
    }
}

/// Fixed-cadence detection poller.
///
/// Every `interval` the latest snapshot is submitted on its own task;
/// requests are not awaited before the next tick fires. Stopping (or
/// dropping) the poller cancels the timer and every request in flight.
pub struct Poller {
    join_handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// Start polling on the current tokio runtime. The first request goes
    /// out one `interval` after this call.
    pub fn spawn<D: Detector>(
        detector: Arc<D>,
        snapshots: SnapshotReader,
        writer: BoxWriter,
        interval: Duration,
        quality: u8,
    ) -> Self {
        let writer = Arc::new(writer);
        let join_handle = tokio::spawn(async move {
            let sequence = Sequence::new();
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // dropping the set aborts whatever is still in flight
            let mut in_flight = JoinSet::new();

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let detector = Arc::clone(&detector);
                        let writer = Arc::clone(&writer);
                        let sequence = sequence.clone();
                        let snapshot = snapshots.latest();
                        in_flight.spawn(async move {
                            poll_once(&*detector, snapshot, &sequence, &writer, quality).await
                        });
                    }
                    Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                        if let Err(e) = joined {
                            if e.is_panic() {
                                log::error!("poll task panicked: {}", e);
                            }
                        }
                    }
                }
            }
        });

        Self {
            join_handle: Some(join_handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.join_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel the timer and any outstanding requests. Safe to call twice.
    pub fn stop(&mut self) {
        if let Some(handle) = self.join_handle.take() {
            handle.abort();
            log::debug!("poller stopped");
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}
