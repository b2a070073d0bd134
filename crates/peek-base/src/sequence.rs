use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Shared monotonically increasing counter.
///
/// Every outgoing request takes the next number; whoever applies results
/// compares stamps so that a slow, older result never replaces a newer one.
/// Clones share the same counter.
#[derive(Clone, Debug, Default)]
pub struct Sequence {
    value: Arc<AtomicU64>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next sequence number. The first call returns 1, so 0 can
    /// stamp initial values that any real result supersedes.
    pub fn next(&self) -> u64 {
        self.value.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// The last number handed out, 0 if none.
    pub fn last(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// A value stamped with the sequence number it was produced under.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamped<T> {
    pub seq: u64,
    pub inner: T,
}

impl<T> Stamped<T> {
    pub fn new(seq: u64, inner: T) -> Self {
        Self { seq, inner }
    }

    /// True if `seq` was issued after the one this value carries.
    pub fn is_superseded_by(&self, seq: u64) -> bool {
        seq > self.seq
    }
}
