//! Coordination primitives shared by the bulk and streaming engines.
//!
//! Both are built from channels only: a [`Verdict`] is a one-slot channel
//! guarded by a "settled" flag, and cancellation is a channel whose single
//! sender is dropped to wake every listener at once.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded};

/// Single-assignment result slot.
///
/// Every stage that may conclude a recovery holds a clone. The first call to
/// [`Verdict::settle`] delivers its value; every later call is a no-op. Once
/// all clones are dropped without a settle, the receiver disconnects instead
/// of blocking forever.
pub(crate) struct Verdict<T> {
    settled: Arc<AtomicBool>,
    tx: Sender<T>,
}

pub(crate) fn verdict<T>() -> (Verdict<T>, Receiver<T>) {
    let (tx, rx) = bounded(1);
    (Verdict { settled: Arc::new(AtomicBool::new(false)), tx }, rx)
}

impl<T> Verdict<T> {
    /// Returns `false` if another stage already settled.
    pub(crate) fn settle(&self, value: T) -> bool {
        if self.settled.swap(true, Ordering::AcqRel) {
            return false;
        }
        // One slot, one winning writer: this never blocks. A closed receiver
        // only means the caller stopped waiting.
        let _ = self.tx.send(value);
        true
    }
}

impl<T> Clone for Verdict<T> {
    fn clone(&self) -> Self {
        Self { settled: Arc::clone(&self.settled), tx: self.tx.clone() }
    }
}

/// Raises cancellation when consumed or dropped.
pub(crate) struct Canceller {
    _tx: Sender<()>,
}

impl Canceller {
    pub(crate) fn cancel(self) {}
}

/// Observes a [`Canceller`]. Cheap to clone, one per worker.
#[derive(Clone)]
pub(crate) struct CancelToken {
    rx: Receiver<()>,
}

pub(crate) fn cancellation() -> (Canceller, CancelToken) {
    let (tx, rx) = bounded(0);
    (Canceller { _tx: tx }, CancelToken { rx })
}

impl CancelToken {
    /// Non-blocking check, made between hash operations.
    #[inline]
    pub(crate) fn is_cancelled(&self) -> bool {
        matches!(self.rx.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// Ready (disconnected) once cancellation is raised, for use in `select!`.
    pub(crate) fn receiver(&self) -> &Receiver<()> {
        &self.rx
    }
}
