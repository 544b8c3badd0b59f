//! Request sequencing and staleness guards.
//!
//! Every pipeline run takes a [`RequestGuard`] from the [`RequestSequence`].
//! Starting a newer run cancels the previous guard's token, so in-flight
//! network work can be aborted, and makes the old sequence number stale, so
//! results computed anyway are discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// A newer selection replaced the request that produced this result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("request superseded by a newer selection")]
pub struct Superseded;

/// Hands out monotonically increasing request numbers.
#[derive(Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
    active: Mutex<CancellationToken>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding whichever one was active.
    pub fn begin(&self) -> RequestGuard {
        let token = CancellationToken::new();
        let mut active = self
            .active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let previous = std::mem::replace(&mut *active, token.clone());
        previous.cancel();

        RequestGuard {
            sequence,
            latest: self.latest.clone(),
            token,
        }
    }

    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}

/// Identifies one pipeline run.
#[derive(Clone)]
pub struct RequestGuard {
    sequence: u64,
    latest: Arc<AtomicU64>,
    token: CancellationToken,
}

impl RequestGuard {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// True while no newer request has started.
    pub fn is_current(&self) -> bool {
        !self.token.is_cancelled() && self.latest.load(Ordering::SeqCst) == self.sequence
    }

    /// Checked after every suspension point.
    pub fn ensure_current(&self) -> Result<(), Superseded> {
        if self.is_current() {
            Ok(())
        } else {
            Err(Superseded)
        }
    }

    /// Resolves once a newer request starts.
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}
