//! The published dex state.
//!
//! Only the current request may publish; a commit from a superseded guard is
//! dropped.

use serde::Serialize;
use tokio::sync::RwLock;

use crate::use_cases::dex::DexView;
use crate::use_cases::request::RequestGuard;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DexState {
    #[default]
    Idle,
    Ready(Box<DexView>),
    Failed { message: String },
}

#[derive(Default)]
pub struct DexStore {
    state: RwLock<DexState>,
}

impl DexStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> DexState {
        self.state.read().await.clone()
    }

    /// Publish `state` if `guard` is still current. The check happens under
    /// the write lock so a newer commit cannot be overwritten.
    pub async fn commit(&self, guard: &RequestGuard, state: DexState) -> bool {
        let mut current = self.state.write().await;
        if !guard.is_current() {
            tracing::debug!(sequence = guard.sequence(), "Dropping stale result");
            return false;
        }
        *current = state;
        true
    }
}
