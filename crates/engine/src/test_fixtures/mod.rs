//! Test fixtures: a canned data source and a manually advanced clock.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{resources_for, FixtureSource};
//!
//! let source = Arc::new(FixtureSource::standard());
//! let resources = resources_for(source.clone());
//! resources.pokemon("charizard").await.unwrap();
//! assert_eq!(source.fetch_count("pokemon/charizard"), 1);
//! ```

mod data;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::sync::Notify;

use crate::infrastructure::ports::{ClockPort, DataSourcePort, ResourceRef, SourceError};
use crate::infrastructure::resources::{Resources, DEFAULT_CACHE_TTL_DAYS};
use crate::infrastructure::store::MemoryCacheStore;

// =============================================================================
// Fixture Data Source
// =============================================================================

enum Fixture {
    Body(String),
    Transient,
}

/// Holds one fetch open until released.
#[derive(Default)]
pub struct FetchGate {
    entered: Notify,
    release: Notify,
}

impl FetchGate {
    /// Resolves once the gated fetch has started.
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

/// Serves canned bodies keyed by resource path (`pokemon/charizard`).
/// Unknown paths are NotFound.
#[derive(Default)]
pub struct FixtureSource {
    fixtures: Mutex<HashMap<String, Fixture>>,
    counts: Mutex<HashMap<String, usize>>,
    gates: Mutex<HashMap<String, Arc<FetchGate>>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared creature data set used across engine tests.
    pub fn standard() -> Self {
        let source = Self::new();
        for (path, body) in data::standard() {
            source.insert(&path, &body.to_string());
        }
        source
    }

    pub fn with(self, path: &str, body: &str) -> Self {
        self.insert(path, body);
        self
    }

    pub fn failing(self, path: &str) -> Self {
        self.fixtures
            .lock()
            .unwrap()
            .insert(path.to_string(), Fixture::Transient);
        self
    }

    pub fn insert(&self, path: &str, body: &str) {
        self.fixtures
            .lock()
            .unwrap()
            .insert(path.to_string(), Fixture::Body(body.to_string()));
    }

    /// Gate the next fetch of `path`.
    pub fn gate(&self, path: &str) -> Arc<FetchGate> {
        let gate = Arc::new(FetchGate::default());
        self.gates
            .lock()
            .unwrap()
            .insert(path.to_string(), gate.clone());
        gate
    }

    pub fn fetch_count(&self, path: &str) -> usize {
        self.counts.lock().unwrap().get(path).copied().unwrap_or(0)
    }
}

#[async_trait]
impl DataSourcePort for FixtureSource {
    async fn fetch(&self, resource: &ResourceRef) -> Result<String, SourceError> {
        let path = resource.path();
        *self.counts.lock().unwrap().entry(path.clone()).or_insert(0) += 1;

        let gate = self.gates.lock().unwrap().remove(&path);
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        match self.fixtures.lock().unwrap().get(&path) {
            Some(Fixture::Body(body)) => Ok(body.clone()),
            Some(Fixture::Transient) => Err(SourceError::transient(format!("{path} unavailable"))),
            None => Err(SourceError::not_found(resource.kind.as_str(), &resource.key)),
        }
    }
}

// =============================================================================
// Clock
// =============================================================================

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::at(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }
}

impl ClockPort for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Resources over `source` with an in-memory durable tier and a fixed clock.
pub fn resources_for(source: Arc<FixtureSource>) -> Arc<Resources> {
    Arc::new(Resources::new(
        source,
        Arc::new(MemoryCacheStore::new()),
        Arc::new(ManualClock::default()),
        Duration::days(DEFAULT_CACHE_TTL_DAYS),
    ))
}
