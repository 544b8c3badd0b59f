//! Application state and composition.

use std::sync::Arc;

use chrono::Duration;

use crate::config::EngineConfig;
use crate::infrastructure::{
    clock::SystemClock,
    pokeapi::PokeApiClient,
    ports::{ClockPort, DataSourcePort, DurableStorePort, StoreError},
    resources::{Resources, DEFAULT_CACHE_TTL_DAYS},
    store::{MemoryCacheStore, SqliteCacheStore},
};
use crate::stores::DexStore;
use crate::use_cases;

/// Main application state.
///
/// Holds the shared resource cache, every pipeline use case and the
/// controller that coordinates them.
pub struct App {
    pub resources: Arc<Resources>,
    pub use_cases: UseCases,
    pub dex: Arc<use_cases::DexController>,
}

/// Container for all use cases.
pub struct UseCases {
    pub versions: Arc<use_cases::VersionResolver>,
    pub availability: Arc<use_cases::EraAvailability>,
    pub forms: Arc<use_cases::FormResolver>,
    pub evolution: Arc<use_cases::EvolutionChainBuilder>,
    pub moves: Arc<use_cases::MoveAggregator>,
    pub encounters: Arc<use_cases::EncounterLookup>,
    pub abilities: Arc<use_cases::AbilityDescriptions>,
    pub names: Arc<use_cases::NameIndex>,
}

impl App {
    /// Wire the application around the given infrastructure.
    pub fn new(
        source: Arc<dyn DataSourcePort>,
        store: Arc<dyn DurableStorePort>,
        clock: Arc<dyn ClockPort>,
        config: &EngineConfig,
    ) -> Self {
        let ttl = config.cache_ttl().unwrap_or_else(|| {
            tracing::warn!(days = config.cache_ttl_days, "Cache TTL out of range, using default");
            Duration::days(DEFAULT_CACHE_TTL_DAYS)
        });
        let resources = Arc::new(Resources::new(source, store, clock, ttl));

        let availability = Arc::new(use_cases::EraAvailability::new(resources.clone()));
        let use_cases = UseCases {
            versions: Arc::new(use_cases::VersionResolver::new(resources.clone())),
            forms: Arc::new(use_cases::FormResolver::new(
                resources.clone(),
                availability.clone(),
            )),
            evolution: Arc::new(use_cases::EvolutionChainBuilder::new(
                resources.clone(),
                availability.clone(),
            )),
            moves: Arc::new(use_cases::MoveAggregator::new(resources.clone())),
            encounters: Arc::new(use_cases::EncounterLookup::new(resources.clone())),
            abilities: Arc::new(use_cases::AbilityDescriptions::new(resources.clone())),
            names: Arc::new(use_cases::NameIndex::new(
                resources.clone(),
                config.list_page_size,
            )),
            availability,
        };

        let pipeline = use_cases::DexPipeline {
            versions: use_cases.versions.clone(),
            forms: use_cases.forms.clone(),
            evolution: use_cases.evolution.clone(),
            moves: use_cases.moves.clone(),
            encounters: use_cases.encounters.clone(),
            abilities: use_cases.abilities.clone(),
        };
        let dex = Arc::new(use_cases::DexController::new(
            resources.clone(),
            pipeline,
            Arc::new(DexStore::new()),
        ));

        Self {
            resources,
            use_cases,
            dex,
        }
    }

    /// Production wiring: HTTP data source, SQLite durable tier when a path
    /// is configured (in-memory otherwise), system clock.
    pub async fn from_config(config: &EngineConfig) -> Result<Self, StoreError> {
        let source = Arc::new(PokeApiClient::with_timeout(
            &config.base_url,
            config.http_timeout_secs,
        ));
        let store: Arc<dyn DurableStorePort> = match &config.cache_db {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using SQLite resource cache");
                Arc::new(SqliteCacheStore::new(&path.to_string_lossy()).await?)
            }
            None => {
                tracing::info!("Using in-memory resource cache");
                Arc::new(MemoryCacheStore::new())
            }
        };
        Ok(Self::new(source, store, Arc::new(SystemClock::new()), config))
    }
}
