//! Two-tier resource cache over the remote data source.
//!
//! Read path: fast tier (decoded values) -> durable tier (raw bodies, promoted
//! with their original fetch time) -> network. Only successful, decodable
//! fetches are written to either tier.

use std::sync::Arc;

use chrono::Duration;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use dexera_domain::common::normalize_key;
use dexera_shared::{
    Ability, EvolutionChain, LocationAreaEncounter, Machine, Move, NamedResourceList, Pokemon,
    PokemonForm, PokemonSpecies, Version, VersionGroup,
};

use crate::infrastructure::cache::TtlCache;
use crate::infrastructure::ports::{
    ClockPort, DataSourcePort, DurableStorePort, ResourceKind, ResourceRef, SourceError,
    StoredResource,
};

/// Default time-to-live for both tiers.
pub const DEFAULT_CACHE_TTL_DAYS: i64 = 7;

fn decode<T: DeserializeOwned>(kind: ResourceKind, body: &str) -> Result<T, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::malformed(kind.as_str(), e))
}

/// Cache for one resource kind.
pub struct ResourceCache<T> {
    kind: ResourceKind,
    fast: TtlCache<String, Arc<T>>,
    source: Arc<dyn DataSourcePort>,
    store: Arc<dyn DurableStorePort>,
    clock: Arc<dyn ClockPort>,
    ttl: Duration,
    in_flight: DashMap<String, Arc<Mutex<()>>>,
}

impl<T> ResourceCache<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    pub fn new(
        kind: ResourceKind,
        source: Arc<dyn DataSourcePort>,
        store: Arc<dyn DurableStorePort>,
        clock: Arc<dyn ClockPort>,
        ttl: Duration,
    ) -> Self {
        Self {
            kind,
            fast: TtlCache::new(ttl, clock.clone()),
            source,
            store,
            clock,
            ttl,
            in_flight: DashMap::new(),
        }
    }

    /// Get a decoded resource, fetching and storing on a miss.
    pub async fn get(&self, key: &str) -> Result<Arc<T>, SourceError> {
        let key = normalize_key(key);
        if let Some(value) = self.fast.get(&key).await {
            tracing::trace!(kind = %self.kind, key = %key, "Fast tier hit");
            return Ok(value);
        }

        // Concurrent misses for one key wait here and reuse the winner's result.
        let lock = self
            .in_flight
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        if let Some(value) = self.fast.get(&key).await {
            return Ok(value);
        }

        let resource = ResourceRef::new(self.kind, &key);
        let result = self.load(&resource).await;
        self.in_flight.remove(&key);
        result
    }

    async fn load(&self, resource: &ResourceRef) -> Result<Arc<T>, SourceError> {
        let cache_key = resource.cache_key();
        if let Some(value) = self.from_durable(resource, &cache_key).await {
            return Ok(value);
        }

        tracing::debug!(kind = %self.kind, key = %resource.key, "Cache miss, fetching");
        let body = self.source.fetch(resource).await?;
        let value = Arc::new(decode::<T>(self.kind, &body)?);

        let fetched_at = self.clock.now();
        self.fast
            .insert_at(resource.key.clone(), value.clone(), fetched_at)
            .await;
        let stored = StoredResource { body, fetched_at };
        if let Err(e) = self.store.put(&cache_key, &stored).await {
            tracing::warn!(key = %cache_key, error = %e, "Durable cache write failed");
        }

        Ok(value)
    }

    async fn from_durable(&self, resource: &ResourceRef, cache_key: &str) -> Option<Arc<T>> {
        let stored = match self.store.get(cache_key).await {
            Ok(Some(stored)) => stored,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %cache_key, error = %e, "Durable cache read failed");
                return None;
            }
        };

        if self.clock.now() - stored.fetched_at >= self.ttl {
            tracing::debug!(key = %cache_key, "Durable entry expired");
            return None;
        }

        match decode::<T>(self.kind, &stored.body) {
            Ok(value) => {
                let value = Arc::new(value);
                self.fast
                    .insert_at(resource.key.clone(), value.clone(), stored.fetched_at)
                    .await;
                tracing::trace!(key = %cache_key, "Promoted durable entry");
                Some(value)
            }
            Err(e) => {
                tracing::warn!(key = %cache_key, error = %e, "Dropping undecodable durable entry");
                if let Err(e) = self.store.remove(cache_key).await {
                    tracing::warn!(key = %cache_key, error = %e, "Durable cache remove failed");
                }
                None
            }
        }
    }

    /// Drop expired fast-tier entries.
    pub async fn cleanup_expired(&self) -> usize {
        self.fast.cleanup_expired().await
    }
}

/// Every remote resource the pipeline reads, cached where it pays off.
pub struct Resources {
    source: Arc<dyn DataSourcePort>,
    pokemon: ResourceCache<Pokemon>,
    forms: ResourceCache<PokemonForm>,
    species: ResourceCache<PokemonSpecies>,
    moves: ResourceCache<Move>,
    machines: ResourceCache<Machine>,
    abilities: ResourceCache<Ability>,
    encounters: ResourceCache<Vec<LocationAreaEncounter>>,
}

impl Resources {
    pub fn new(
        source: Arc<dyn DataSourcePort>,
        store: Arc<dyn DurableStorePort>,
        clock: Arc<dyn ClockPort>,
        ttl: Duration,
    ) -> Self {
        Self {
            pokemon: Self::cache(ResourceKind::Pokemon, &source, &store, &clock, ttl),
            forms: Self::cache(ResourceKind::PokemonForm, &source, &store, &clock, ttl),
            species: Self::cache(ResourceKind::PokemonSpecies, &source, &store, &clock, ttl),
            moves: Self::cache(ResourceKind::Move, &source, &store, &clock, ttl),
            machines: Self::cache(ResourceKind::Machine, &source, &store, &clock, ttl),
            abilities: Self::cache(ResourceKind::Ability, &source, &store, &clock, ttl),
            encounters: Self::cache(ResourceKind::Encounters, &source, &store, &clock, ttl),
            source,
        }
    }

    fn cache<T>(
        kind: ResourceKind,
        source: &Arc<dyn DataSourcePort>,
        store: &Arc<dyn DurableStorePort>,
        clock: &Arc<dyn ClockPort>,
        ttl: Duration,
    ) -> ResourceCache<T>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        ResourceCache::new(kind, source.clone(), store.clone(), clock.clone(), ttl)
    }

    pub async fn pokemon(&self, name: &str) -> Result<Arc<Pokemon>, SourceError> {
        self.pokemon.get(name).await
    }

    pub async fn pokemon_form(&self, name: &str) -> Result<Arc<PokemonForm>, SourceError> {
        self.forms.get(name).await
    }

    pub async fn species(&self, name: &str) -> Result<Arc<PokemonSpecies>, SourceError> {
        self.species.get(name).await
    }

    pub async fn move_record(&self, name: &str) -> Result<Arc<Move>, SourceError> {
        self.moves.get(name).await
    }

    /// Machine behind a link embedded in a move record.
    pub async fn machine(&self, link: &str) -> Result<Arc<Machine>, SourceError> {
        let resource = ResourceRef::from_url(link)?;
        if resource.kind != ResourceKind::Machine {
            return Err(SourceError::malformed("machine link", link));
        }
        self.machines.get(&resource.key).await
    }

    pub async fn ability(&self, name: &str) -> Result<Arc<Ability>, SourceError> {
        self.abilities.get(name).await
    }

    pub async fn encounters(
        &self,
        name: &str,
    ) -> Result<Arc<Vec<LocationAreaEncounter>>, SourceError> {
        self.encounters.get(name).await
    }

    /// Evolution chain behind a species' chain link. Not cached here; the
    /// chain builder keeps the last chain it built.
    pub async fn evolution_chain(&self, link: &str) -> Result<EvolutionChain, SourceError> {
        let resource = ResourceRef::from_url(link)?;
        if resource.kind != ResourceKind::EvolutionChain {
            return Err(SourceError::malformed("evolution chain link", link));
        }
        self.pass_through(&resource).await
    }

    pub async fn version(&self, name: &str) -> Result<Version, SourceError> {
        self.pass_through(&ResourceRef::new(ResourceKind::Version, name))
            .await
    }

    pub async fn version_group(&self, name: &str) -> Result<VersionGroup, SourceError> {
        self.pass_through(&ResourceRef::new(ResourceKind::VersionGroup, name))
            .await
    }

    pub async fn listing_page(
        &self,
        resource: &ResourceRef,
    ) -> Result<NamedResourceList, SourceError> {
        self.pass_through(resource).await
    }

    async fn pass_through<T: DeserializeOwned>(
        &self,
        resource: &ResourceRef,
    ) -> Result<T, SourceError> {
        let body = self.source.fetch(resource).await?;
        decode(resource.kind, &body)
    }

    /// Drop expired fast-tier entries across every cached kind.
    pub async fn purge_expired(&self) -> usize {
        self.pokemon.cleanup_expired().await
            + self.forms.cleanup_expired().await
            + self.species.cleanup_expired().await
            + self.moves.cleanup_expired().await
            + self.machines.cleanup_expired().await
            + self.abilities.cleanup_expired().await
            + self.encounters.cleanup_expired().await
    }
}
