//! External service port traits (remote data source, durable cache store).

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dexera_domain::common::normalize_key;
use url::Url;

use super::error::{SourceError, StoreError};

// =============================================================================
// Resource Addressing
// =============================================================================

/// Every resource kind the engine reads from the remote graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Pokemon,
    PokemonForm,
    PokemonSpecies,
    EvolutionChain,
    Move,
    Machine,
    Version,
    VersionGroup,
    Ability,
    Encounters,
    Listing,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::PokemonForm => "pokemon-form",
            Self::PokemonSpecies => "pokemon-species",
            Self::EvolutionChain => "evolution-chain",
            Self::Move => "move",
            Self::Machine => "machine",
            Self::Version => "version",
            Self::VersionGroup => "version-group",
            Self::Ability => "ability",
            Self::Encounters => "encounters",
            Self::Listing => "listing",
        }
    }

    /// Kinds addressed directly by a `{segment}/{key}` path.
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "pokemon" => Some(Self::Pokemon),
            "pokemon-form" => Some(Self::PokemonForm),
            "pokemon-species" => Some(Self::PokemonSpecies),
            "evolution-chain" => Some(Self::EvolutionChain),
            "move" => Some(Self::Move),
            "machine" => Some(Self::Machine),
            "version" => Some(Self::Version),
            "version-group" => Some(Self::VersionGroup),
            "ability" => Some(Self::Ability),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource in the remote graph, independent of the base URL it is served from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub key: String,
}

impl ResourceRef {
    pub fn new(kind: ResourceKind, key: impl AsRef<str>) -> Self {
        Self {
            kind,
            key: normalize_key(key.as_ref()),
        }
    }

    /// One page of the creature listing.
    pub fn listing(offset: u32, limit: u32) -> Self {
        Self::new(ResourceKind::Listing, format!("offset={offset}&limit={limit}"))
    }

    /// Parse an absolute resource link embedded in a record
    /// (`.../evolution-chain/2/`, `.../machine/13/`, `.../pokemon?offset=20&limit=20`).
    pub fn from_url(link: &str) -> Result<Self, SourceError> {
        let parsed = Url::parse(link).map_err(|e| SourceError::malformed("resource link", e))?;
        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).collect())
            .unwrap_or_default();

        let position = segments
            .iter()
            .position(|s| ResourceKind::from_segment(s).is_some())
            .ok_or_else(|| SourceError::malformed("resource link", link))?;
        let kind = ResourceKind::from_segment(segments[position])
            .ok_or_else(|| SourceError::malformed("resource link", link))?;

        match (kind, segments.get(position + 1), segments.get(position + 2)) {
            (ResourceKind::Pokemon, Some(key), Some(&"encounters")) => {
                Ok(Self::new(ResourceKind::Encounters, key))
            }
            (_, Some(key), _) => Ok(Self::new(kind, key)),
            (ResourceKind::Pokemon, None, _) => {
                let query = parsed.query().unwrap_or_default();
                Ok(Self::new(ResourceKind::Listing, query))
            }
            _ => Err(SourceError::malformed("resource link", link)),
        }
    }

    /// Path relative to the data source base URL.
    pub fn path(&self) -> String {
        match self.kind {
            ResourceKind::Encounters => format!("pokemon/{}/encounters", self.key),
            ResourceKind::Listing => format!("pokemon?{}", self.key),
            kind => format!("{}/{}", kind.as_str(), self.key),
        }
    }

    /// Key under which the durable tier stores this resource.
    pub fn cache_key(&self) -> String {
        format!("pokeapi:{}:{}", self.kind.as_str(), self.key)
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// =============================================================================
// Data Source Port
// =============================================================================

/// Read-only access to the remote resource graph. Returns raw JSON bodies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSourcePort: Send + Sync {
    async fn fetch(&self, resource: &ResourceRef) -> Result<String, SourceError>;
}

// =============================================================================
// Durable Store Port
// =============================================================================

/// A raw response body and the moment it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredResource {
    pub body: String,
    pub fetched_at: DateTime<Utc>,
}

/// The cache tier that survives restarts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DurableStorePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<StoredResource>, StoreError>;
    async fn put(&self, key: &str, resource: &StoredResource) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
