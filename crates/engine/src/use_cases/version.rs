//! Version resolution: version name -> version group -> generation.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;

use dexera_domain::common::normalize_key;
use dexera_domain::{EraScope, GenerationRank};

use crate::infrastructure::resources::Resources;

/// A version with its version group and generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVersion {
    pub version: String,
    pub version_group: String,
    pub generation: GenerationRank,
}

impl ResolvedVersion {
    pub fn scope(&self) -> EraScope {
        EraScope::new(&self.version, &self.version_group, self.generation)
    }
}

/// Resolves free-text version names. The taxonomy is static, so successful
/// resolutions are kept for the life of the process.
pub struct VersionResolver {
    resources: Arc<Resources>,
    resolved: DashMap<String, ResolvedVersion>,
}

impl VersionResolver {
    pub fn new(resources: Arc<Resources>) -> Self {
        Self {
            resources,
            resolved: DashMap::new(),
        }
    }

    /// `None` means "no era constraint": unknown versions and fetch failures
    /// both resolve that way.
    pub async fn execute(&self, version: &str) -> Option<ResolvedVersion> {
        let key = normalize_key(version);
        if key.is_empty() {
            return None;
        }
        if let Some(hit) = self.resolved.get(&key) {
            return Some(hit.clone());
        }

        let record = match self.resources.version(&key).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(version = %key, error = %e, "Version lookup failed");
                return None;
            }
        };
        let group = match self.resources.version_group(&record.version_group.name).await {
            Ok(group) => group,
            Err(e) => {
                tracing::warn!(
                    version_group = %record.version_group.name,
                    error = %e,
                    "Version group lookup failed"
                );
                return None;
            }
        };
        let Some(generation) = group.generation.generation_rank() else {
            tracing::warn!(generation = %group.generation.name, "Unrecognised generation");
            return None;
        };

        let resolved = ResolvedVersion {
            version: record.name,
            version_group: group.name,
            generation,
        };
        tracing::debug!(
            version = %resolved.version,
            version_group = %resolved.version_group,
            generation = %resolved.generation,
            "Resolved version"
        );
        self.resolved.insert(key, resolved.clone());
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{resources_for, FixtureSource};

    #[tokio::test]
    async fn resolves_and_remembers() {
        let source = Arc::new(FixtureSource::standard());
        let resolver = VersionResolver::new(resources_for(source.clone()));

        let red = resolver.execute("  Red ").await.unwrap();
        assert_eq!(red.version_group, "red-blue");
        assert_eq!(red.generation.value(), 1);

        resolver.execute("red").await.unwrap();
        assert_eq!(source.fetch_count("version/red"), 1);
        assert_eq!(source.fetch_count("version-group/red-blue"), 1);
    }

    #[tokio::test]
    async fn failures_resolve_to_no_constraint_and_are_retried() {
        let source = Arc::new(FixtureSource::standard());
        let resolver = VersionResolver::new(resources_for(source.clone()));

        assert_eq!(resolver.execute("pokemon-stadium").await, None);
        assert_eq!(resolver.execute("").await, None);
        assert_eq!(resolver.execute("pokemon-stadium").await, None);
        assert_eq!(source.fetch_count("version/pokemon-stadium"), 2);
    }

    #[tokio::test]
    async fn scope_spans_the_whole_generation() {
        let source = Arc::new(FixtureSource::standard());
        let resolver = VersionResolver::new(resources_for(source));

        let scope = resolver.execute("red").await.unwrap().scope();
        assert!(scope.includes_group("yellow"));
        assert!(!scope.includes_group("gold-silver"));
    }
}
