//! Evolution chain building with era pruning.

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::RwLock;

use dexera_domain::{build_forest, EraScope, EvolutionNode, RawEvolutionNode};
use dexera_shared::EvolutionChain;

use crate::infrastructure::resources::Resources;
use crate::use_cases::availability::EraAvailability;
use crate::use_cases::request::{RequestGuard, Superseded};

/// Builds the era-pruned evolution forest for a species' chain.
///
/// The raw chain is fetched once per chain link change; subjects in the same
/// family reuse it.
pub struct EvolutionChainBuilder {
    resources: Arc<Resources>,
    availability: Arc<EraAvailability>,
    last_chain: RwLock<Option<(String, Arc<EvolutionChain>)>>,
}

impl EvolutionChainBuilder {
    pub fn new(resources: Arc<Resources>, availability: Arc<EraAvailability>) -> Self {
        Self {
            resources,
            availability,
            last_chain: RwLock::new(None),
        }
    }

    /// The raw chain behind a species' chain link; `None` when unavailable.
    pub async fn chain(&self, link: &str) -> Option<Arc<EvolutionChain>> {
        if let Some((cached_link, chain)) = self.last_chain.read().await.as_ref() {
            if cached_link == link {
                return Some(chain.clone());
            }
        }

        match self.resources.evolution_chain(link).await {
            Ok(chain) => {
                let chain = Arc::new(chain);
                *self.last_chain.write().await = Some((link.to_string(), chain.clone()));
                Some(chain)
            }
            Err(e) => {
                tracing::warn!(link = %link, error = %e, "Evolution chain unavailable");
                None
            }
        }
    }

    /// Prune and label the raw chain for the selected era. Without a scope
    /// every node is available.
    pub async fn execute(
        &self,
        raw: Option<&RawEvolutionNode>,
        scope: Option<&EraScope>,
        guard: &RequestGuard,
    ) -> Result<Vec<EvolutionNode>, Superseded> {
        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        let available: Option<HashSet<String>> = match scope {
            Some(scope) => {
                let species = raw.species_names();
                let checks = join_all(
                    species
                        .iter()
                        .map(|name| self.availability.species_available(name, scope)),
                )
                .await;
                guard.ensure_current()?;
                Some(
                    species
                        .into_iter()
                        .zip(checks)
                        .filter_map(|(name, available)| available.then_some(name))
                        .collect(),
                )
            }
            None => None,
        };

        let forest = build_forest(raw, |species| match &available {
            Some(available) => available.contains(species),
            None => true,
        });
        tracing::debug!(roots = forest.len(), "Built evolution forest");
        Ok(forest)
    }
}
