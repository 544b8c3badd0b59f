//! Era availability of creatures, forms and species.

use std::sync::Arc;

use futures_util::future::join_all;

use dexera_domain::EraScope;

use crate::infrastructure::resources::Resources;

/// Checks whether records exist in a selected era, fetching through the cache.
pub struct EraAvailability {
    resources: Arc<Resources>,
}

impl EraAvailability {
    pub fn new(resources: Arc<Resources>) -> Self {
        Self { resources }
    }

    /// A full creature record is checked first; names without one fall back
    /// to their lightweight form record. Unknown names are unavailable.
    pub async fn record_available(&self, name: &str, scope: &EraScope) -> bool {
        if let Ok(record) = self.resources.pokemon(name).await {
            return record.availability_evidence().is_available_in(scope);
        }
        match self.resources.pokemon_form(name).await {
            Ok(form) => form.availability_evidence().is_available_in(scope),
            Err(e) => {
                tracing::debug!(
                    name = %name,
                    error = %e,
                    "No record to classify, treating as unavailable"
                );
                false
            }
        }
    }

    /// A species is available when any of its varieties is. A species that
    /// cannot be fetched is kept rather than hidden.
    pub async fn species_available(&self, species: &str, scope: &EraScope) -> bool {
        let record = match self.resources.species(species).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(
                    species = %species,
                    error = %e,
                    "Species lookup failed, keeping node"
                );
                return true;
            }
        };

        let mut varieties = record.variety_names();
        if varieties.is_empty() {
            varieties.push(record.name.as_str());
        }
        join_all(varieties.into_iter().map(|v| self.record_available(v, scope)))
            .await
            .into_iter()
            .any(|available| available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{resources_for, FixtureSource};
    use dexera_domain::GenerationRank;

    fn scope(version: &str, group: &str, generation: u8) -> EraScope {
        EraScope::new(version, group, GenerationRank::new(generation).unwrap())
    }

    #[tokio::test]
    async fn creatures_use_game_indices_or_learnset_groups() {
        let availability = EraAvailability::new(resources_for(Arc::new(FixtureSource::standard())));

        assert!(availability.record_available("raichu", &scope("red", "red-blue", 1)).await);
        assert!(!availability.record_available("raichu-alola", &scope("red", "red-blue", 1)).await);
        assert!(availability.record_available("raichu-alola", &scope("sun", "sun-moon", 7)).await);
    }

    #[tokio::test]
    async fn form_records_fall_back_to_their_version_group() {
        let availability = EraAvailability::new(resources_for(Arc::new(FixtureSource::standard())));

        // Only a form record exists; introduced in sun-moon, so ultra-sun counts.
        let ultra_sun = scope("ultra-sun", "ultra-sun-ultra-moon", 7);
        assert!(availability.record_available("pikachu-cap", &ultra_sun).await);
        assert!(!availability.record_available("pikachu-cap", &scope("red", "red-blue", 1)).await);
        assert!(!availability.record_available("missingno", &scope("red", "red-blue", 1)).await);
    }

    #[tokio::test]
    async fn species_follow_their_varieties() {
        let availability = EraAvailability::new(resources_for(Arc::new(FixtureSource::standard())));

        assert!(availability.species_available("raichu", &scope("sun", "sun-moon", 7)).await);
        assert!(availability.species_available("charmander", &scope("red", "red-blue", 1)).await);
        assert!(!availability.species_available("pichu", &scope("red", "red-blue", 1)).await);
    }
}
