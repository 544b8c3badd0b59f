//! Wild encounter summaries and the obtainable pre-evolution hint.

use std::sync::Arc;

use dexera_domain::{has_encounters_in, summarize, EncounterSummary, RawEvolutionNode};
use dexera_shared::location_encounters;

use crate::infrastructure::resources::Resources;

pub struct EncounterLookup {
    resources: Arc<Resources>,
}

impl EncounterLookup {
    pub fn new(resources: Arc<Resources>) -> Self {
        Self { resources }
    }

    /// Encounter summary for the selected version. A failed lookup reads as
    /// "no data" rather than an error.
    pub async fn summary(&self, name: &str, version: Option<&str>) -> EncounterSummary {
        match self.resources.encounters(name).await {
            Ok(records) => summarize(&location_encounters(&records), version),
            Err(e) => {
                tracing::debug!(pokemon = %name, error = %e, "Encounters unavailable");
                EncounterSummary::default()
            }
        }
    }

    /// When the subject itself cannot be caught in `version`, the closest
    /// pre-evolution that can.
    pub async fn obtainable_pre_evolution(
        &self,
        raw: Option<&RawEvolutionNode>,
        species: &str,
        version: Option<&str>,
    ) -> Option<String> {
        let (raw, version) = (raw?, version?);
        for ancestor in raw.pre_evolutions_of(species) {
            let Ok(records) = self.resources.encounters(&ancestor).await else {
                continue;
            };
            if has_encounters_in(&location_encounters(&records), version) {
                return Some(ancestor);
            }
        }
        None
    }
}
