//! Ability descriptions for the abilities a subject has ever had.

use std::sync::Arc;

use futures_util::future::join_all;
use serde::Serialize;

use dexera_shared::ability::NO_DESCRIPTION;

use crate::infrastructure::resources::Resources;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbilityInfo {
    pub name: String,
    pub description: String,
    /// Generation the ability was introduced in, e.g. `generation-iii`.
    pub generation: Option<String>,
}

pub struct AbilityDescriptions {
    resources: Arc<Resources>,
}

impl AbilityDescriptions {
    pub fn new(resources: Arc<Resources>) -> Self {
        Self { resources }
    }

    /// One entry per name, in input order. Lookups that fail get the placeholder text.
    pub async fn execute(&self, names: &[String]) -> Vec<AbilityInfo> {
        let results = join_all(names.iter().map(|name| self.resources.ability(name))).await;
        names
            .iter()
            .zip(results)
            .map(|(name, result)| match result {
                Ok(ability) => AbilityInfo {
                    name: name.clone(),
                    description: ability.description(),
                    generation: ability.generation.as_ref().map(|g| g.name.clone()),
                },
                Err(e) => {
                    tracing::debug!(ability = %name, error = %e, "Ability unavailable");
                    AbilityInfo {
                        name: name.clone(),
                        description: NO_DESCRIPTION.to_string(),
                        generation: None,
                    }
                }
            })
            .collect()
    }
}
