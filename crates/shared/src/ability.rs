//! Ability (`ability/{name}`) records.

use serde::{Deserialize, Serialize};

use crate::resource::{english_effect, NamedResource, VerboseEffect};

pub const NO_DESCRIPTION: &str = "No description available.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub generation: Option<NamedResource>,
    #[serde(default)]
    pub effect_entries: Vec<VerboseEffect>,
}

impl Ability {
    /// English long-form effect, or the placeholder text.
    pub fn description(&self) -> String {
        english_effect(&self.effect_entries)
            .map(|e| e.effect.clone())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string())
    }
}
