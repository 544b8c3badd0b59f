use serde::Serialize;

use crate::era::{version_group_rank, VersionGroupRank};

/// Values a move had before the version group named by `version_group`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PastMoveValues {
    pub version_group: String,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub accuracy: Option<u32>,
    pub effect_chance: Option<u32>,
    pub type_name: Option<String>,
    pub effect: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDetails {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub damage_class: Option<String>,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub accuracy: Option<u32>,
    pub priority: i32,
    pub effect_chance: Option<u32>,
    /// English short effect with `$effect_chance` still unexpanded.
    pub effect: Option<String>,
    #[serde(skip)]
    pub past_values: Vec<PastMoveValues>,
}

impl MoveDetails {
    /// The move as it was at the selected version group.
    ///
    /// A past-values record applies when the selection is strictly before its
    /// boundary. Records are applied from the latest boundary to the earliest
    /// so the one closest ahead of the selection wins; only the fields a
    /// record actually carries are overridden.
    pub fn for_era(&self, selected: Option<VersionGroupRank>) -> MoveDetails {
        let mut adjusted = MoveDetails {
            past_values: Vec::new(),
            ..self.clone()
        };
        let Some(selected) = selected else {
            return adjusted;
        };

        let mut applicable: Vec<(VersionGroupRank, &PastMoveValues)> = self
            .past_values
            .iter()
            .filter_map(|past| version_group_rank(&past.version_group).map(|rank| (rank, past)))
            .filter(|(rank, _)| selected < *rank)
            .collect();
        applicable.sort_by(|a, b| b.0.cmp(&a.0));

        for (_, past) in applicable {
            if let Some(power) = past.power {
                adjusted.power = Some(power);
            }
            if let Some(pp) = past.pp {
                adjusted.pp = Some(pp);
            }
            if let Some(accuracy) = past.accuracy {
                adjusted.accuracy = Some(accuracy);
            }
            if let Some(chance) = past.effect_chance {
                adjusted.effect_chance = Some(chance);
            }
            if let Some(type_name) = &past.type_name {
                adjusted.type_name = Some(type_name.clone());
            }
            if let Some(effect) = &past.effect {
                adjusted.effect = Some(effect.clone());
            }
        }
        adjusted
    }

    /// Effect text with the effect chance substituted, or `"N/A"`.
    pub fn effect_text(&self) -> String {
        let Some(effect) = &self.effect else {
            return "N/A".to_string();
        };
        match self.effect_chance {
            Some(chance) => effect.replace("$effect_chance", &chance.to_string()),
            None => effect.clone(),
        }
    }
}
