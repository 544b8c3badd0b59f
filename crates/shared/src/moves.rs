//! Move (`move/{name}`) and machine (`machine/{id}`) records.

use serde::{Deserialize, Serialize};

use dexera_domain::{MachineLabel, MachineRef, MoveDetails, PastMoveValues};

use crate::resource::{english_effect, ApiResource, NamedResource, VerboseEffect};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub accuracy: Option<u32>,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub pp: Option<u32>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub effect_chance: Option<u32>,
    #[serde(default)]
    pub damage_class: Option<NamedResource>,
    #[serde(rename = "type", default)]
    pub type_: Option<NamedResource>,
    #[serde(default)]
    pub effect_entries: Vec<VerboseEffect>,
    #[serde(default)]
    pub past_values: Vec<PastMoveStatValues>,
    #[serde(default)]
    pub machines: Vec<MachineVersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastMoveStatValues {
    #[serde(default)]
    pub accuracy: Option<u32>,
    #[serde(default)]
    pub effect_chance: Option<u32>,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub pp: Option<u32>,
    #[serde(default)]
    pub effect_entries: Vec<VerboseEffect>,
    #[serde(rename = "type", default)]
    pub type_: Option<NamedResource>,
    pub version_group: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineVersionDetail {
    pub machine: ApiResource,
    pub version_group: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: u32,
    pub item: NamedResource,
    #[serde(rename = "move", default)]
    pub move_: Option<NamedResource>,
    #[serde(default)]
    pub version_group: Option<NamedResource>,
}

/// Short English effect, falling back to the long form.
fn effect_text(entries: &[VerboseEffect]) -> Option<String> {
    english_effect(entries).and_then(|e| {
        [&e.short_effect, &e.effect]
            .into_iter()
            .find(|text| !text.is_empty())
            .cloned()
    })
}

impl Move {
    pub fn details(&self) -> MoveDetails {
        MoveDetails {
            name: self.name.clone(),
            type_name: self.type_.as_ref().map(|t| t.name.clone()),
            damage_class: self.damage_class.as_ref().map(|d| d.name.clone()),
            power: self.power,
            pp: self.pp,
            accuracy: self.accuracy,
            priority: self.priority,
            effect_chance: self.effect_chance,
            effect: effect_text(&self.effect_entries),
            past_values: self
                .past_values
                .iter()
                .map(|past| PastMoveValues {
                    version_group: past.version_group.name.clone(),
                    power: past.power,
                    pp: past.pp,
                    accuracy: past.accuracy,
                    effect_chance: past.effect_chance,
                    type_name: past.type_.as_ref().map(|t| t.name.clone()),
                    effect: effect_text(&past.effect_entries),
                })
                .collect(),
        }
    }

    pub fn machine_refs(&self) -> Vec<MachineRef> {
        self.machines
            .iter()
            .map(|m| MachineRef {
                version_group: m.version_group.name.clone(),
                machine_url: m.machine.url.clone(),
            })
            .collect()
    }
}

impl Machine {
    /// `None` when the item name is not a TM/HM/TR.
    pub fn label(&self) -> Option<MachineLabel> {
        self.item.name.parse().ok()
    }
}
