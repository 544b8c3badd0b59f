//! Evolution chain (`evolution-chain/{id}`) records.

use serde::{Deserialize, Serialize};

use dexera_domain::common::StringExt;
use dexera_domain::{EvolutionCondition, RawEvolutionNode};

use crate::resource::NamedResource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    pub trigger: NamedResource,
    #[serde(default)]
    pub min_level: Option<u32>,
    #[serde(default)]
    pub min_happiness: Option<u32>,
    #[serde(default)]
    pub min_affection: Option<u32>,
    #[serde(default)]
    pub min_beauty: Option<u32>,
    #[serde(default)]
    pub time_of_day: Option<String>,
    #[serde(default)]
    pub item: Option<NamedResource>,
    #[serde(default)]
    pub held_item: Option<NamedResource>,
    #[serde(default)]
    pub known_move: Option<NamedResource>,
    #[serde(default)]
    pub known_move_type: Option<NamedResource>,
    #[serde(default)]
    pub location: Option<NamedResource>,
    #[serde(default)]
    pub party_species: Option<NamedResource>,
    #[serde(default)]
    pub party_type: Option<NamedResource>,
    #[serde(default)]
    pub trade_species: Option<NamedResource>,
    #[serde(default)]
    pub gender: Option<u8>,
    #[serde(default)]
    pub relative_physical_stats: Option<i8>,
    #[serde(default)]
    pub needs_overworld_rain: bool,
    #[serde(default)]
    pub turn_upside_down: bool,
}

fn name_of(resource: &Option<NamedResource>) -> Option<String> {
    resource.as_ref().map(|r| r.name.clone())
}

impl From<&EvolutionDetail> for EvolutionCondition {
    fn from(detail: &EvolutionDetail) -> Self {
        EvolutionCondition {
            trigger: detail.trigger.name.clone(),
            min_level: detail.min_level,
            min_happiness: detail.min_happiness,
            min_affection: detail.min_affection,
            min_beauty: detail.min_beauty,
            time_of_day: detail.time_of_day.clone().and_then(StringExt::into_option),
            item: name_of(&detail.item),
            held_item: name_of(&detail.held_item),
            known_move: name_of(&detail.known_move),
            known_move_type: name_of(&detail.known_move_type),
            location: name_of(&detail.location),
            party_species: name_of(&detail.party_species),
            party_type: name_of(&detail.party_type),
            trade_species: name_of(&detail.trade_species),
            gender: detail.gender,
            relative_physical_stats: detail.relative_physical_stats,
            needs_overworld_rain: detail.needs_overworld_rain,
            turn_upside_down: detail.turn_upside_down,
        }
    }
}

impl From<&ChainLink> for RawEvolutionNode {
    fn from(link: &ChainLink) -> Self {
        RawEvolutionNode {
            species: link.species.name.clone(),
            details: link.evolution_details.iter().map(EvolutionCondition::from).collect(),
            evolves_to: link.evolves_to.iter().map(RawEvolutionNode::from).collect(),
        }
    }
}

impl EvolutionChain {
    pub fn raw_tree(&self) -> RawEvolutionNode {
        RawEvolutionNode::from(&self.chain)
    }
}
