//! Creature (`pokemon/{name}`) and form (`pokemon-form/{name}`) records.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use dexera_domain::{
    AbilitySlot, AttributeRecord, AvailabilityEvidence, LearnDetail, LearnRecord, PastAbilitySlot,
    PastEntry, SpriteSheet, StatValue, TypeSlot,
};

use crate::resource::NamedResource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub species: NamedResource,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub past_types: Vec<PastTypes>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
    #[serde(default)]
    pub past_abilities: Vec<PastAbilities>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub past_stats: Vec<PastStats>,
    #[serde(default)]
    pub moves: Vec<PokemonMove>,
    #[serde(default)]
    pub game_indices: Vec<GameIndex>,
    #[serde(default)]
    pub held_items: Vec<HeldItem>,
    #[serde(default)]
    pub forms: Vec<NamedResource>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastTypes {
    pub generation: NamedResource,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAbility {
    /// `null` inside past-abilities entries: the slot did not exist.
    #[serde(default)]
    pub ability: Option<NamedResource>,
    #[serde(default)]
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastAbilities {
    pub generation: NamedResource,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastStats {
    pub generation: NamedResource,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<MoveVersionGroupDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveVersionGroupDetail {
    #[serde(default)]
    pub level_learned_at: u32,
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameIndex {
    pub game_index: u32,
    pub version: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItem {
    pub item: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
    /// generation key → sprite-group key → group.
    #[serde(default)]
    pub versions: BTreeMap<String, BTreeMap<String, SpriteGroup>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: SpriteGroup,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteGroup {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl Pokemon {
    pub fn attribute_record(&self) -> AttributeRecord {
        AttributeRecord {
            types: self.types.iter().map(PokemonType::to_slot).collect(),
            past_types: self
                .past_types
                .iter()
                .map(|p| {
                    PastEntry::new(
                        p.generation.generation_rank(),
                        p.types.iter().map(PokemonType::to_slot).collect(),
                    )
                })
                .collect(),
            abilities: self
                .abilities
                .iter()
                .filter_map(|a| {
                    a.ability.as_ref().map(|ability| AbilitySlot {
                        slot: a.slot,
                        name: ability.name.clone(),
                        is_hidden: a.is_hidden,
                    })
                })
                .collect(),
            past_abilities: self
                .past_abilities
                .iter()
                .map(|p| {
                    PastEntry::new(
                        p.generation.generation_rank(),
                        p.abilities
                            .iter()
                            .map(|a| PastAbilitySlot {
                                slot: a.slot,
                                ability: a.ability.as_ref().map(|n| n.name.clone()),
                                is_hidden: a.is_hidden,
                            })
                            .collect(),
                    )
                })
                .collect(),
            stats: self.stats.iter().map(PokemonStat::to_value).collect(),
            past_stats: self
                .past_stats
                .iter()
                .map(|p| {
                    PastEntry::new(
                        p.generation.generation_rank(),
                        p.stats.iter().map(PokemonStat::to_value).collect(),
                    )
                })
                .collect(),
        }
    }

    pub fn learn_records(&self) -> Vec<LearnRecord> {
        self.moves
            .iter()
            .map(|m| LearnRecord {
                move_name: m.move_.name.clone(),
                details: m
                    .version_group_details
                    .iter()
                    .map(|d| LearnDetail {
                        version_group: d.version_group.name.clone(),
                        method: d.move_learn_method.name.clone(),
                        level: d.level_learned_at,
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn game_versions(&self) -> Vec<String> {
        self.game_indices
            .iter()
            .map(|g| g.version.name.clone())
            .collect()
    }

    /// Every version group named anywhere in the learnset.
    pub fn learnset_groups(&self) -> BTreeSet<String> {
        self.moves
            .iter()
            .flat_map(|m| &m.version_group_details)
            .map(|d| d.version_group.name.clone())
            .collect()
    }

    pub fn availability_evidence(&self) -> AvailabilityEvidence {
        AvailabilityEvidence::Creature {
            game_versions: self.game_versions(),
            learnset_groups: self.learnset_groups(),
        }
    }

    /// Every ability named in current or past entries, deduplicated, nulls skipped.
    pub fn all_ability_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let past = self.past_abilities.iter().flat_map(|p| &p.abilities);
        for ability in self.abilities.iter().chain(past) {
            if let Some(named) = &ability.ability {
                if !names.contains(&named.name) {
                    names.push(named.name.clone());
                }
            }
        }
        names
    }

    pub fn sprite_sheet(&self) -> SpriteSheet {
        SpriteSheet {
            versions: self
                .sprites
                .versions
                .iter()
                .map(|(generation, groups)| {
                    (
                        generation.clone(),
                        groups
                            .iter()
                            .map(|(group, sprite)| (group.clone(), sprite.front_default.clone()))
                            .collect(),
                    )
                })
                .collect(),
            official_artwork: self.sprites.other.official_artwork.front_default.clone(),
            front_default: self.sprites.front_default.clone(),
        }
    }

    /// A record for a form that has no full creature record of its own: the
    /// base creature's fields with the form's name, sprite and types.
    pub fn with_form_overrides(&self, form: &PokemonForm) -> Pokemon {
        let mut hybrid = self.clone();
        hybrid.name = form.name.clone();
        if !form.types.is_empty() {
            hybrid.types = form.types.clone();
            hybrid.past_types.clear();
        }
        if form.sprites.front_default.is_some() {
            hybrid.sprites.front_default = form.sprites.front_default.clone();
            hybrid.sprites.other.official_artwork.front_default = None;
            hybrid.sprites.versions.clear();
        }
        hybrid
    }
}

impl PokemonType {
    fn to_slot(&self) -> TypeSlot {
        TypeSlot {
            slot: self.slot,
            name: self.type_.name.clone(),
        }
    }
}

impl PokemonStat {
    fn to_value(&self) -> StatValue {
        StatValue {
            name: self.stat.name.clone(),
            base_stat: self.base_stat,
            effort: self.effort,
        }
    }
}

/// Lightweight form record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonForm {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub form_name: String,
    pub pokemon: NamedResource,
    #[serde(default)]
    pub version_group: Option<NamedResource>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub sprites: SpriteGroup,
}

impl PokemonForm {
    pub fn availability_evidence(&self) -> AvailabilityEvidence {
        AvailabilityEvidence::Form {
            version_group: self.version_group.as_ref().map(|g| g.name.clone()),
        }
    }
}
