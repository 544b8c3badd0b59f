//! Era projection of types, abilities and stats.
//!
//! A creature record carries only its current attribute arrays plus `past_*`
//! override entries. Each override entry is tagged with the generation at
//! which its value stopped applying, so an entry applies to every selected
//! generation at or before that tag.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::era::GenerationRank;

/// Fixed display order for stats; unknown stat names follow in record order.
pub const STAT_ORDER: [&str; 7] = [
    "hp",
    "attack",
    "defense",
    "special",
    "special-attack",
    "special-defense",
    "speed",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSlot {
    pub slot: u8,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilitySlot {
    pub slot: u8,
    pub name: String,
    pub is_hidden: bool,
}

/// One slot of a past-abilities entry; `ability: None` means the slot did not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastAbilitySlot {
    pub slot: u8,
    pub ability: Option<String>,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatValue {
    pub name: String,
    pub base_stat: u32,
    pub effort: u32,
}

/// An override entry. `generation` is `None` when the tag names a generation
/// the era tables do not know; such entries never apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastEntry<T> {
    pub generation: Option<GenerationRank>,
    pub values: Vec<T>,
}

impl<T> PastEntry<T> {
    pub fn new(generation: Option<GenerationRank>, values: Vec<T>) -> Self {
        Self { generation, values }
    }

    fn applies_to(&self, selected: GenerationRank) -> bool {
        self.generation.is_some_and(|tag| tag >= selected)
    }
}

/// The attribute arrays of a creature record, current plus historical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRecord {
    pub types: Vec<TypeSlot>,
    pub past_types: Vec<PastEntry<TypeSlot>>,
    pub abilities: Vec<AbilitySlot>,
    pub past_abilities: Vec<PastEntry<PastAbilitySlot>>,
    pub stats: Vec<StatValue>,
    pub past_stats: Vec<PastEntry<StatValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedAbility {
    pub slot: u8,
    pub name: String,
    pub is_hidden: bool,
    /// Hidden abilities keep their data before generation 5 but are not badged.
    pub show_hidden_badge: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedAttributes {
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<ProjectedAbility>,
    pub stats: Vec<StatValue>,
}

/// Project a record's attributes down to the given generation.
///
/// `None` means no era constraint: the current arrays are returned unchanged.
pub fn project(
    record: &AttributeRecord,
    generation: Option<GenerationRank>,
) -> ProjectedAttributes {
    ProjectedAttributes {
        types: project_types(record, generation),
        abilities: project_abilities(record, generation),
        stats: project_stats(record, generation),
    }
}

/// Types are replaced wholesale. Entries are scanned in record order
/// (newest boundary first); each applicable entry replaces the list and the
/// scan stops at the first entry whose boundary is behind the selection.
pub fn project_types(
    record: &AttributeRecord,
    generation: Option<GenerationRank>,
) -> Vec<TypeSlot> {
    let Some(selected) = generation else {
        return record.types.clone();
    };

    let mut types = &record.types;
    for entry in &record.past_types {
        if !entry.applies_to(selected) {
            break;
        }
        types = &entry.values;
    }
    types.clone()
}

pub fn project_abilities(
    record: &AttributeRecord,
    generation: Option<GenerationRank>,
) -> Vec<ProjectedAbility> {
    if generation.is_some_and(|g| g < GenerationRank::ABILITIES_INTRODUCED) {
        return Vec::new();
    }

    let mut by_slot: BTreeMap<u8, (String, bool)> = record
        .abilities
        .iter()
        .map(|a| (a.slot, (a.name.clone(), a.is_hidden)))
        .collect();

    if let Some(selected) = generation {
        for entry in applicable_newest_first(&record.past_abilities, selected) {
            for past in &entry.values {
                match &past.ability {
                    Some(name) => {
                        by_slot.insert(past.slot, (name.clone(), past.is_hidden));
                    }
                    None => {
                        by_slot.remove(&past.slot);
                    }
                }
            }
        }
    }

    let show_hidden = generation.map_or(true, |g| g >= GenerationRank::HIDDEN_ABILITIES_INTRODUCED);
    by_slot
        .into_iter()
        .map(|(slot, (name, is_hidden))| ProjectedAbility {
            slot,
            name,
            is_hidden,
            show_hidden_badge: is_hidden && show_hidden,
        })
        .collect()
}

pub fn project_stats(
    record: &AttributeRecord,
    generation: Option<GenerationRank>,
) -> Vec<StatValue> {
    let Some(selected) = generation else {
        return record.stats.clone();
    };
    if record.past_stats.is_empty() {
        return record.stats.clone();
    }

    let mut by_name: Vec<StatValue> = record.stats.clone();
    let mut has_special = false;
    for entry in applicable_newest_first(&record.past_stats, selected) {
        for past in &entry.values {
            has_special |= past.name == "special";
            match by_name.iter_mut().find(|s| s.name == past.name) {
                Some(existing) => *existing = past.clone(),
                None => by_name.push(past.clone()),
            }
        }
    }
    if has_special {
        by_name.retain(|s| s.name != "special-attack" && s.name != "special-defense");
    }

    let mut ordered: Vec<StatValue> = STAT_ORDER
        .iter()
        .filter_map(|name| by_name.iter().find(|s| s.name == *name).cloned())
        .collect();
    ordered.extend(
        by_name
            .into_iter()
            .filter(|s| !STAT_ORDER.contains(&s.name.as_str())),
    );
    ordered
}

/// Applicable entries ordered so the boundary closest to the selection is applied last.
fn applicable_newest_first<T>(
    entries: &[PastEntry<T>],
    selected: GenerationRank,
) -> Vec<&PastEntry<T>> {
    let mut applicable: Vec<&PastEntry<T>> =
        entries.iter().filter(|e| e.applies_to(selected)).collect();
    applicable.sort_by(|a, b| b.generation.cmp(&a.generation));
    applicable
}
