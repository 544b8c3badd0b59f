//! The reconciled read model handed to presentation.

use serde::Serialize;

use dexera_domain::{
    EncounterSummary, EvolutionNode, GroupedMoves, ProjectedAbility, StatValue, TypeMatchups,
    TypeSlot,
};
use dexera_shared::{Pokemon, PokemonSpecies};

use crate::use_cases::abilities::AbilityInfo;
use crate::use_cases::version::ResolvedVersion;

/// Everything shown for one subject + version selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DexView {
    /// The requested subject.
    pub subject: String,
    /// Name of the displayed record (the selected form).
    pub name: String,
    pub id: u32,
    /// `None` when no version was selected or it could not be resolved.
    pub version: Option<ResolvedVersion>,
    pub available_versions: Vec<String>,
    pub suggested_version: Option<String>,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<ProjectedAbility>,
    pub stats: Vec<StatValue>,
    pub ability_details: Vec<AbilityInfo>,
    pub available_forms: Vec<String>,
    pub selected_form: Option<String>,
    pub evolution: Vec<EvolutionNode>,
    pub moves: GroupedMoves,
    pub sprite: Option<String>,
    pub encounters: EncounterSummary,
    pub obtainable_pre_evolution: Option<String>,
    pub matchups: Option<TypeMatchups>,
    pub species: SpeciesInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesInfo {
    pub national_dex_number: Option<u32>,
    pub capture_rate: Option<u32>,
    pub egg_groups: Vec<String>,
    pub hatch_counter: Option<u32>,
    /// Eighths female; -1 for genderless.
    pub gender_rate: Option<i32>,
    pub flavor_texts: Vec<String>,
    pub height_m: Option<f64>,
    pub weight_kg: Option<f64>,
    pub held_items: Vec<String>,
    pub ev_yield: Vec<StatValue>,
}

impl SpeciesInfo {
    /// Species facts plus the physical data of the displayed record. A missing
    /// species record leaves the species fields empty.
    pub fn new(species: Option<&PokemonSpecies>, record: &Pokemon, version: Option<&str>) -> Self {
        let mut info = Self {
            height_m: record.height.map(|dm| f64::from(dm) / 10.0),
            weight_kg: record.weight.map(|hg| f64::from(hg) / 10.0),
            held_items: record.held_items.iter().map(|h| h.item.name.clone()).collect(),
            ev_yield: record
                .attribute_record()
                .stats
                .into_iter()
                .filter(|s| s.effort > 0)
                .collect(),
            ..Self::default()
        };

        if let Some(species) = species {
            info.national_dex_number = species.national_dex_number();
            info.capture_rate = species.capture_rate;
            info.egg_groups = species.egg_groups.iter().map(|g| g.name.clone()).collect();
            info.hatch_counter = species.hatch_counter;
            info.gender_rate = species.gender_rate;
            info.flavor_texts = species.flavor_texts(version);
        }
        info
    }
}
