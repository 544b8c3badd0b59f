//! Species (`pokemon-species/{name}`) records.

use serde::{Deserialize, Serialize};

use crate::resource::{is_english, ApiResource, FlavorText, NamedResource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub evolution_chain: Option<ApiResource>,
    #[serde(default)]
    pub evolves_from_species: Option<NamedResource>,
    #[serde(default)]
    pub varieties: Vec<Variety>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    #[serde(default)]
    pub capture_rate: Option<u32>,
    #[serde(default)]
    pub egg_groups: Vec<NamedResource>,
    #[serde(default)]
    pub hatch_counter: Option<u32>,
    /// Eighths female; -1 for genderless.
    #[serde(default)]
    pub gender_rate: Option<i32>,
    #[serde(default)]
    pub pokedex_numbers: Vec<PokedexNumber>,
    #[serde(default)]
    pub generation: Option<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variety {
    #[serde(default)]
    pub is_default: bool,
    pub pokemon: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexNumber {
    pub entry_number: u32,
    pub pokedex: NamedResource,
}

pub const NATIONAL_DEX: &str = "national";

/// How many English flavor entries to show when no version is selected.
pub const DEFAULT_FLAVOR_ENTRIES: usize = 3;

impl PokemonSpecies {
    pub fn variety_names(&self) -> Vec<&str> {
        self.varieties
            .iter()
            .map(|v| v.pokemon.name.as_str())
            .collect()
    }

    pub fn national_dex_number(&self) -> Option<u32> {
        self.pokedex_numbers
            .iter()
            .find(|p| p.pokedex.name == NATIONAL_DEX)
            .map(|p| p.entry_number)
    }

    /// English entries of the selected version, or the first few English
    /// entries when no version is selected. Form feeds become spaces.
    pub fn flavor_texts(&self, version: Option<&str>) -> Vec<String> {
        let english = self
            .flavor_text_entries
            .iter()
            .filter(|entry| is_english(&entry.language));
        let selected: Vec<&FlavorText> = match version {
            Some(version) => english
                .filter(|entry| entry.version.as_ref().is_some_and(|v| v.name == version))
                .collect(),
            None => english.take(DEFAULT_FLAVOR_ENTRIES).collect(),
        };
        selected
            .into_iter()
            .map(|entry| entry.flavor_text.replace(&['\u{c}', '\n'][..], " "))
            .collect()
    }
}
