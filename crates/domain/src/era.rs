//! Version, version-group and generation taxonomy.
//!
//! The remote data source exposes a strict three-level hierarchy:
//! a version (`"red"`) belongs to one version group (`"red-blue"`), which
//! belongs to one generation (`"generation-i"`). The static tables here give
//! the chronological ordering that the remote graph does not expose directly,
//! plus the short labels used for "source games" columns.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const GENERATION_NAMES: [&str; 9] = [
    "generation-i",
    "generation-ii",
    "generation-iii",
    "generation-iv",
    "generation-v",
    "generation-vi",
    "generation-vii",
    "generation-viii",
    "generation-ix",
];

/// Generation rank, 1 through 9. Ordered for "at or before" comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationRank(u8);

impl GenerationRank {
    /// Abilities did not exist before this generation.
    pub const ABILITIES_INTRODUCED: GenerationRank = GenerationRank(3);
    /// Hidden abilities are only meaningful from this generation on.
    pub const HIDDEN_ABILITIES_INTRODUCED: GenerationRank = GenerationRank(5);
    pub const FIRST: GenerationRank = GenerationRank(1);
    pub const LATEST: GenerationRank = GenerationRank(9);

    pub fn new(rank: u8) -> Result<Self, DomainError> {
        if (1..=9).contains(&rank) {
            Ok(Self(rank))
        } else {
            Err(DomainError::parse(format!("generation rank out of range: {rank}")))
        }
    }

    /// Look up a remote generation name such as `"generation-iv"`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        GENERATION_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|idx| Self(idx as u8 + 1))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        GENERATION_NAMES[usize::from(self.0 - 1)]
    }

    /// The generation immediately before this one, if any.
    pub fn previous(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }
}

impl fmt::Display for GenerationRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GenerationRank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DomainError::parse(format!("Unknown generation: {s}")))
    }
}

/// Chronological position of a version group across all generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionGroupRank(u16);

impl VersionGroupRank {
    pub fn value(self) -> u16 {
        self.0
    }
}

/// Static description of one version group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionGroupInfo {
    pub name: &'static str,
    pub generation: u8,
    pub abbreviation: &'static str,
    pub versions: &'static [&'static str],
}

/// Every version group in release order.
pub const VERSION_GROUPS: &[VersionGroupInfo] = &[
    vg("red-blue", 1, "R/B", &["red", "blue"]),
    vg("yellow", 1, "Y", &["yellow"]),
    vg("gold-silver", 2, "G/S", &["gold", "silver"]),
    vg("crystal", 2, "C", &["crystal"]),
    vg("ruby-sapphire", 3, "R/S", &["ruby", "sapphire"]),
    vg("emerald", 3, "E", &["emerald"]),
    vg("firered-leafgreen", 3, "FR/LG", &["firered", "leafgreen"]),
    vg("colosseum", 3, "Col", &["colosseum"]),
    vg("xd", 3, "XD", &["xd"]),
    vg("diamond-pearl", 4, "D/P", &["diamond", "pearl"]),
    vg("platinum", 4, "Pt", &["platinum"]),
    vg("heartgold-soulsilver", 4, "HG/SS", &["heartgold", "soulsilver"]),
    vg("black-white", 5, "B/W", &["black", "white"]),
    vg("black-2-white-2", 5, "B2/W2", &["black-2", "white-2"]),
    vg("x-y", 6, "X/Y", &["x", "y"]),
    vg("omega-ruby-alpha-sapphire", 6, "OR/AS", &["omega-ruby", "alpha-sapphire"]),
    vg("sun-moon", 7, "S/M", &["sun", "moon"]),
    vg("ultra-sun-ultra-moon", 7, "US/UM", &["ultra-sun", "ultra-moon"]),
    vg(
        "lets-go-pikachu-lets-go-eevee",
        7,
        "LGPE",
        &["lets-go-pikachu", "lets-go-eevee"],
    ),
    vg("sword-shield", 8, "Sw/Sh", &["sword", "shield"]),
    vg("the-isle-of-armor", 8, "IoA", &[]),
    vg("the-crown-tundra", 8, "CT", &[]),
    vg(
        "brilliant-diamond-and-shining-pearl",
        8,
        "BD/SP",
        &["brilliant-diamond", "shining-pearl"],
    ),
    vg("legends-arceus", 8, "LA", &["legends-arceus"]),
    vg("scarlet-violet", 9, "S/V", &["scarlet", "violet"]),
    vg("the-teal-mask", 9, "TM", &[]),
    vg("the-indigo-disk", 9, "ID", &[]),
];

const fn vg(
    name: &'static str,
    generation: u8,
    abbreviation: &'static str,
    versions: &'static [&'static str],
) -> VersionGroupInfo {
    VersionGroupInfo {
        name,
        generation,
        abbreviation,
        versions,
    }
}

/// Display names for individual versions, in release order.
const VERSION_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("red", "Red"),
    ("blue", "Blue"),
    ("yellow", "Yellow"),
    ("gold", "Gold"),
    ("silver", "Silver"),
    ("crystal", "Crystal"),
    ("ruby", "Ruby"),
    ("sapphire", "Sapphire"),
    ("emerald", "Emerald"),
    ("firered", "FireRed"),
    ("leafgreen", "LeafGreen"),
    ("colosseum", "Colosseum"),
    ("xd", "XD"),
    ("diamond", "Diamond"),
    ("pearl", "Pearl"),
    ("platinum", "Platinum"),
    ("heartgold", "HeartGold"),
    ("soulsilver", "SoulSilver"),
    ("black", "Black"),
    ("white", "White"),
    ("black-2", "Black 2"),
    ("white-2", "White 2"),
    ("x", "X"),
    ("y", "Y"),
    ("omega-ruby", "Omega Ruby"),
    ("alpha-sapphire", "Alpha Sapphire"),
    ("sun", "Sun"),
    ("moon", "Moon"),
    ("ultra-sun", "Ultra Sun"),
    ("ultra-moon", "Ultra Moon"),
    ("lets-go-pikachu", "Let's Go Pikachu"),
    ("lets-go-eevee", "Let's Go Eevee"),
    ("sword", "Sword"),
    ("shield", "Shield"),
    ("brilliant-diamond", "Brilliant Diamond"),
    ("shining-pearl", "Shining Pearl"),
    ("legends-arceus", "Legends: Arceus"),
    ("scarlet", "Scarlet"),
    ("violet", "Violet"),
];

pub fn version_group_info(name: &str) -> Option<&'static VersionGroupInfo> {
    VERSION_GROUPS.iter().find(|info| info.name == name)
}

/// Chronological rank of a version group, `None` for groups the table does not know.
pub fn version_group_rank(name: &str) -> Option<VersionGroupRank> {
    VERSION_GROUPS
        .iter()
        .position(|info| info.name == name)
        .map(|idx| VersionGroupRank(idx as u16))
}

/// Generation that owns a version group.
pub fn generation_of_version_group(name: &str) -> Option<GenerationRank> {
    version_group_info(name).map(|info| GenerationRank(info.generation))
}

/// Version group a single version belongs to.
pub fn version_group_of_version(version: &str) -> Option<&'static VersionGroupInfo> {
    VERSION_GROUPS
        .iter()
        .find(|info| info.versions.contains(&version))
}

/// Version groups belonging to a generation, in release order.
pub fn version_groups_in(generation: GenerationRank) -> Vec<&'static str> {
    VERSION_GROUPS
        .iter()
        .filter(|info| info.generation == generation.value())
        .map(|info| info.name)
        .collect()
}

pub fn version_display_name(version: &str) -> Option<&'static str> {
    VERSION_DISPLAY_NAMES
        .iter()
        .find(|(name, _)| *name == version)
        .map(|(_, display)| *display)
}

/// Release-order position of a version, used to sort version pickers.
pub fn version_order(version: &str) -> Option<usize> {
    VERSION_DISPLAY_NAMES
        .iter()
        .position(|(name, _)| *name == version)
}

/// The era a player selected: a version, its version group and generation,
/// and every version group in that generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EraScope {
    version: String,
    version_group: String,
    generation: GenerationRank,
    generation_groups: Vec<String>,
}

impl EraScope {
    pub fn new(
        version: impl Into<String>,
        version_group: impl Into<String>,
        generation: GenerationRank,
    ) -> Self {
        let version_group = version_group.into();
        let mut generation_groups: Vec<String> = version_groups_in(generation)
            .into_iter()
            .map(String::from)
            .collect();
        // Groups the table does not know still count for their own generation.
        if !generation_groups.contains(&version_group) {
            generation_groups.push(version_group.clone());
        }
        Self {
            version: version.into(),
            version_group,
            generation,
            generation_groups,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn version_group(&self) -> &str {
        &self.version_group
    }

    pub fn generation(&self) -> GenerationRank {
        self.generation
    }

    pub fn generation_groups(&self) -> &[String] {
        &self.generation_groups
    }

    pub fn includes_group(&self, version_group: &str) -> bool {
        self.generation_groups.iter().any(|g| g == version_group)
    }

    pub fn version_group_rank(&self) -> Option<VersionGroupRank> {
        version_group_rank(&self.version_group)
    }

    /// "All" when every group of the generation contributed, otherwise the
    /// abbreviations of the contributing groups in release order.
    pub fn source_games_label(&self, contributing: &BTreeSet<String>) -> String {
        if self
            .generation_groups
            .iter()
            .all(|group| contributing.contains(group))
        {
            return "All".to_string();
        }

        let mut groups: Vec<&String> = contributing
            .iter()
            .filter(|group| self.includes_group(group))
            .collect();
        groups.sort_by_key(|group| (version_group_rank(group), group.as_str()));
        groups
            .into_iter()
            .map(|group| {
                version_group_info(group)
                    .map(|info| info.abbreviation.to_string())
                    .unwrap_or_else(|| group.clone())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
