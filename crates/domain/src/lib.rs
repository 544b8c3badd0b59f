//! Era semantics for creature data: which attributes, forms, evolutions and
//! moves applied in a given game version.
//!
//! Everything here is pure and synchronous. Fetching and caching live in
//! `dexera-engine`; wire formats live in `dexera-shared`.

pub mod attributes;
pub mod availability;
pub mod common;
pub mod encounters;
pub mod era;
pub mod error;
pub mod evolution;
pub mod forms;
pub mod moves;
pub mod sprites;
pub mod type_chart;

pub use attributes::{
    project, AbilitySlot, AttributeRecord, PastAbilitySlot, PastEntry, ProjectedAbility,
    ProjectedAttributes, StatValue, TypeSlot,
};
pub use availability::{available_versions, suggest_version, AvailabilityEvidence};
pub use encounters::{
    has_encounters_in, summarize, EncounterDetail, EncounterSummary, LocationEncounters,
    LocationSummary, MethodRate, VersionEncounters,
};
pub use era::{EraScope, GenerationRank, VersionGroupRank};
pub use error::DomainError;
pub use evolution::{
    build_forest, trigger_text, EvolutionCondition, EvolutionEdge, EvolutionNode,
    RawEvolutionNode,
};
pub use forms::{base_prefix, candidate_forms, select_form};
pub use moves::{
    group_learnset, select_machine, GroupedMoves, LearnDetail, LearnMethod, LearnRecord,
    LearnedMove, MachineLabel, MachineRef, MoveDetails, MoveEntry, PastMoveValues,
};
pub use sprites::SpriteSheet;
pub use type_chart::{combined_matchups, TypeMatchups};
