//! Use cases - pipeline stage orchestration.
//!
//! Each module is one stage of the dex pipeline. Stages fetch through the
//! shared `Resources` cache and check the request guard after suspending.

pub mod abilities;
pub mod availability;
pub mod dex;
pub mod encounters;
pub mod evolution;
pub mod forms;
pub mod moves;
pub mod name_index;
pub mod request;
pub mod version;

// Re-export main types
pub use abilities::{AbilityDescriptions, AbilityInfo};
pub use availability::EraAvailability;
pub use dex::{DexController, DexOutcome, DexPipeline, DexRequest, DexView, SpeciesInfo};
pub use encounters::EncounterLookup;
pub use evolution::EvolutionChainBuilder;
pub use forms::{FormResolver, ResolvedForms};
pub use moves::MoveAggregator;
pub use name_index::NameIndex;
pub use request::{RequestGuard, RequestSequence, Superseded};
pub use version::{ResolvedVersion, VersionResolver};
