//! Dexera Shared - wire-format records of the remote creature data graph
//!
//! This crate contains the serde shapes of every remote resource the engine
//! reads, plus conversions into `dexera-domain` inputs.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain crate
//! 2. **No business logic** - Pure data types and mapping
//! 3. **Lenient decoding** - optional fields default instead of failing

pub mod ability;
pub mod encounters;
pub mod evolution;
pub mod moves;
pub mod pokemon;
pub mod resource;
pub mod species;
pub mod version;

pub use ability::Ability;
pub use encounters::{location_encounters, LocationAreaEncounter};
pub use evolution::{ChainLink, EvolutionChain, EvolutionDetail};
pub use moves::{Machine, Move};
pub use pokemon::{Pokemon, PokemonForm};
pub use resource::{ApiResource, NamedResource, NamedResourceList};
pub use species::PokemonSpecies;
pub use version::{Version, VersionGroup};
