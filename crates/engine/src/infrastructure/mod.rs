//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, plus the
//! two-tier resource cache built on top of them.

pub mod cache;
pub mod clock;
pub mod pokeapi;
pub mod ports;
pub mod resources;
pub mod store;
