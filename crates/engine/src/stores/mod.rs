//! In-memory state storage modules.
//!
//! Stores manage runtime state that doesn't belong in the durable cache:
//! - `DexStore` - the published dex view for the current selection

pub mod dex;

pub use dex::{DexState, DexStore};
