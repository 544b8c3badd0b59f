//! Common utility functions shared across the dexera crates.
//!
//! Pure functions only: no side effects, no I/O.

pub mod string;

pub use string::{humanize, normalize_key, some_if_not_empty, StringExt};
