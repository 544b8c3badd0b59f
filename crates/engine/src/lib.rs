//! Dexera Engine library.
//!
//! Async services that fetch the remote creature graph, cache it, and derive
//! era-accurate views for a selected game version.
//!
//! ## Structure
//!
//! - `infrastructure/` - Ports, adapters (HTTP source, SQLite/memory durable store) and the
//!   two-tier resource cache
//! - `use_cases/` - Pipeline stages and the dex controller
//! - `stores/` - Visible state published by the controller
//! - `config` - Environment configuration
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Test fixtures module for unit testing.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
pub use config::EngineConfig;
