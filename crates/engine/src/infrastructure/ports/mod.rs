//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The remote data source (could swap HTTP -> bundled dump)
//! - The durable cache tier (could swap SQLite -> anything key/value)
//! - Clock (for testing)

mod error;
mod external;
mod testing;

// =============================================================================
// Errors
// =============================================================================
pub use error::{SourceError, StoreError};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{DataSourcePort, DurableStorePort, ResourceKind, ResourceRef, StoredResource};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockDataSourcePort, MockDurableStorePort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;
