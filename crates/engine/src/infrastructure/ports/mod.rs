//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The remote creature directory (could swap PokeAPI -> a local mirror)
//! - The zone catalog source (file today)
//! - Local preference storage

mod error;
mod external;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{CatalogSource, CreatureDirectoryPort, StoragePort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockCatalogSource, MockCreatureDirectoryPort, MockStoragePort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{CatalogError, DirectoryError, StorageError};
