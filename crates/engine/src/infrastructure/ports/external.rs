//! External service port traits (creature directory, catalog source, local storage).

use async_trait::async_trait;
use zonedex_domain::{
    CatalogDocument, CreatureAttributes, CreatureEncounters, LocationAreaId, SpeciesDetail,
};

use super::error::{CatalogError, DirectoryError, StorageError};

// =============================================================================
// Creature Directory
// =============================================================================

/// Read-only access to the remote creature directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreatureDirectoryPort: Send + Sync {
    /// Primary attributes of a creature, by directory key.
    async fn fetch_creature(&self, name: &str) -> Result<CreatureAttributes, DirectoryError>;

    /// Check that a species link resolves. The body is not used.
    async fn check_species(&self, species_url: &str) -> Result<(), DirectoryError>;

    /// Species detail for the detail view, by directory key.
    async fn fetch_species(&self, name: &str) -> Result<SpeciesDetail, DirectoryError>;

    /// Encounter payload of a location area, validated on ingress.
    async fn fetch_location_encounters(
        &self,
        location_area: &LocationAreaId,
    ) -> Result<Vec<CreatureEncounters>, DirectoryError>;
}

// =============================================================================
// Catalog Source
// =============================================================================

/// Where the static zone catalog document comes from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<CatalogDocument, CatalogError>;
}

// =============================================================================
// Local Storage
// =============================================================================

/// String key-value preferences persisted between runs.
#[cfg_attr(test, mockall::automock)]
pub trait StoragePort: Send + Sync {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn load(&self, key: &str) -> Option<String>;
}
