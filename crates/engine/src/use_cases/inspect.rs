//! Creature detail use case.

use std::sync::Arc;

use zonedex_domain::{
    filter_by_version, merge_encounters, CreatureRecord, MergedEncounter, SpeciesDetail,
};

use super::session::Session;
use super::zone::ZoneError;
use crate::infrastructure::ports::CreatureDirectoryPort;

/// Everything the detail view shows for one creature.
#[derive(Debug, Clone)]
pub struct CreatureDetail {
    pub record: CreatureRecord,
    /// One row per (edition, method); empty means "no encounter data"
    pub encounters: Vec<MergedEncounter>,
    pub species: SpeciesDetail,
}

/// Open the detail view of a creature in the current zone.
pub struct InspectCreature {
    directory: Arc<dyn CreatureDirectoryPort>,
}

impl InspectCreature {
    pub fn new(directory: Arc<dyn CreatureDirectoryPort>) -> Self {
        Self { directory }
    }

    /// Merge the zone's encounter payload for `creature` and fetch its
    /// species detail. A failed species lookup shows placeholder values.
    pub async fn execute(
        &self,
        session: &Session,
        creature: &str,
    ) -> Result<CreatureDetail, ZoneError> {
        let state = session.snapshot().await;
        let zone = state.current_zone.ok_or(ZoneError::NoZoneOpen)?;

        let record = filter_by_version(state.creatures, state.version)
            .into_iter()
            .find(|r| r.name == creature || r.entry.name == creature)
            .ok_or_else(|| ZoneError::CreatureNotInZone {
                zone: zone.clone(),
                creature: creature.to_string(),
            })?;

        let encounters = merge_encounters(&state.encounters, &record.name);
        if encounters.is_empty() {
            tracing::debug!(zone_id = %zone, creature = %record.name, "No encounter data");
        }

        let species = match self.directory.fetch_species(&record.name).await {
            Ok(species) => species,
            Err(e) => {
                tracing::warn!(creature = %record.name, error = %e, "Species lookup failed");
                SpeciesDetail::unknown()
            }
        };

        Ok(CreatureDetail {
            record,
            encounters,
            species,
        })
    }
}
