//! Domain entities - Catalog zones, creature records and encounter data

mod creature;
mod encounter;
mod species;
mod zone;

pub use creature::{BaseStat, CreatureAttributes, CreatureRecord, EXCLUDED_TYPE};
pub use encounter::{
    flatten_encounters, merge_encounters, merge_records, CreatureEncounters, EncounterRecord,
    EncounterSlot, MergedEncounter, VersionEncounters, MAX_CHANCE,
};
pub use species::{SpeciesDetail, GENDERLESS};
pub use zone::{Area, RosterEntry, Zone, ZoneContent};
