//! ZoneDex domain model.
//!
//! Pure types and functions: the zone catalog, creature records, the
//! encounter merge engine, version filtering and grouping by capture
//! method. Nothing here performs I/O.

pub mod catalog;
pub mod entities;
pub mod error;
pub mod fallback;
pub mod grouping;
pub mod ids;
pub mod value_objects;

pub use catalog::{
    CatalogDocument, CatalogIssue, ZoneCatalog, ZoneDocument, ALL_ZONE_TYPES, DEFAULT_TYPE_COLOR,
};

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    flatten_encounters, merge_encounters, merge_records, Area, BaseStat, CreatureAttributes,
    CreatureEncounters, CreatureRecord, EncounterRecord, EncounterSlot, MergedEncounter,
    RosterEntry, SpeciesDetail, VersionEncounters, Zone, ZoneContent, EXCLUDED_TYPE, GENDERLESS,
    MAX_CHANCE,
};

pub use error::DomainError;
pub use fallback::{fallback_for, FallbackAttributes};
pub use grouping::{group_by_method, MethodGroup};

// Re-export ID types
pub use ids::{LocationAreaId, ZoneId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    capitalize_first, filter_by_version, format_display_name, is_creature_key, CaptureMethod,
    SpriteUrls, Theme, VersionKey, DEFAULT_ANIMATED_SPRITE_BASE_URL, DEFAULT_SPRITE_BASE_URL,
    KNOWN_EDITIONS, PLACEHOLDER_SPRITE_URL, THEME_STORAGE_KEY,
};
