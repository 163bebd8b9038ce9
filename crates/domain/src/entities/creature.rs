//! Creature records - remote attributes merged with roster metadata.

use serde::{Deserialize, Serialize};

use crate::entities::RosterEntry;
use crate::fallback::FallbackAttributes;
use crate::value_objects::{format_display_name, CaptureMethod, SpriteUrls};

/// Type tag dropped from every record; it does not exist in the target
/// game's type system.
pub const EXCLUDED_TYPE: &str = "fairy";

/// One base stat as reported by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStat {
    pub name: String,
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
}

impl BaseStat {
    pub fn new(name: impl Into<String>, base_stat: u32) -> Self {
        Self {
            name: name.into(),
            base_stat,
            effort: 0,
        }
    }
}

/// Validated attributes from the primary attributes endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureAttributes {
    pub id: u32,
    /// Canonical hyphen-delimited name
    pub name: String,
    /// Link to the species record, when the directory supplied one
    pub species_url: Option<String>,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub base_experience: Option<u32>,
    /// Height in decimeters
    pub height_dm: u32,
    /// Weight in hectograms
    pub weight_hg: u32,
    pub stats: Vec<BaseStat>,
}

/// Display-ready creature: remote attributes unioned with a roster entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureRecord {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    pub sprite: String,
    pub animated_sprite: Option<String>,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub base_experience: Option<u32>,
    pub height_m: f32,
    pub weight_kg: f32,
    pub stats: Vec<BaseStat>,
    /// Static metadata from the zone's roster
    pub entry: RosterEntry,
    /// Set when live data could not be loaded and no fallback existed
    pub error: bool,
}

impl CreatureRecord {
    /// Build a record from live directory attributes.
    pub fn from_attributes(
        attributes: CreatureAttributes,
        entry: &RosterEntry,
        sprites: &SpriteUrls,
    ) -> Self {
        Self {
            id: attributes.id,
            display_name: format_display_name(&attributes.name),
            name: attributes.name,
            sprite: sprites.sprite(attributes.id),
            animated_sprite: Some(sprites.animated(attributes.id)),
            types: without_excluded_type(attributes.types),
            abilities: attributes.abilities,
            base_experience: attributes.base_experience,
            height_m: attributes.height_dm as f32 / 10.0,
            weight_kg: attributes.weight_hg as f32 / 10.0,
            stats: attributes.stats,
            entry: entry.clone(),
            error: false,
        }
    }

    /// Build a record from the static fallback table.
    pub fn from_fallback(
        fallback: &FallbackAttributes,
        entry: &RosterEntry,
        sprites: &SpriteUrls,
    ) -> Self {
        let (stat_name, stat_value) = fallback.placeholder_stat;
        Self {
            id: fallback.id,
            name: entry.name.clone(),
            display_name: format_display_name(&entry.name),
            sprite: sprites.sprite(fallback.id),
            animated_sprite: Some(sprites.animated(fallback.id)),
            types: without_excluded_type(fallback.types.iter().map(|t| t.to_string()).collect()),
            abilities: fallback.abilities.iter().map(|a| a.to_string()).collect(),
            base_experience: Some(fallback.base_experience),
            height_m: fallback.height_m,
            weight_kg: fallback.weight_kg,
            stats: vec![BaseStat::new(stat_name, stat_value)],
            entry: entry.clone(),
            error: false,
        }
    }

    /// Minimal record for a creature that could not be loaded at all.
    ///
    /// Keeps the roster metadata so the record still filters and groups.
    pub fn unavailable(entry: &RosterEntry, sprites: &SpriteUrls) -> Self {
        let display_name = if entry.name.trim().is_empty() {
            "Unknown".to_string()
        } else {
            entry.name.clone()
        };

        Self {
            id: 0,
            name: entry.name.clone(),
            display_name,
            sprite: sprites.placeholder().to_string(),
            animated_sprite: None,
            types: Vec::new(),
            abilities: Vec::new(),
            base_experience: None,
            height_m: 0.0,
            weight_kg: 0.0,
            stats: Vec::new(),
            entry: entry.clone(),
            error: true,
        }
    }

    /// Capture method used for grouping.
    pub fn method(&self) -> CaptureMethod {
        self.entry.method_or_default()
    }

    pub fn versions(&self) -> &[String] {
        &self.entry.versions
    }
}

fn without_excluded_type(types: Vec<String>) -> Vec<String> {
    types.into_iter().filter(|t| t != EXCLUDED_TYPE).collect()
}
