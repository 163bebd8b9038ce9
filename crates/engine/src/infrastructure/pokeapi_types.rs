//! Type definitions for the PokeAPI JSON format.
//!
//! These types mirror the subset of the PokeAPI v2 schema the engine reads.
//! They are used for deserialization and then converted to domain types,
//! so domain code never sees a partially-shaped payload.

use serde::Deserialize;
use serde_json::Value;
use zonedex_domain::{
    BaseStat, CreatureAttributes, CreatureEncounters, EncounterSlot, SpeciesDetail,
    VersionEncounters,
};

/// A `{ name, url }` link as PokeAPI nests them everywhere.
#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

// =============================================================================
// /pokemon/{name}
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub species: Option<NamedResource>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

impl From<PokemonResponse> for CreatureAttributes {
    fn from(response: PokemonResponse) -> Self {
        Self {
            id: response.id,
            name: response.name,
            species_url: response.species.and_then(|s| s.url),
            types: response.types.into_iter().map(|t| t.type_.name).collect(),
            abilities: response
                .abilities
                .into_iter()
                .map(|a| a.ability.name)
                .collect(),
            base_experience: response.base_experience,
            height_dm: response.height,
            weight_hg: response.weight,
            stats: response
                .stats
                .into_iter()
                .map(|s| BaseStat {
                    name: s.stat.name,
                    base_stat: s.base_stat,
                    effort: s.effort,
                })
                .collect(),
        }
    }
}

// =============================================================================
// /pokemon-species/{name}
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SpeciesResponse {
    pub gender_rate: i8,
    pub capture_rate: u8,
    pub hatch_counter: u32,
}

impl From<SpeciesResponse> for SpeciesDetail {
    fn from(response: SpeciesResponse) -> Self {
        Self {
            gender_rate: response.gender_rate,
            capture_rate: response.capture_rate,
            hatch_counter: response.hatch_counter,
        }
    }
}

// =============================================================================
// /location-area/{id}
// =============================================================================

/// Location-area body. Only the encounter list is read, and it is kept as
/// raw JSON so malformed entries can be dropped one at a time.
#[derive(Debug, Deserialize)]
pub struct LocationAreaResponse {
    #[serde(default)]
    pub pokemon_encounters: Value,
}

#[derive(Debug, Deserialize)]
struct RawName {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPokemonEncounter {
    #[serde(default)]
    pokemon: Option<RawName>,
    #[serde(default)]
    version_details: Value,
}

#[derive(Debug, Deserialize)]
struct RawVersionDetail {
    #[serde(default)]
    version: Option<RawName>,
    #[serde(default)]
    encounter_details: Value,
}

#[derive(Debug, Deserialize)]
struct RawEncounterDetail {
    #[serde(default)]
    method: Option<RawName>,
    #[serde(default)]
    min_level: Option<u32>,
    #[serde(default)]
    max_level: Option<u32>,
    #[serde(default)]
    chance: Option<u32>,
}

fn name_of(raw: Option<RawName>) -> Option<String> {
    raw.and_then(|r| r.name).filter(|n| !n.is_empty())
}

fn array_items(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

impl LocationAreaResponse {
    /// Validate the encounter list.
    ///
    /// A missing or non-list payload yields no entries. Entries, editions
    /// and slots with missing or mistyped fields are dropped individually.
    pub fn into_encounters(self) -> Vec<CreatureEncounters> {
        if !self.pokemon_encounters.is_array() {
            tracing::debug!("Location area has no encounter list");
        }

        array_items(self.pokemon_encounters)
            .into_iter()
            .filter_map(|item| serde_json::from_value::<RawPokemonEncounter>(item).ok())
            .filter_map(|raw| {
                let creature = name_of(raw.pokemon)?;
                let versions = array_items(raw.version_details)
                    .into_iter()
                    .filter_map(|item| serde_json::from_value::<RawVersionDetail>(item).ok())
                    .filter_map(parse_version)
                    .collect();
                Some(CreatureEncounters { creature, versions })
            })
            .collect()
    }
}

fn parse_version(raw: RawVersionDetail) -> Option<VersionEncounters> {
    let version = name_of(raw.version)?;
    if !raw.encounter_details.is_array() {
        return None;
    }
    let slots = array_items(raw.encounter_details)
        .into_iter()
        .filter_map(|item| serde_json::from_value::<RawEncounterDetail>(item).ok())
        .filter_map(|detail| {
            EncounterSlot::from_parts(
                name_of(detail.method),
                detail.min_level,
                detail.max_level,
                detail.chance,
            )
        })
        .collect();
    Some(VersionEncounters { version, slots })
}
