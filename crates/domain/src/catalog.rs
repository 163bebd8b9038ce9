//! Static zone catalog.
//!
//! `CatalogDocument` mirrors the JSON document as written by hand;
//! `ZoneCatalog` is the validated, read-only form the rest of the system
//! works with. `CatalogDocument::check` reports problems without failing
//! so tooling can list every issue at once.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Deserialize;

use crate::entities::{Area, RosterEntry, Zone, ZoneContent};
use crate::error::DomainError;
use crate::ids::{LocationAreaId, ZoneId};
use crate::value_objects::{is_creature_key, KNOWN_EDITIONS};

/// Colour used for types the catalog has no colour for.
pub const DEFAULT_TYPE_COLOR: &str = "#A8A878";

/// Filter value meaning "every zone type".
pub const ALL_ZONE_TYPES: &str = "all";

// =============================================================================
// Document (as stored)
// =============================================================================

/// Root of the catalog JSON document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub zones_data: BTreeMap<String, ZoneDocument>,
    #[serde(default)]
    pub type_colors: BTreeMap<String, String>,
    #[serde(default)]
    pub version_map: BTreeMap<String, String>,
}

/// A zone as written in the catalog document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDocument {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub zone_type: String,
    #[serde(default)]
    pub connections: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_town: bool,
    #[serde(default)]
    pub location_area_id: Option<LocationAreaId>,
    #[serde(default)]
    pub pokemon_list: Option<Vec<RosterEntry>>,
    #[serde(default)]
    pub areas: Option<Vec<Area>>,
    #[serde(default)]
    pub sub_zones: Option<Vec<Area>>,
}

impl ZoneDocument {
    fn into_zone(self, id: ZoneId) -> Result<Zone, DomainError> {
        let content = match (self.pokemon_list, self.areas, self.sub_zones) {
            (None, None, None) => ZoneContent::Empty,
            (Some(roster), None, None) => ZoneContent::Roster(roster),
            (None, Some(areas), None) => ZoneContent::Areas(areas),
            (None, None, Some(sub_zones)) => ZoneContent::SubZones(sub_zones),
            _ => {
                return Err(DomainError::validation(format!(
                    "zone '{id}' mixes a roster with areas or sub-zones"
                )))
            }
        };

        Ok(Zone {
            id,
            name: self.name,
            description: self.description,
            zone_type: self.zone_type,
            connections: self.connections.into_iter().map(ZoneId::from).collect(),
            image: self.image,
            is_town: self.is_town,
            location_area_id: self.location_area_id,
            content,
        })
    }

    fn content_kinds(&self) -> usize {
        [
            self.pokemon_list.is_some(),
            self.areas.is_some(),
            self.sub_zones.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    fn rosters(&self) -> Vec<&[RosterEntry]> {
        let mut rosters: Vec<&[RosterEntry]> = Vec::new();
        if let Some(list) = &self.pokemon_list {
            rosters.push(list);
        }
        for area in self.areas.iter().chain(self.sub_zones.iter()).flatten() {
            rosters.push(&area.roster);
        }
        rosters
    }
}

// =============================================================================
// Validation
// =============================================================================

/// A problem found while checking a catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// A connection names a zone the catalog does not contain
    UnknownConnection { zone: String, target: String },
    /// More than one of roster, areas and sub-zones is present
    ConflictingContent { zone: String },
    /// A roster (or area roster) with no entries
    EmptyRoster { zone: String },
    /// A roster entry lists an edition outside the known set
    UnknownEdition {
        zone: String,
        creature: String,
        version: String,
    },
    /// A creature name that cannot be used as a directory key
    InvalidCreatureKey { zone: String, name: String },
}

impl CatalogIssue {
    /// Whether this issue prevents the catalog from loading.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ConflictingContent { .. })
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownConnection { zone, target } => {
                write!(f, "{zone}: connection to unknown zone '{target}'")
            }
            Self::ConflictingContent { zone } => {
                write!(f, "{zone}: roster, areas and sub-zones are mutually exclusive")
            }
            Self::EmptyRoster { zone } => write!(f, "{zone}: empty roster"),
            Self::UnknownEdition {
                zone,
                creature,
                version,
            } => write!(f, "{zone}: {creature} lists unknown edition '{version}'"),
            Self::InvalidCreatureKey { zone, name } => {
                write!(f, "{zone}: '{name}' is not a valid creature key")
            }
        }
    }
}

impl CatalogDocument {
    /// Check the document for structural and content problems.
    pub fn check(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        for (id, zone) in &self.zones_data {
            for target in &zone.connections {
                if !self.zones_data.contains_key(target) {
                    issues.push(CatalogIssue::UnknownConnection {
                        zone: id.clone(),
                        target: target.clone(),
                    });
                }
            }

            if zone.content_kinds() > 1 {
                issues.push(CatalogIssue::ConflictingContent { zone: id.clone() });
            }

            for roster in zone.rosters() {
                if roster.is_empty() {
                    issues.push(CatalogIssue::EmptyRoster { zone: id.clone() });
                }
                for entry in roster {
                    if !is_creature_key(&entry.name) {
                        issues.push(CatalogIssue::InvalidCreatureKey {
                            zone: id.clone(),
                            name: entry.name.clone(),
                        });
                    }
                    for version in &entry.versions {
                        if !KNOWN_EDITIONS.contains(&version.as_str()) {
                            issues.push(CatalogIssue::UnknownEdition {
                                zone: id.clone(),
                                creature: entry.name.clone(),
                                version: version.clone(),
                            });
                        }
                    }
                }
            }
        }

        issues
    }
}

// =============================================================================
// Catalog (validated)
// =============================================================================

/// The validated, read-only zone catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneCatalog {
    zones: BTreeMap<ZoneId, Zone>,
    type_colors: BTreeMap<String, String>,
    version_map: BTreeMap<String, String>,
}

impl ZoneCatalog {
    /// An empty catalog, used when loading failed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate a document into a catalog.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a zone mixes a direct roster with
    /// areas or sub-zones.
    pub fn from_document(document: CatalogDocument) -> Result<Self, DomainError> {
        let zones = document
            .zones_data
            .into_iter()
            .map(|(id, zone)| {
                let id = ZoneId::from(id);
                zone.into_zone(id.clone()).map(|zone| (id, zone))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(Self {
            zones,
            type_colors: document.type_colors,
            version_map: document.version_map,
        })
    }

    /// Build a catalog directly from zones (tests and fixtures).
    pub fn from_zones(zones: impl IntoIterator<Item = Zone>) -> Self {
        Self {
            zones: zones.into_iter().map(|z| (z.id.clone(), z)).collect(),
            ..Self::default()
        }
    }

    pub fn with_type_color(mut self, type_name: &str, color: &str) -> Self {
        self.type_colors
            .insert(type_name.to_string(), color.to_string());
        self
    }

    pub fn get(&self, id: &ZoneId) -> Option<&Zone> {
        self.zones.get(id)
    }

    /// Look a zone up, reporting a not-found error for unknown ids.
    pub fn zone(&self, id: &ZoneId) -> Result<&Zone, DomainError> {
        self.get(id)
            .ok_or_else(|| DomainError::not_found("Zone", id.as_str()))
    }

    /// All zones, ordered by id.
    pub fn zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.values()
    }

    /// Zones whose type tag equals `zone_type`; `"all"` keeps every zone.
    pub fn zones_of_type<'a>(&'a self, zone_type: &'a str) -> impl Iterator<Item = &'a Zone> + 'a {
        self.zones
            .values()
            .filter(move |zone| zone_type == ALL_ZONE_TYPES || zone.zone_type == zone_type)
    }

    /// Distinct zone type tags, sorted.
    pub fn zone_types(&self) -> Vec<&str> {
        self.zones
            .values()
            .map(|z| z.zone_type.as_str())
            .filter(|t| !t.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Display colour of an elemental type.
    pub fn type_color(&self, type_name: &str) -> &str {
        self.type_colors
            .get(type_name)
            .map(String::as_str)
            .unwrap_or(DEFAULT_TYPE_COLOR)
    }

    /// Display label of an edition name, falling back to the name itself.
    pub fn version_label<'a>(&'a self, version: &'a str) -> &'a str {
        self.version_map
            .get(version)
            .map(String::as_str)
            .unwrap_or(version)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
