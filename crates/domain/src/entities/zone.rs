//! Zone entity - A navigable place in the catalog
//!
//! Zones connect to each other by id for display only; nothing traverses
//! the graph. A zone's creatures live either in a direct roster or in
//! nested areas/sub-zones, never both.

use serde::{Deserialize, Serialize};

use crate::ids::{LocationAreaId, ZoneId};
use crate::value_objects::CaptureMethod;

/// One creature's appearance conditions within a zone.
///
/// Simple data struct with public fields (no invariants to protect).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    /// Directory key of the creature
    pub name: String,
    /// Editions the creature appears in
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(default)]
    pub method: Option<CaptureMethod>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub level_range: Option<String>,
    #[serde(default)]
    pub encounter_rate: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub is_starter: bool,
    /// Version exclusive marker
    #[serde(default)]
    pub exclusive: bool,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            versions: Vec::new(),
            method: None,
            rarity: None,
            level_range: None,
            encounter_rate: None,
            note: None,
            is_starter: false,
            exclusive: false,
        }
    }

    pub fn with_versions(mut self, versions: &[&str]) -> Self {
        self.versions = versions.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_method(mut self, method: CaptureMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn starter(mut self) -> Self {
        self.is_starter = true;
        self
    }

    /// Capture method, defaulting to walking when none is configured.
    pub fn method_or_default(&self) -> CaptureMethod {
        self.method.clone().unwrap_or_default()
    }
}

/// A nested area or sub-zone with its own roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "pokemonList", default)]
    pub roster: Vec<RosterEntry>,
    /// Location area holding this floor's encounter data
    #[serde(default)]
    pub location_area_id: Option<LocationAreaId>,
}

/// Where a zone's creatures are configured.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ZoneContent {
    /// No creatures (towns, mostly)
    #[default]
    Empty,
    Roster(Vec<RosterEntry>),
    Areas(Vec<Area>),
    SubZones(Vec<Area>),
}

/// A validated catalog zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub description: String,
    pub zone_type: String,
    pub connections: Vec<ZoneId>,
    pub image: Option<String>,
    pub is_town: bool,
    pub location_area_id: Option<LocationAreaId>,
    pub content: ZoneContent,
}

impl Zone {
    pub fn new(id: impl Into<ZoneId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            zone_type: String::new(),
            connections: Vec::new(),
            image: None,
            is_town: false,
            location_area_id: None,
            content: ZoneContent::Empty,
        }
    }

    pub fn with_type(mut self, zone_type: impl Into<String>) -> Self {
        self.zone_type = zone_type.into();
        self
    }

    pub fn with_content(mut self, content: ZoneContent) -> Self {
        self.content = content;
        self
    }

    pub fn with_location_area(mut self, id: LocationAreaId) -> Self {
        self.location_area_id = Some(id);
        self
    }

    /// Every roster entry of the zone, across nested areas in catalog order.
    pub fn roster(&self) -> Vec<&RosterEntry> {
        match &self.content {
            ZoneContent::Empty => Vec::new(),
            ZoneContent::Roster(entries) => entries.iter().collect(),
            ZoneContent::Areas(areas) | ZoneContent::SubZones(areas) => {
                areas.iter().flat_map(|a| a.roster.iter()).collect()
            }
        }
    }

    /// Number of roster entries across the whole zone.
    pub fn roster_len(&self) -> usize {
        match &self.content {
            ZoneContent::Empty => 0,
            ZoneContent::Roster(entries) => entries.len(),
            ZoneContent::Areas(areas) | ZoneContent::SubZones(areas) => {
                areas.iter().map(|a| a.roster.len()).sum()
            }
        }
    }

    /// Whether the zone shows a creature section at all.
    pub fn shows_creatures(&self) -> bool {
        !self.is_town && self.roster_len() > 0
    }

    /// Location areas to fetch encounters from: the zone's own first, then
    /// each nested area's, without repeats.
    pub fn location_areas(&self) -> Vec<&LocationAreaId> {
        let mut ids: Vec<&LocationAreaId> = Vec::new();
        let nested = self.nested_groups().iter().filter_map(|a| a.location_area_id.as_ref());
        for id in self.location_area_id.iter().chain(nested) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// Nested areas or sub-zones, if the zone has any.
    pub fn nested_groups(&self) -> &[Area] {
        match &self.content {
            ZoneContent::Areas(areas) | ZoneContent::SubZones(areas) => areas,
            _ => &[],
        }
    }
}
