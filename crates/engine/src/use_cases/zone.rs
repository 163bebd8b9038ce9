//! Zone navigation use cases.

use std::sync::Arc;

use futures_util::future::join_all;
use zonedex_domain::{
    filter_by_version, group_by_method, CreatureEncounters, MethodGroup, VersionKey, Zone,
    ZoneCatalog, ZoneId,
};

use super::creatures::AggregateCreatures;
use super::session::Session;
use crate::infrastructure::ports::CreatureDirectoryPort;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZoneError {
    #[error("Zone not found: {0}")]
    NotFound(ZoneId),
    #[error("No zone is open")]
    NoZoneOpen,
    #[error("{creature} is not listed in {zone} for this version")]
    CreatureNotInZone { zone: ZoneId, creature: String },
    /// A newer navigation started before this one finished.
    #[error("Navigation to {0} was superseded")]
    Superseded(ZoneId),
}

// =============================================================================
// DTOs (Use Case Result Types)
// =============================================================================

/// A zone ready for display.
#[derive(Debug, Clone)]
pub struct ZoneView {
    pub zone: Zone,
    pub version: VersionKey,
    /// Filtered records grouped by capture method. Empty for towns and
    /// zones without creatures, and when nothing matches the version.
    pub groups: Vec<MethodGroup>,
}

impl ZoneView {
    pub fn creature_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }
}

// =============================================================================
// Use Cases
// =============================================================================

/// Open a zone: aggregate its roster and fetch its encounter payload.
pub struct OpenZone {
    catalog: Arc<ZoneCatalog>,
    creatures: Arc<AggregateCreatures>,
    directory: Arc<dyn CreatureDirectoryPort>,
}

impl OpenZone {
    pub fn new(
        catalog: Arc<ZoneCatalog>,
        creatures: Arc<AggregateCreatures>,
        directory: Arc<dyn CreatureDirectoryPort>,
    ) -> Self {
        Self {
            catalog,
            creatures,
            directory,
        }
    }

    /// Execute the open zone use case.
    ///
    /// # Returns
    /// * `Ok(ZoneView)` - The zone with its filtered, grouped creatures
    /// * `Err(ZoneError::NotFound)` - Unknown zone id; the session is left untouched
    /// * `Err(ZoneError::Superseded)` - Another navigation started meanwhile
    pub async fn execute(
        &self,
        session: &Session,
        zone_id: &ZoneId,
        version: VersionKey,
    ) -> Result<ZoneView, ZoneError> {
        let zone = self
            .catalog
            .zone(zone_id)
            .cloned()
            .map_err(|_| ZoneError::NotFound(zone_id.clone()))?;

        let token = session.begin_navigation(zone.id.clone(), version).await;
        tracing::info!(zone_id = %zone.id, version = %version, "Opening zone");

        let (records, encounters) = if zone.shows_creatures() {
            tokio::join!(
                self.creatures.execute(zone.roster()),
                self.load_encounters(&zone)
            )
        } else {
            (Vec::new(), Vec::new())
        };

        if !session.commit(token, encounters, records.clone()).await {
            return Err(ZoneError::Superseded(zone.id));
        }

        let groups = group_by_method(filter_by_version(records, version));
        Ok(ZoneView {
            zone,
            version,
            groups,
        })
    }

    /// Encounter payloads of every location area the zone covers, in order.
    /// A failed area contributes nothing.
    async fn load_encounters(&self, zone: &Zone) -> Vec<CreatureEncounters> {
        let location_areas = zone.location_areas();
        let fetches = location_areas
            .iter()
            .map(|id| self.directory.fetch_location_encounters(*id));

        join_all(fetches)
            .await
            .into_iter()
            .zip(location_areas)
            .flat_map(|(result, location_area)| match result {
                Ok(encounters) => encounters,
                Err(e) => {
                    tracing::warn!(
                        zone_id = %zone.id,
                        location_area = %location_area,
                        error = %e,
                        "Encounter lookup failed, treating area as having no encounter data"
                    );
                    Vec::new()
                }
            })
            .collect()
    }
}

/// Change the version filter, re-aggregating the open zone.
pub struct SetVersion {
    open_zone: Arc<OpenZone>,
}

impl SetVersion {
    pub fn new(open_zone: Arc<OpenZone>) -> Self {
        Self { open_zone }
    }

    /// Returns the refreshed view, or `None` when no zone is open.
    pub async fn execute(
        &self,
        session: &Session,
        version: VersionKey,
    ) -> Result<Option<ZoneView>, ZoneError> {
        match session.current_zone().await {
            Some(zone_id) => self
                .open_zone
                .execute(session, &zone_id, version)
                .await
                .map(Some),
            None => {
                session.set_version(version).await;
                Ok(None)
            }
        }
    }
}

/// List catalog zones for the overview.
pub struct ListZones {
    catalog: Arc<ZoneCatalog>,
}

impl ListZones {
    pub fn new(catalog: Arc<ZoneCatalog>) -> Self {
        Self { catalog }
    }

    /// Zones of `zone_type` (`"all"` for every zone), ordered by id.
    pub fn execute(&self, zone_type: &str) -> Vec<Zone> {
        self.catalog.zones_of_type(zone_type).cloned().collect()
    }
}

/// Leave the open zone and return to the overview.
pub struct ReturnToOverview;

impl ReturnToOverview {
    pub async fn execute(&self, session: &Session) {
        session.reset().await;
    }
}

/// Container for zone use cases.
pub struct ZoneUseCases {
    pub open: Arc<OpenZone>,
    pub set_version: Arc<SetVersion>,
    pub list: Arc<ListZones>,
    pub return_to_overview: Arc<ReturnToOverview>,
}

impl ZoneUseCases {
    pub fn new(
        open: Arc<OpenZone>,
        set_version: Arc<SetVersion>,
        list: Arc<ListZones>,
        return_to_overview: Arc<ReturnToOverview>,
    ) -> Self {
        Self {
            open,
            set_version,
            list,
            return_to_overview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{DirectoryError, MockCreatureDirectoryPort};
    use zonedex_domain::{
        Area, BaseStat, CaptureMethod, CreatureAttributes, EncounterSlot, LocationAreaId,
        RosterEntry, SpeciesDetail, SpriteUrls, VersionEncounters, ZoneContent,
    };

    fn attributes(id: u32, name: &str) -> CreatureAttributes {
        CreatureAttributes {
            id,
            name: name.to_string(),
            species_url: None,
            types: vec!["water".to_string()],
            abilities: Vec::new(),
            base_experience: None,
            height_dm: 6,
            weight_hg: 95,
            stats: vec![BaseStat::new("hp", 40)],
        }
    }

    fn route_103() -> Zone {
        Zone::new("route-103", "Route 103")
            .with_type("route")
            .with_location_area(LocationAreaId::new("394"))
            .with_content(ZoneContent::Roster(vec![
                RosterEntry::new("wingull")
                    .with_versions(&["ruby", "sapphire"])
                    .with_method(CaptureMethod::Surf),
                RosterEntry::new("zigzagoon").with_versions(&["ruby", "sapphire", "emerald"]),
                RosterEntry::new("poochyena")
                    .with_versions(&["emerald"])
                    .with_method(CaptureMethod::Walk),
            ]))
    }

    fn catalog() -> Arc<ZoneCatalog> {
        let mut town = Zone::new("oldale-town", "Oldale Town").with_type("town");
        town.is_town = true;
        let cave = Zone::new("granite-cave", "Granite Cave")
            .with_type("cave")
            .with_location_area(LocationAreaId::new("granite-cave-1f"))
            .with_content(ZoneContent::Areas(vec![
                Area {
                    name: "1F".to_string(),
                    description: None,
                    roster: vec![RosterEntry::new("zubat").with_versions(&["ruby"])],
                    location_area_id: Some(LocationAreaId::new("granite-cave-1f")),
                },
                Area {
                    name: "B1F".to_string(),
                    description: None,
                    roster: vec![RosterEntry::new("makuhita").with_versions(&["sapphire"])],
                    location_area_id: Some(LocationAreaId::new("granite-cave-b1f")),
                },
            ]));
        Arc::new(ZoneCatalog::from_zones([route_103(), town, cave]))
    }

    fn open_zone(directory: MockCreatureDirectoryPort) -> Arc<OpenZone> {
        let directory: Arc<dyn CreatureDirectoryPort> = Arc::new(directory);
        let creatures = Arc::new(AggregateCreatures::new(
            directory.clone(),
            SpriteUrls::default(),
        ));
        Arc::new(OpenZone::new(catalog(), creatures, directory))
    }

    fn live_directory() -> MockCreatureDirectoryPort {
        let mut directory = MockCreatureDirectoryPort::new();
        directory.expect_fetch_creature().returning(|name| match name {
            "wingull" => Ok(attributes(278, "wingull")),
            "zigzagoon" => Ok(attributes(263, "zigzagoon")),
            "poochyena" => Ok(attributes(261, "poochyena")),
            "zubat" => Ok(attributes(41, "zubat")),
            "makuhita" => Ok(attributes(296, "makuhita")),
            other => Err(DirectoryError::not_found(other, 404)),
        });
        directory
    }

    fn group_names(view: &ZoneView) -> Vec<(String, Vec<String>)> {
        view.groups
            .iter()
            .map(|g| {
                (
                    g.method.as_str().to_string(),
                    g.records.iter().map(|r| r.name.clone()).collect(),
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn opens_zone_with_grouped_creatures_and_encounters() {
        let mut directory = live_directory();
        directory
            .expect_fetch_location_encounters()
            .withf(|id| id.as_str() == "394")
            .times(1)
            .returning(|_| {
                Ok(vec![CreatureEncounters {
                    creature: "wingull".to_string(),
                    versions: vec![VersionEncounters {
                        version: "ruby".to_string(),
                        slots: vec![EncounterSlot {
                            method: "surf".to_string(),
                            min_level: 5,
                            max_level: 35,
                            chance: 60,
                        }],
                    }],
                }])
            });
        let session = Session::new();

        let view = open_zone(directory)
            .execute(&session, &ZoneId::from("route-103"), VersionKey::All)
            .await
            .expect("zone opens");

        assert_eq!(
            group_names(&view),
            vec![
                (
                    "walk".to_string(),
                    vec!["zigzagoon".to_string(), "poochyena".to_string()]
                ),
                ("surf".to_string(), vec!["wingull".to_string()]),
            ]
        );
        let state = session.snapshot().await;
        assert_eq!(state.creatures.len(), 3);
        assert_eq!(state.encounters.len(), 1);
    }

    #[tokio::test]
    async fn version_filter_narrows_groups() {
        let mut directory = live_directory();
        directory
            .expect_fetch_location_encounters()
            .returning(|_| Ok(Vec::new()));
        let session = Session::new();

        let view = open_zone(directory)
            .execute(&session, &ZoneId::from("route-103"), VersionKey::Emerald)
            .await
            .expect("zone opens");

        assert_eq!(
            group_names(&view),
            vec![(
                "walk".to_string(),
                vec!["zigzagoon".to_string(), "poochyena".to_string()]
            )]
        );
        assert_eq!(session.snapshot().await.creatures.len(), 3);
    }

    #[tokio::test]
    async fn unknown_zone_is_not_found_and_session_untouched() {
        let session = Session::new();

        let result = open_zone(MockCreatureDirectoryPort::new())
            .execute(&session, &ZoneId::from("route-999"), VersionKey::All)
            .await;

        assert_eq!(result.unwrap_err(), ZoneError::NotFound(ZoneId::from("route-999")));
        assert_eq!(session.current_zone().await, None);
    }

    #[tokio::test]
    async fn town_fetches_nothing() {
        let mut directory = MockCreatureDirectoryPort::new();
        directory.expect_fetch_creature().never();
        directory.expect_fetch_location_encounters().never();
        let session = Session::new();

        let view = open_zone(directory)
            .execute(&session, &ZoneId::from("oldale-town"), VersionKey::All)
            .await
            .expect("town opens");

        assert!(view.groups.is_empty());
        assert_eq!(session.current_zone().await, Some(ZoneId::from("oldale-town")));
    }

    #[tokio::test]
    async fn nested_areas_are_aggregated_together() {
        let mut directory = live_directory();
        directory
            .expect_fetch_location_encounters()
            .returning(|_| Ok(Vec::new()));
        let session = Session::new();

        let view = open_zone(directory)
            .execute(&session, &ZoneId::from("granite-cave"), VersionKey::All)
            .await
            .expect("cave opens");

        assert_eq!(
            group_names(&view),
            vec![(
                "walk".to_string(),
                vec!["zubat".to_string(), "makuhita".to_string()]
            )]
        );
    }

    #[tokio::test]
    async fn encounter_failure_means_no_encounter_data() {
        let mut directory = live_directory();
        directory
            .expect_fetch_location_encounters()
            .returning(|_| Err(DirectoryError::request_failed("timeout")));
        let session = Session::new();

        let view = open_zone(directory)
            .execute(&session, &ZoneId::from("route-103"), VersionKey::All)
            .await
            .expect("zone opens");

        assert_eq!(view.creature_count(), 3);
        assert!(session.snapshot().await.encounters.is_empty());
    }

    #[tokio::test]
    async fn set_version_reaggregates_open_zone() {
        let mut directory = MockCreatureDirectoryPort::new();
        directory
            .expect_fetch_creature()
            .times(6)
            .returning(|name| Ok(attributes(1, name)));
        directory
            .expect_fetch_location_encounters()
            .times(2)
            .returning(|_| Ok(Vec::new()));
        let open = open_zone(directory);
        let set_version = SetVersion::new(open.clone());
        let session = Session::new();

        open.execute(&session, &ZoneId::from("route-103"), VersionKey::All)
            .await
            .expect("zone opens");
        let view = set_version
            .execute(&session, VersionKey::Sapphire)
            .await
            .expect("version changes")
            .expect("zone is open");

        assert_eq!(view.version, VersionKey::Sapphire);
        assert_eq!(view.creature_count(), 2);
        assert_eq!(session.version().await, VersionKey::Sapphire);
    }

    #[tokio::test]
    async fn set_version_without_zone_only_records_choice() {
        let session = Session::new();
        let set_version = SetVersion::new(open_zone(MockCreatureDirectoryPort::new()));

        let view = set_version
            .execute(&session, VersionKey::Ruby)
            .await
            .expect("version changes");

        assert!(view.is_none());
        assert_eq!(session.version().await, VersionKey::Ruby);
    }

    #[tokio::test]
    async fn nested_area_encounters_are_fetched_per_floor() {
        let mut directory = live_directory();
        directory
            .expect_fetch_location_encounters()
            .times(2)
            .returning(|id| {
                let (creature, method) = match id.as_str() {
                    "granite-cave-1f" => ("zubat", "walk"),
                    _ => ("makuhita", "walk"),
                };
                Ok(vec![CreatureEncounters {
                    creature: creature.to_string(),
                    versions: vec![VersionEncounters {
                        version: "ruby".to_string(),
                        slots: vec![EncounterSlot {
                            method: method.to_string(),
                            min_level: 6,
                            max_level: 8,
                            chance: 50,
                        }],
                    }],
                }])
            });
        let session = Session::new();

        open_zone(directory)
            .execute(&session, &ZoneId::from("granite-cave"), VersionKey::All)
            .await
            .expect("cave opens");

        let encounters: Vec<String> = session
            .snapshot()
            .await
            .encounters
            .into_iter()
            .map(|e| e.creature)
            .collect();
        assert_eq!(encounters, vec!["zubat", "makuhita"]);
    }

    #[tokio::test]
    async fn one_failed_floor_keeps_the_others() {
        let mut directory = live_directory();
        directory
            .expect_fetch_location_encounters()
            .returning(|id| match id.as_str() {
                "granite-cave-1f" => Err(DirectoryError::request_failed("timeout")),
                _ => Ok(vec![CreatureEncounters {
                    creature: "makuhita".to_string(),
                    versions: Vec::new(),
                }]),
            });
        let session = Session::new();

        open_zone(directory)
            .execute(&session, &ZoneId::from("granite-cave"), VersionKey::All)
            .await
            .expect("cave opens");

        let state = session.snapshot().await;
        assert_eq!(state.encounters.len(), 1);
        assert_eq!(state.encounters[0].creature, "makuhita");
    }

    /// Directory that starts a second navigation while the first is still
    /// aggregating, the way a user clicking another zone would.
    struct NavigatesAwayDirectory {
        session: Session,
    }

    #[async_trait::async_trait]
    impl CreatureDirectoryPort for NavigatesAwayDirectory {
        async fn fetch_creature(&self, name: &str) -> Result<CreatureAttributes, DirectoryError> {
            self.session
                .begin_navigation(ZoneId::from("oldale-town"), VersionKey::All)
                .await;
            Ok(attributes(1, name))
        }

        async fn check_species(&self, _species_url: &str) -> Result<(), DirectoryError> {
            Ok(())
        }

        async fn fetch_species(&self, name: &str) -> Result<SpeciesDetail, DirectoryError> {
            Err(DirectoryError::not_found(name, 404))
        }

        async fn fetch_location_encounters(
            &self,
            _location_area: &LocationAreaId,
        ) -> Result<Vec<CreatureEncounters>, DirectoryError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn navigation_superseded_mid_fetch_commits_nothing() {
        let session = Session::new();
        let directory: Arc<dyn CreatureDirectoryPort> = Arc::new(NavigatesAwayDirectory {
            session: session.clone(),
        });
        let creatures = Arc::new(AggregateCreatures::new(
            directory.clone(),
            SpriteUrls::default(),
        ));
        let open = OpenZone::new(catalog(), creatures, directory);

        let result = open
            .execute(&session, &ZoneId::from("route-103"), VersionKey::Ruby)
            .await;

        assert_eq!(
            result.unwrap_err(),
            ZoneError::Superseded(ZoneId::from("route-103"))
        );
        let state = session.snapshot().await;
        assert_eq!(state.current_zone, Some(ZoneId::from("oldale-town")));
        assert_eq!(state.version, VersionKey::All);
        assert!(state.creatures.is_empty());
        assert!(state.encounters.is_empty());
    }

    #[test]
    fn list_zones_filters_by_type() {
        let list = ListZones::new(catalog());

        let all: Vec<String> = list.execute("all").into_iter().map(|z| z.id.to_string()).collect();
        assert_eq!(all, vec!["granite-cave", "oldale-town", "route-103"]);

        let routes = list.execute("route");
        assert_eq!(routes.len(), 1);
        assert!(list.execute("underwater").is_empty());
    }

    #[tokio::test]
    async fn return_to_overview_resets_session() {
        let session = Session::new();
        session
            .begin_navigation(ZoneId::from("route-103"), VersionKey::Ruby)
            .await;

        ReturnToOverview.execute(&session).await;

        assert_eq!(session.current_zone().await, None);
        assert_eq!(session.version().await, VersionKey::All);
    }
}
