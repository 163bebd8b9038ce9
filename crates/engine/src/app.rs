//! Application state and composition.

use std::sync::Arc;

use zonedex_domain::{SpriteUrls, ZoneCatalog};

use crate::infrastructure::{
    catalog_file::JsonCatalogFile,
    config::AppConfig,
    pokeapi::PokeApiClient,
    ports::{CatalogSource, CreatureDirectoryPort, StoragePort},
    storage::FileStorage,
};
use crate::use_cases::{
    AggregateCreatures, InspectCreature, ListZones, LoadCatalog, LoadedCatalog, OpenZone,
    ReturnToOverview, Session, SetVersion, ThemePreference, ZoneUseCases,
};

/// Main application state.
///
/// Holds the loaded catalog, the session context and all use cases.
pub struct App {
    pub catalog: Arc<ZoneCatalog>,
    /// Persistent message shown when the catalog failed to load
    pub catalog_error: Option<String>,
    pub session: Session,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub zones: ZoneUseCases,
    pub inspect: Arc<InspectCreature>,
    pub theme: Arc<ThemePreference>,
}

impl App {
    /// Compose the application from already-built ports.
    pub fn new(
        loaded: LoadedCatalog,
        directory: Arc<dyn CreatureDirectoryPort>,
        storage: Arc<dyn StoragePort>,
        sprites: SpriteUrls,
    ) -> Self {
        let catalog = Arc::new(loaded.catalog);

        let creatures = Arc::new(AggregateCreatures::new(directory.clone(), sprites));
        let open = Arc::new(OpenZone::new(catalog.clone(), creatures, directory.clone()));
        let zones = ZoneUseCases::new(
            open.clone(),
            Arc::new(SetVersion::new(open)),
            Arc::new(ListZones::new(catalog.clone())),
            Arc::new(ReturnToOverview),
        );

        Self {
            catalog,
            catalog_error: loaded.error,
            session: Session::new(),
            use_cases: UseCases {
                zones,
                inspect: Arc::new(InspectCreature::new(directory)),
                theme: Arc::new(ThemePreference::new(storage)),
            },
        }
    }

    /// Build the production adapters from configuration and load the catalog.
    pub async fn from_config(config: &AppConfig) -> Self {
        let directory: Arc<dyn CreatureDirectoryPort> = Arc::new(PokeApiClient::with_timeout(
            &config.api_base_url,
            config.http_timeout_secs,
        ));
        let storage: Arc<dyn StoragePort> = Arc::new(FileStorage::open(&config.storage_path));
        let source: Arc<dyn CatalogSource> = Arc::new(JsonCatalogFile::new(&config.catalog_path));

        tracing::info!(
            api = %config.api_base_url,
            catalog = ?config.catalog_path,
            "Configuring ZoneDex"
        );

        let loaded = LoadCatalog::new(source).execute().await;
        Self::new(loaded, directory, storage, config.sprite_urls())
    }
}
