//! Catalog loading use case.

use std::sync::Arc;

use zonedex_domain::ZoneCatalog;

use crate::infrastructure::ports::CatalogSource;

/// Outcome of loading the catalog at startup.
///
/// A failed load leaves an empty catalog plus the message the overview
/// keeps showing; there is no retry.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    pub catalog: ZoneCatalog,
    pub error: Option<String>,
}

/// Load and validate the static zone catalog.
pub struct LoadCatalog {
    source: Arc<dyn CatalogSource>,
}

impl LoadCatalog {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    pub async fn execute(&self) -> LoadedCatalog {
        let loaded = match self.source.load().await {
            Ok(document) => ZoneCatalog::from_document(document).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match loaded {
            Ok(catalog) => {
                tracing::info!(zones = catalog.len(), "Catalog loaded");
                LoadedCatalog {
                    catalog,
                    error: None,
                }
            }
            Err(message) => {
                tracing::error!(error = %message, "Failed to load catalog");
                LoadedCatalog {
                    catalog: ZoneCatalog::empty(),
                    error: Some(message),
                }
            }
        }
    }
}
