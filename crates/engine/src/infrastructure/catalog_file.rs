//! JSON file catalog source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use zonedex_domain::CatalogDocument;

use crate::infrastructure::ports::{CatalogError, CatalogSource};

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "data/zones.json";

/// Reads the zone catalog document from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonCatalogFile {
    path: PathBuf,
}

impl JsonCatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogFile {
    async fn load(&self) -> Result<CatalogDocument, CatalogError> {
        let path = self.path.display().to_string();
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::io(&path, e))?;

        let document: CatalogDocument =
            serde_json::from_str(&data).map_err(CatalogError::parse)?;

        for issue in document.check() {
            tracing::warn!(path = %path, issue = %issue, "Catalog issue");
        }

        tracing::debug!(path = %path, zones = document.zones_data.len(), "Catalog document read");
        Ok(document)
    }
}
