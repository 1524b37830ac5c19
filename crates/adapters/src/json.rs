use std::fs;
use std::path::{Path, PathBuf};

use folio_application::{ApplicationError, CatalogSource};
use folio_domain::ImageCatalog;
use tracing::info;

/// Catalog stored as `{"food": [...], "product": [...], ...}`.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load_catalog(&self) -> Result<ImageCatalog, ApplicationError> {
        let raw = fs::read_to_string(&self.path).map_err(|error| {
            ApplicationError::Io(format!("failed to read {}: {error}", self.path.display()))
        })?;
        let catalog: ImageCatalog = serde_json::from_str(&raw).map_err(|error| {
            ApplicationError::Decode(format!("{}: {error}", self.path.display()))
        })?;
        info!(path = %self.path.display(), images = catalog.len(folio_domain::Category::All), "catalog loaded");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("json catalog {}", self.path.display())
    }
}

pub fn write_catalog_json(catalog: &ImageCatalog, path: &Path) -> Result<(), ApplicationError> {
    let json = serde_json::to_string_pretty(catalog)
        .map_err(|error| ApplicationError::Decode(error.to_string()))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|error| ApplicationError::Io(error.to_string()))?;
        }
    }
    fs::write(path, json).map_err(|error| ApplicationError::Io(error.to_string()))
}
