use std::fs;
use std::path::{Path, PathBuf};

use folio_adapters::{BuiltinCatalogSource, FolderCatalogSource, JsonCatalogSource};
use folio_application::{CatalogSource, DEFAULT_SPLASH_MS};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSetting {
    #[default]
    Builtin,
    Json(PathBuf),
    Folder(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub catalog: CatalogSetting,
    pub splash_ms: u64,
    pub window_size: [f32; 2],
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogSetting::Builtin,
            splash_ms: DEFAULT_SPLASH_MS,
            window_size: [1200.0, 800.0],
            log_filter: "info,folio=debug".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `explicit` if given, else `folio.toml` when present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, String> {
        let raw = fs::read_to_string(path)
            .map_err(|error| format!("failed to read config {}: {error}", path.display()))?;
        toml::from_str(&raw)
            .map_err(|error| format!("invalid config {}: {error}", path.display()))
    }

    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog {
            CatalogSetting::Builtin => Box::new(BuiltinCatalogSource),
            CatalogSetting::Json(path) => Box::new(JsonCatalogSource::new(path.clone())),
            CatalogSetting::Folder(path) => Box::new(FolderCatalogSource::new(path.clone())),
        }
    }
}
