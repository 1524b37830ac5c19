use std::path::{Path, PathBuf};

use folio_application::{ApplicationError, CatalogSource};
use folio_domain::{Category, ImageCatalog, ImageId};
use image::ImageFormat;
use tracing::{info, warn};
use walkdir::WalkDir;

/// Builds a catalog from `<root>/<category>/**/<image>` on disk.
#[derive(Debug, Clone)]
pub struct FolderCatalogSource {
    root: PathBuf,
}

impl FolderCatalogSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Folder names are matched case-insensitively, so `Nature/` and `nature/`
/// both feed the nature category.
fn folder_category(name: &str) -> Option<Category> {
    name.to_ascii_lowercase()
        .parse::<Category>()
        .ok()
        .filter(|category| !category.is_synthetic())
}

pub fn is_displayable(path: &Path) -> bool {
    matches!(
        ImageFormat::from_path(path),
        Ok(ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::WebP | ImageFormat::Gif)
    )
}

impl CatalogSource for FolderCatalogSource {
    fn load_catalog(&self) -> Result<ImageCatalog, ApplicationError> {
        if !self.root.is_dir() {
            return Err(ApplicationError::InvalidInput(format!(
                "folder does not exist or is not a directory: {}",
                self.root.display()
            )));
        }

        let mut catalog = ImageCatalog::new();
        let mut scanned_files = 0_usize;

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            let category = match folder_category(&name) {
                Some(category) => category,
                None => {
                    warn!(directory = %entry.path().display(), "skipping folder that names no concrete category");
                    continue;
                }
            };

            for file in WalkDir::new(entry.path())
                .sort_by_file_name()
                .into_iter()
                .filter_map(Result::ok)
            {
                if !file.file_type().is_file() {
                    continue;
                }

                scanned_files += 1;
                let file_path = file.path();
                if !is_displayable(file_path) {
                    continue;
                }

                let canonical = file_path
                    .canonicalize()
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
                catalog.push(category, ImageId::from_file_path(&canonical)?)?;
            }
        }

        info!(
            root = %self.root.display(),
            scanned_files,
            images = catalog.len(Category::All),
            "folder catalog loaded"
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("folder catalog {}", self.root.display())
    }
}
