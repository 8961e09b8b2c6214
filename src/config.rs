use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::Category;

/// Optional configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "anatomancer.json";

const DEFAULT_ROOT: &str = "models";

/// Maps each body part to the directory its model files live in.
///
/// Loaded once at startup and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub heart: PathBuf,
    pub foot: PathBuf,
    pub lungs: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self::rooted(DEFAULT_ROOT)
    }
}

impl LibraryConfig {
    /// Layout with one subdirectory per category under `root`.
    pub fn rooted(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        LibraryConfig {
            heart: root.join(Category::Heart.folder_name()),
            foot: root.join(Category::Foot.folder_name()),
            lungs: root.join(Category::Lungs.folder_name()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `anatomancer.json` if present, otherwise the default layout.
    /// Configuration problems are logged and recovered from, never fatal.
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_FILE);
        let library = if path.exists() {
            match Self::load(path) {
                Ok(library) => {
                    log::info!("model library configured from {}", path.display());
                    library
                }
                Err(err) => {
                    log::error!("{err}; using the default model directories");
                    Self::default()
                }
            }
        } else {
            log::info!(
                "no {CONFIG_FILE} found, using the default model directories"
            );
            Self::default()
        };

        for (category, dir) in library.missing_directories() {
            log::warn!(
                "{category} model directory does not exist: {}",
                dir.display()
            );
        }

        library
    }

    pub fn directory(&self, category: Category) -> &Path {
        match category {
            Category::Heart => &self.heart,
            Category::Foot => &self.foot,
            Category::Lungs => &self.lungs,
        }
    }

    /// Categories whose configured directory is absent on disk.
    pub fn missing_directories(&self) -> Vec<(Category, &Path)> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.directory(category)))
            .filter(|(_, dir)| !dir.is_dir())
            .collect()
    }
}
