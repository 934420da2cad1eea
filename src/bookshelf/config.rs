use crate::error::{BookshelfError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATA_FILE: &str = "books.json";

/// Configuration for bookshelf, stored as JSON.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BookshelfConfig {
    /// Catalog file used when no `--file` is given. Relative paths resolve
    /// against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Treat a missing catalog file as an empty catalog. When false, a missing
    /// file is an error.
    #[serde(default = "default_create_if_missing")]
    pub create_if_missing: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_create_if_missing() -> bool {
    true
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            create_if_missing: default_create_if_missing(),
        }
    }
}

impl BookshelfConfig {
    /// Default config file location under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "bookshelf", "bookshelf")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load config from `path`, or return defaults if the file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| BookshelfError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| BookshelfError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Picks the catalog file: an explicit path wins over the configured one.
    pub fn resolve_data_file(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.data_file.clone())
    }
}
