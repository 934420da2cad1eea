use super::atomic::{write_atomic, PersistStage};
use super::BookStore;
use crate::catalog::Catalog;
use crate::error::{BookshelfError, Result};
use crate::model::Book;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Catalog stored as a single JSON file.
pub struct FileStore {
    path: PathBuf,
    create_if_missing: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_if_missing: true,
        }
    }

    /// When `false`, loading a catalog whose file does not exist is an error
    /// instead of an empty catalog.
    pub fn with_create_if_missing(mut self, create_if_missing: bool) -> Self {
        self.create_if_missing = create_if_missing;
        self
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| BookshelfError::Persist {
                    stage: PersistStage::Created,
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<Catalog> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound && self.create_if_missing => {
                debug!(path = %self.path.display(), "catalog file missing, starting empty");
                return Ok(Catalog::default());
            }
            Err(e) => return Err(BookshelfError::io(&self.path, e)),
        };

        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(|source| BookshelfError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = books.len(), "loaded catalog");
        Ok(Catalog::new(books))
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut content = serde_json::to_string_pretty(catalog.books())?;
        content.push('\n');
        write_atomic(&self.path, content.as_bytes())?;

        debug!(path = %self.path.display(), count = catalog.len(), "saved catalog");
        Ok(())
    }
}
