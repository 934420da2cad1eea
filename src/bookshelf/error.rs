use crate::store::atomic::PersistStage;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid book catalog: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Book with ID {0} not found")]
    NotFound(String),

    #[error("Book with ID {0} already exists")]
    AlreadyExists(String),

    #[error("failed to save {} ({stage}): {source}", path.display())]
    Persist {
        stage: PersistStage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl BookshelfError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
