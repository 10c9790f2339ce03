use thiserror::Error;

use crate::config::ConfigError;
use crate::list::ListError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum TugasError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    List(#[from] ListError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TugasError>;
