pub mod file;
pub mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

pub use file::FileStore;
pub use sqlite::SqliteStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] rusqlite_migration::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// String-keyed blob storage backing every list.
#[async_trait]
pub trait Store: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing was ever written.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Keys end up in file names and must stay portable.
pub(crate) fn check_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key() {
        assert!(check_key("tasks").is_ok());
        assert!(check_key("home_works-2").is_ok());
        assert!(matches!(check_key(""), Err(StoreError::InvalidKey(_))));
        assert!(matches!(check_key("../etc"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(check_key("a b"), Err(StoreError::InvalidKey(_))));
    }
}
