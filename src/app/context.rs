use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::Result;
use crate::config::{Backend, Config};
use crate::domain::{Homework, ListItem, Task};
use crate::list::ItemListManager;
use crate::store::{FileStore, SqliteStore, Store};

pub struct AppContext {
    pub store: Arc<dyn Store>,
    pub config: Config,
    /// Database file or directory the store writes to, `None` when in memory.
    pub location: Option<PathBuf>,
}

impl AppContext {
    /// Open the store described by `config`. `data_path` overrides
    /// `storage.path`.
    pub fn new(config: Config, data_path: Option<PathBuf>) -> Result<Self> {
        let path = match data_path.or_else(|| config.storage.path.clone()) {
            Some(p) => p,
            None => Self::default_location(config.storage.backend)?,
        };

        let store: Arc<dyn Store> = match config.storage.backend {
            Backend::Sqlite => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                Arc::new(SqliteStore::new(&path)?)
            }
            Backend::File => Arc::new(FileStore::new(path.clone())),
        };

        Ok(Self {
            store,
            config,
            location: Some(path),
        })
    }

    pub fn in_memory(config: Config) -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);

        Ok(Self {
            store,
            config,
            location: None,
        })
    }

    /// Personal task list, already loaded.
    pub async fn tasks(&self) -> Result<ItemListManager<Task>> {
        self.open_list().await
    }

    /// Homework list, already loaded.
    pub async fn homeworks(&self) -> Result<ItemListManager<Homework>> {
        self.open_list().await
    }

    pub async fn open_list<T: ListItem>(&self) -> Result<ItemListManager<T>> {
        let mut manager = ItemListManager::<T>::new(self.store.clone())
            .with_min_length(self.config.validation.min_length);
        manager.initialize().await?;
        Ok(manager)
    }

    fn default_location(backend: Backend) -> Result<PathBuf> {
        let dir = Config::default_data_dir()?;
        Ok(match backend {
            Backend::Sqlite => dir.join("tugas.db"),
            Backend::File => dir,
        })
    }
}
