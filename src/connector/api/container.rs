use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use duckdb::Connection;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{CreateDogUseCase, DogRepository, GetDogByIdUseCase, GetDogsUseCase};
use crate::connector::adapter::{DuckdbDogRepository, InMemoryDogRepository};

pub const DATABASE_FILE: &str = "dogshouse.duckdb";

pub struct ContainerConfig {
    pub data_dir: String,
    /// Keep dogs in process memory instead of DuckDB. Nothing survives a restart.
    pub memory_storage: bool,
}

enum DogStorage {
    DuckDb(Arc<Mutex<Connection>>),
    InMemory(InMemoryDogRepository),
}

/// Composition root: owns the storage handle and builds use cases on demand.
///
/// Each use case gets its own repository instance, so staged writes never leak
/// between requests.
pub struct Container {
    storage: DogStorage,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let storage = if config.memory_storage {
            debug!("Using in-memory dog storage");
            DogStorage::InMemory(InMemoryDogRepository::new())
        } else {
            std::fs::create_dir_all(&config.data_dir)
                .with_context(|| format!("Failed to create data directory {}", config.data_dir))?;
            let db_path = PathBuf::from(&config.data_dir).join(DATABASE_FILE);
            debug!("Using DuckDB dog storage at {:?}", db_path);
            let repo = DuckdbDogRepository::new(&db_path)?;
            DogStorage::DuckDb(repo.shared_connection())
        };

        Ok(Self { storage, config })
    }

    pub fn dog_repository(&self) -> Arc<dyn DogRepository> {
        match &self.storage {
            DogStorage::DuckDb(conn) => {
                Arc::new(DuckdbDogRepository::with_connection(Arc::clone(conn)))
            }
            DogStorage::InMemory(repo) => Arc::new(repo.scoped()),
        }
    }

    pub fn get_dogs_use_case(&self) -> GetDogsUseCase {
        GetDogsUseCase::new(self.dog_repository())
    }

    pub fn create_dog_use_case(&self) -> CreateDogUseCase {
        CreateDogUseCase::new(self.dog_repository())
    }

    pub fn get_dog_by_id_use_case(&self) -> GetDogByIdUseCase {
        GetDogByIdUseCase::new(self.dog_repository())
    }

    pub fn data_dir(&self) -> &str {
        &self.config.data_dir
    }

    pub fn memory_storage(&self) -> bool {
        self.config.memory_storage
    }
}
