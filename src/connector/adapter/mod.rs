mod cancellable;
mod duckdb_dog_repository;
mod in_memory_dog_repository;

pub use duckdb_dog_repository::*;
pub use in_memory_dog_repository::*;
