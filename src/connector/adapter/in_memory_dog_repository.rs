use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::cancellable::lock_or_cancel;
use crate::application::{duplicate_name, DogRepository};
use crate::domain::{Dog, DogQuery, DomainError, NewDog, SortField};

#[derive(Debug)]
struct DogTable {
    rows: Vec<Dog>,
    next_id: i32,
}

impl Default for DogTable {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

/// Process-local dog storage. Rows are kept in insertion order, which is the
/// natural order returned when no sort is requested.
pub struct InMemoryDogRepository {
    table: Arc<Mutex<DogTable>>,
    pending: Mutex<Vec<NewDog>>,
}

impl InMemoryDogRepository {
    pub fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(DogTable::default())),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// A new unit of work over the same table.
    pub fn scoped(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            pending: Mutex::new(Vec::new()),
        }
    }

    fn compare(field: SortField, a: &Dog, b: &Dog) -> Ordering {
        match field {
            SortField::Name => a.name().cmp(b.name()),
            SortField::Color => a.color().cmp(b.color()),
            SortField::TailLength => a.tail_length().cmp(&b.tail_length()),
            SortField::Weight => a.weight().cmp(&b.weight()),
        }
    }
}

impl Default for InMemoryDogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DogRepository for InMemoryDogRepository {
    async fn find_all(
        &self,
        query: &DogQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<Dog>, DomainError> {
        let table = lock_or_cancel(&self.table, cancel).await?;
        let mut dogs = table.rows.clone();
        drop(table);

        // Stable sort keeps insertion order among equal keys, matching the
        // id tie-break used by the DuckDB adapter.
        if let Some(field) = query.sort_by() {
            if query.is_descending() {
                dogs.sort_by(|a, b| Self::compare(field, b, a));
            } else {
                dogs.sort_by(|a, b| Self::compare(field, a, b));
            }
        }

        let skip = query.offset().unwrap_or(0);
        let take = query.limit().unwrap_or(u64::MAX);

        Ok(dogs
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(take).unwrap_or(usize::MAX))
            .collect())
    }

    async fn find_by_id(
        &self,
        id: i32,
        cancel: &CancellationToken,
    ) -> Result<Option<Dog>, DomainError> {
        let table = lock_or_cancel(&self.table, cancel).await?;
        Ok(table.rows.iter().find(|d| d.id() == id).cloned())
    }

    async fn add(&self, dog: NewDog, cancel: &CancellationToken) -> Result<(), DomainError> {
        let mut pending = lock_or_cancel(&self.pending, cancel).await?;
        pending.push(dog);
        Ok(())
    }

    async fn name_exists(
        &self,
        name: &str,
        cancel: &CancellationToken,
    ) -> Result<bool, DomainError> {
        let table = lock_or_cancel(&self.table, cancel).await?;
        Ok(table.rows.iter().any(|d| d.name() == name))
    }

    async fn save_changes(&self, cancel: &CancellationToken) -> Result<Vec<Dog>, DomainError> {
        let mut pending = lock_or_cancel(&self.pending, cancel).await?;
        if pending.is_empty() {
            return Ok(Vec::new());
        }

        let mut table = lock_or_cancel(&self.table, cancel).await?;

        // All-or-nothing: reject the batch before touching the table.
        for (i, dog) in pending.iter().enumerate() {
            let clashes_with_table = table.rows.iter().any(|d| d.name() == dog.name());
            let clashes_in_batch = pending[..i].iter().any(|d| d.name() == dog.name());
            if clashes_with_table || clashes_in_batch {
                return Err(duplicate_name(dog.name()));
            }
        }

        let mut saved = Vec::with_capacity(pending.len());
        for dog in pending.drain(..) {
            let id = table.next_id;
            table.next_id += 1;
            let dog = dog.into_dog(id);
            table.rows.push(dog.clone());
            saved.push(dog);
        }

        debug!("Committed {} dogs to memory", saved.len());
        Ok(saved)
    }
}
