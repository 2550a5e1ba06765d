use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::{Dog, DogQuery, DomainError, NewDog};

/// Persistence for dog records.
///
/// An instance is a unit of work: `add` only stages a dog, and nothing is
/// written until `save_changes` commits everything staged on that instance.
/// Every call observes `cancel` and fails with [`DomainError::Cancelled`] once
/// it fires.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DogRepository: Send + Sync {
    async fn find_all(
        &self,
        query: &DogQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<Dog>, DomainError>;

    async fn find_by_id(
        &self,
        id: i32,
        cancel: &CancellationToken,
    ) -> Result<Option<Dog>, DomainError>;

    async fn add(&self, dog: NewDog, cancel: &CancellationToken) -> Result<(), DomainError>;

    async fn name_exists(&self, name: &str, cancel: &CancellationToken)
        -> Result<bool, DomainError>;

    /// Commits staged dogs and returns them with their assigned ids.
    async fn save_changes(&self, cancel: &CancellationToken) -> Result<Vec<Dog>, DomainError>;
}
