use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::{DogDto, DogRepository};
use crate::domain::DomainError;

pub struct GetDogByIdUseCase {
    dog_repo: Arc<dyn DogRepository>,
}

impl GetDogByIdUseCase {
    pub fn new(dog_repo: Arc<dyn DogRepository>) -> Self {
        Self { dog_repo }
    }

    pub async fn execute(
        &self,
        id: i32,
        cancel: &CancellationToken,
    ) -> Result<DogDto, DomainError> {
        self.dog_repo
            .find_by_id(id, cancel)
            .await?
            .map(DogDto::from)
            .ok_or_else(|| DomainError::not_found(format!("Dog with Id {} not found.", id)))
    }
}
