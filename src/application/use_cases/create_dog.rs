use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::application::{DogDto, DogRepository};
use crate::domain::{Dog, DomainError};

/// Validates and stores a new dog. Names are unique.
pub struct CreateDogUseCase {
    dog_repo: Arc<dyn DogRepository>,
}

impl CreateDogUseCase {
    pub fn new(dog_repo: Arc<dyn DogRepository>) -> Self {
        Self { dog_repo }
    }

    pub async fn execute(
        &self,
        dto: DogDto,
        cancel: &CancellationToken,
    ) -> Result<Dog, DomainError> {
        dto.validate()?;

        if self.dog_repo.name_exists(&dto.name, cancel).await? {
            warn!("Rejected duplicate dog name '{}'", dto.name);
            return Err(duplicate_name(&dto.name));
        }

        let name = dto.name.clone();
        self.dog_repo.add(dto.into_new_dog(), cancel).await?;
        let saved = self.dog_repo.save_changes(cancel).await?;

        let dog = saved
            .into_iter()
            .find(|d| d.name() == name)
            .ok_or_else(|| {
                DomainError::internal(format!("Dog '{}' was not returned after commit", name))
            })?;

        info!("Created dog '{}' with id {}", dog.name(), dog.id());
        Ok(dog)
    }
}

/// The conflict reported when a dog name is already taken.
pub fn duplicate_name(name: &str) -> DomainError {
    DomainError::already_exists(format!("A dog with the name '{}' already exists.", name))
}
