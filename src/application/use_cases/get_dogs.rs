use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::application::{DogDto, DogRepository};
use crate::domain::{DogQuery, DomainError, SortField, SortOrder};

pub const DEFAULT_PAGE_NUMBER: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Lists dogs with optional sorting and paging.
pub struct GetDogsUseCase {
    dog_repo: Arc<dyn DogRepository>,
}

impl GetDogsUseCase {
    pub fn new(dog_repo: Arc<dyn DogRepository>) -> Self {
        Self { dog_repo }
    }

    /// An unknown `attribute` falls back to storage order rather than failing.
    /// Non-positive page values are rejected before the repository is called.
    pub async fn execute(
        &self,
        attribute: Option<&str>,
        order: Option<&str>,
        page_number: i64,
        page_size: i64,
        cancel: &CancellationToken,
    ) -> Result<Vec<DogDto>, DomainError> {
        let page_number = page_value(page_number, "Page number")?;
        let page_size = page_value(page_size, "Page size")?;

        let sort_by = attribute.and_then(SortField::parse);
        if sort_by.is_none() {
            if let Some(unknown) = attribute.filter(|a| !a.trim().is_empty()) {
                debug!("Ignoring unknown sort attribute '{}'", unknown);
            }
        }

        let query = DogQuery::new()
            .with_sort(sort_by, SortOrder::parse(order))
            .with_page_number(page_number)
            .with_page_size(page_size);

        info!(
            "Listing dogs (sort={}, order={}, page={}, size={})",
            sort_by.map(|f| f.as_str()).unwrap_or("none"),
            query.order().as_sql(),
            page_number,
            page_size
        );

        let dogs = self.dog_repo.find_all(&query, cancel).await?;

        Ok(dogs.iter().map(DogDto::from).collect())
    }
}

fn page_value(value: i64, label: &str) -> Result<u32, DomainError> {
    if value <= 0 {
        return Err(DomainError::invalid_input(format!(
            "{} must be greater than zero.",
            label
        )));
    }

    u32::try_from(value).map_err(|_| {
        DomainError::invalid_input(format!("{} must not exceed {}.", label, u32::MAX))
    })
}
