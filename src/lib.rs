pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    CreateDogUseCase, DogDto, DogRepository, GetDogByIdUseCase, GetDogsUseCase,
};

pub use cli::Commands;

pub use connector::{
    build_router, ApiError, Container, ContainerConfig, DuckdbDogRepository,
    InMemoryDogRepository,
};

pub use domain::{Dog, DogQuery, DomainError, NewDog, SortField, SortOrder};
