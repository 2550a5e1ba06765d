mod dog_repository;

pub use dog_repository::*;
