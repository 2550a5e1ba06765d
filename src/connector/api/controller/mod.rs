pub mod dog_controller;
pub mod ping_controller;

pub use dog_controller::{create_dog, get_dog_by_id, list_dogs, ListDogsParams};
pub use ping_controller::{ping, API_VERSION};
