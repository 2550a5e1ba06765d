mod create_dog;
mod get_dog_by_id;
mod get_dogs;

pub use create_dog::*;
pub use get_dog_by_id::*;
pub use get_dogs::*;
