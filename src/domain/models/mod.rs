mod dog;
mod dog_query;

pub use dog::*;
pub use dog_query::*;
