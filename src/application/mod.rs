//! # Application Layer
//!
//! Use cases, the transfer object, and the repository port they depend on.

mod dto;
pub mod interfaces;
pub mod use_cases;

pub use dto::*;
pub use interfaces::*;
pub use use_cases::*;
