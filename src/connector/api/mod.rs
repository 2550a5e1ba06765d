pub mod cancellation;
pub mod container;
pub mod controller;
pub mod error;
pub mod router;

pub use cancellation::RequestCancellation;
pub use container::{Container, ContainerConfig};
pub use error::{ApiError, ProblemDetails};
pub use router::build_router;
