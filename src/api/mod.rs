pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod routes;

pub use errors::ApiError;
pub use routes::{ApiDoc, function_router, router};
