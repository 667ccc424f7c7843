//! HTTP adapter for person endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ListPersonsParams, PersonRequest, PersonResponse};
pub use handlers::PersonHandlers;
pub use routes::person_routes;
