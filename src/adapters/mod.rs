//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - Map-backed repositories for tests and local runs
//! - `postgres` - PostgreSQL repositories via sqlx
//! - `http` - axum REST endpoints over the services

pub mod http;
pub mod memory;
pub mod postgres;

pub use http::{api_router, with_middleware};
pub use memory::in_memory_repositories;
pub use postgres::postgres_repositories;
