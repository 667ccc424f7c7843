//! HTTP adapter for account endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AccountRequest, AccountResponse, ListAccountsParams};
pub use handlers::AccountHandlers;
pub use routes::account_routes;
