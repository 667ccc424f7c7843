//! HTTP adapter for expense endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ExpenseRequest, ExpenseResponse, ListExpensesParams};
pub use handlers::ExpenseHandlers;
pub use routes::expense_routes;
