//! HTTP adapter for expense category endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ExpenseCategoryRequest, ExpenseCategoryResponse, ListExpenseCategoriesParams};
pub use handlers::ExpenseCategoryHandlers;
pub use routes::expense_category_routes;
