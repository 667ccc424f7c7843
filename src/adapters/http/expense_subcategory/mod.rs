//! HTTP adapter for expense subcategory endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ExpenseSubCategoryRequest, ExpenseSubCategoryResponse, ListExpenseSubCategoriesParams,
};
pub use handlers::ExpenseSubCategoryHandlers;
pub use routes::expense_subcategory_routes;
