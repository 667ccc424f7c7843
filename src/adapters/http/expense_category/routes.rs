use axum::{routing::get, Router};

use super::handlers::{
    create_category, delete_category, get_category, list_categories, update_category,
    ExpenseCategoryHandlers,
};

pub fn expense_category_routes(handlers: ExpenseCategoryHandlers) -> Router {
    Router::new()
        .route(
            "/expenses/categories",
            get(list_categories).post(create_category),
        )
        .route(
            "/expenses/categories/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
        .with_state(handlers)
}
