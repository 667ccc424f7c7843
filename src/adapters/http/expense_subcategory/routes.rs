use axum::{routing::get, Router};

use super::handlers::{
    create_subcategory, delete_subcategory, get_subcategory, list_subcategories,
    update_subcategory, ExpenseSubCategoryHandlers,
};

pub fn expense_subcategory_routes(handlers: ExpenseSubCategoryHandlers) -> Router {
    Router::new()
        .route(
            "/expenses/categories/subcategories",
            get(list_subcategories).post(create_subcategory),
        )
        .route(
            "/expenses/categories/subcategories/:id",
            get(get_subcategory)
                .put(update_subcategory)
                .delete(delete_subcategory),
        )
        .with_state(handlers)
}
