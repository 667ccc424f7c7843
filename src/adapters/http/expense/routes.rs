use axum::{routing::get, Router};

use super::handlers::{
    create_expense, delete_expense, get_expense, list_expenses, update_expense, ExpenseHandlers,
};

pub fn expense_routes(handlers: ExpenseHandlers) -> Router {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/:id",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
        .with_state(handlers)
}
