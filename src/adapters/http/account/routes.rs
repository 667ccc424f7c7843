use axum::{routing::get, Router};

use super::handlers::{
    create_account, delete_account, get_account, list_accounts, update_account, AccountHandlers,
};

pub fn account_routes(handlers: AccountHandlers) -> Router {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route(
            "/accounts/:id",
            get(get_account).put(update_account).delete(delete_account),
        )
        .with_state(handlers)
}
