use axum::{routing::get, Router};

use super::handlers::{
    create_person, delete_person, get_person, list_persons, update_person, PersonHandlers,
};

pub fn person_routes(handlers: PersonHandlers) -> Router {
    Router::new()
        .route("/persons", get(list_persons).post(create_person))
        .route(
            "/persons/:id",
            get(get_person).put(update_person).delete(delete_person),
        )
        .with_state(handlers)
}
