//! HTTP handlers for person endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    json_rejection, parse_path_id, query_rejection, service_error_response,
};
use crate::application::{
    CreatePersonCommand, ListPersonsQuery, PersonService, UpdatePersonCommand,
};

use super::dto::{ListPersonsParams, PersonRequest, PersonResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PersonHandlers {
    service: Arc<PersonService>,
}

impl PersonHandlers {
    pub fn new(service: Arc<PersonService>) -> Self {
        Self { service }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /persons
pub async fn create_person(
    State(handlers): State<PersonHandlers>,
    body: Result<Json<PersonRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = CreatePersonCommand {
        name: req.name,
        email: req.email,
    };

    match handlers.service.create(cmd).await {
        Ok(person) => (StatusCode::CREATED, Json(PersonResponse::from(person))).into_response(),
        Err(e) => service_error_response(e),
    }
}

/// GET /persons/:id
pub async fn get_person(
    State(handlers): State<PersonHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.service.get(id).await {
        Ok(person) => (StatusCode::OK, Json(PersonResponse::from(person))).into_response(),
        Err(e) => service_error_response(e),
    }
}

/// GET /persons
pub async fn list_persons(
    State(handlers): State<PersonHandlers>,
    params: Result<Query<ListPersonsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection(rejection),
    };

    let query = ListPersonsQuery {
        skip: params.skip,
        limit: params.limit,
    };

    match handlers.service.list(query).await {
        Ok(persons) => {
            let body: Vec<PersonResponse> = persons.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

/// PUT /persons/:id
pub async fn update_person(
    State(handlers): State<PersonHandlers>,
    Path(id): Path<String>,
    body: Result<Json<PersonRequest>, JsonRejection>,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = UpdatePersonCommand {
        id,
        name: req.name,
        email: req.email,
    };

    match handlers.service.update(cmd).await {
        Ok(person) => (StatusCode::OK, Json(PersonResponse::from(person))).into_response(),
        Err(e) => service_error_response(e),
    }
}

/// DELETE /persons/:id
pub async fn delete_person(
    State(handlers): State<PersonHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => service_error_response(e),
    }
}
