//! HTTP handlers for expense category endpoints.

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
    CreateExpenseCategoryCommand, ExpenseCategoryService, ListExpenseCategoriesQuery,
    UpdateExpenseCategoryCommand,
};

use super::dto::{ExpenseCategoryRequest, ExpenseCategoryResponse, ListExpenseCategoriesParams};

#[derive(Clone)]
pub struct ExpenseCategoryHandlers {
    service: Arc<ExpenseCategoryService>,
}

impl ExpenseCategoryHandlers {
    pub fn new(service: Arc<ExpenseCategoryService>) -> Self {
        Self { service }
    }
}

/// POST /expenses/categories
pub async fn create_category(
    State(handlers): State<ExpenseCategoryHandlers>,
    body: Result<Json<ExpenseCategoryRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = CreateExpenseCategoryCommand { name: req.name };

    match handlers.service.create(cmd).await {
        Ok(category) => {
            (StatusCode::CREATED, Json(ExpenseCategoryResponse::from(category))).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

/// GET /expenses/categories/:id
pub async fn get_category(
    State(handlers): State<ExpenseCategoryHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.service.get(id).await {
        Ok(category) => (StatusCode::OK, Json(ExpenseCategoryResponse::from(category))).into_response(),
        Err(e) => service_error_response(e),
    }
}

/// GET /expenses/categories
pub async fn list_categories(
    State(handlers): State<ExpenseCategoryHandlers>,
    params: Result<Query<ListExpenseCategoriesParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection(rejection),
    };

    let query = ListExpenseCategoriesQuery {
        skip: params.skip,
        limit: params.limit,
    };

    match handlers.service.list(query).await {
        Ok(categories) => {
            let body: Vec<ExpenseCategoryResponse> =
                categories.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

/// PUT /expenses/categories/:id
pub async fn update_category(
    State(handlers): State<ExpenseCategoryHandlers>,
    Path(id): Path<String>,
    body: Result<Json<ExpenseCategoryRequest>, JsonRejection>,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = UpdateExpenseCategoryCommand { id, name: req.name };

    match handlers.service.update(cmd).await {
        Ok(category) => (StatusCode::OK, Json(ExpenseCategoryResponse::from(category))).into_response(),
        Err(e) => service_error_response(e),
    }
}

/// DELETE /expenses/categories/:id
pub async fn delete_category(
    State(handlers): State<ExpenseCategoryHandlers>,
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
