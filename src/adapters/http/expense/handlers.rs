//! HTTP handlers for expense endpoints.

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
use crate::application::{CreateExpenseCommand, ExpenseService, UpdateExpenseCommand};

use super::dto::{ExpenseRequest, ExpenseResponse, ListExpensesParams};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ExpenseHandlers {
    service: Arc<ExpenseService>,
}

impl ExpenseHandlers {
    pub fn new(service: Arc<ExpenseService>) -> Self {
        Self { service }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /expenses
pub async fn create_expense(
    State(handlers): State<ExpenseHandlers>,
    body: Result<Json<ExpenseRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = CreateExpenseCommand { fields: req.into() };

    match handlers.service.create(cmd).await {
        Ok(expense) => (StatusCode::CREATED, Json(ExpenseResponse::from(expense))).into_response(),
        Err(e) => service_error_response(e),
    }
}

/// GET /expenses/:id
pub async fn get_expense(
    State(handlers): State<ExpenseHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.service.get(id).await {
        Ok(expense) => (StatusCode::OK, Json(ExpenseResponse::from(expense))).into_response(),
        Err(e) => service_error_response(e),
    }
}

/// GET /expenses - newest first, narrowed by the query filters
pub async fn list_expenses(
    State(handlers): State<ExpenseHandlers>,
    params: Result<Query<ListExpensesParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection(rejection),
    };

    match handlers.service.list(params.into()).await {
        Ok(expenses) => {
            let body: Vec<ExpenseResponse> = expenses.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

/// PUT /expenses/:id
pub async fn update_expense(
    State(handlers): State<ExpenseHandlers>,
    Path(id): Path<String>,
    body: Result<Json<ExpenseRequest>, JsonRejection>,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = UpdateExpenseCommand {
        id,
        fields: req.into(),
    };

    match handlers.service.update(cmd).await {
        Ok(expense) => (StatusCode::OK, Json(ExpenseResponse::from(expense))).into_response(),
        Err(e) => service_error_response(e),
    }
}

/// DELETE /expenses/:id
pub async fn delete_expense(
    State(handlers): State<ExpenseHandlers>,
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
