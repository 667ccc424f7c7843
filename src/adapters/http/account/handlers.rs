//! HTTP handlers for account endpoints.

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
    AccountService, CreateAccountCommand, ListAccountsQuery, UpdateAccountCommand,
};

use super::dto::{AccountRequest, AccountResponse, ListAccountsParams};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AccountHandlers {
    service: Arc<AccountService>,
}

impl AccountHandlers {
    pub fn new(service: Arc<AccountService>) -> Self {
        Self { service }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /accounts
pub async fn create_account(
    State(handlers): State<AccountHandlers>,
    body: Result<Json<AccountRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = CreateAccountCommand {
        name: req.name,
        currency: req.currency,
        account_type: req.account_type,
        initial_balance: req.initial_balance,
        primary_owner_id: req.primary_owner_id,
        second_owner_id: req.second_owner_id,
    };

    match handlers.service.create(cmd).await {
        Ok(account) => (StatusCode::CREATED, Json(AccountResponse::from(account))).into_response(),
        Err(e) => service_error_response(e),
    }
}

/// GET /accounts/:id
pub async fn get_account(
    State(handlers): State<AccountHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.service.get(id).await {
        Ok(account) => (StatusCode::OK, Json(AccountResponse::from(account))).into_response(),
        Err(e) => service_error_response(e),
    }
}

/// GET /accounts
pub async fn list_accounts(
    State(handlers): State<AccountHandlers>,
    params: Result<Query<ListAccountsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection(rejection),
    };

    let query = ListAccountsQuery {
        skip: params.skip,
        limit: params.limit,
    };

    match handlers.service.list(query).await {
        Ok(accounts) => {
            let body: Vec<AccountResponse> = accounts.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

/// PUT /accounts/:id
pub async fn update_account(
    State(handlers): State<AccountHandlers>,
    Path(id): Path<String>,
    body: Result<Json<AccountRequest>, JsonRejection>,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = UpdateAccountCommand {
        id,
        name: req.name,
        currency: req.currency,
        account_type: req.account_type,
        initial_balance: req.initial_balance,
        primary_owner_id: req.primary_owner_id,
        second_owner_id: req.second_owner_id,
    };

    match handlers.service.update(cmd).await {
        Ok(account) => (StatusCode::OK, Json(AccountResponse::from(account))).into_response(),
        Err(e) => service_error_response(e),
    }
}

/// DELETE /accounts/:id
pub async fn delete_account(
    State(handlers): State<AccountHandlers>,
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
