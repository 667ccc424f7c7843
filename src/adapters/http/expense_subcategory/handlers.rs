//! HTTP handlers for expense subcategory endpoints.

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
    CreateExpenseSubCategoryCommand, ExpenseSubCategoryService, ListExpenseSubCategoriesQuery,
    UpdateExpenseSubCategoryCommand,
};

use super::dto::{
    ExpenseSubCategoryRequest, ExpenseSubCategoryResponse, ListExpenseSubCategoriesParams,
};

#[derive(Clone)]
pub struct ExpenseSubCategoryHandlers {
    service: Arc<ExpenseSubCategoryService>,
}

impl ExpenseSubCategoryHandlers {
    pub fn new(service: Arc<ExpenseSubCategoryService>) -> Self {
        Self { service }
    }
}

/// POST /expenses/categories/subcategories
pub async fn create_subcategory(
    State(handlers): State<ExpenseSubCategoryHandlers>,
    body: Result<Json<ExpenseSubCategoryRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = CreateExpenseSubCategoryCommand {
        name: req.name,
        expense_category_id: req.expense_category_id,
    };

    match handlers.service.create(cmd).await {
        Ok(subcategory) => (
            StatusCode::CREATED,
            Json(ExpenseSubCategoryResponse::from(subcategory)),
        )
            .into_response(),
        Err(e) => service_error_response(e),
    }
}

/// GET /expenses/categories/subcategories/:id
pub async fn get_subcategory(
    State(handlers): State<ExpenseSubCategoryHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.service.get(id).await {
        Ok(subcategory) => {
            (StatusCode::OK, Json(ExpenseSubCategoryResponse::from(subcategory))).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

/// GET /expenses/categories/subcategories
pub async fn list_subcategories(
    State(handlers): State<ExpenseSubCategoryHandlers>,
    params: Result<Query<ListExpenseSubCategoriesParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection(rejection),
    };

    let query = ListExpenseSubCategoriesQuery {
        skip: params.skip,
        limit: params.limit,
        category_id: params.expense_category_id,
    };

    match handlers.service.list(query).await {
        Ok(subcategories) => {
            let body: Vec<ExpenseSubCategoryResponse> =
                subcategories.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

/// PUT /expenses/categories/subcategories/:id
pub async fn update_subcategory(
    State(handlers): State<ExpenseSubCategoryHandlers>,
    Path(id): Path<String>,
    body: Result<Json<ExpenseSubCategoryRequest>, JsonRejection>,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = UpdateExpenseSubCategoryCommand {
        id,
        name: req.name,
        expense_category_id: req.expense_category_id,
    };

    match handlers.service.update(cmd).await {
        Ok(subcategory) => {
            (StatusCode::OK, Json(ExpenseSubCategoryResponse::from(subcategory))).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

/// DELETE /expenses/categories/subcategories/:id
pub async fn delete_subcategory(
    State(handlers): State<ExpenseSubCategoryHandlers>,
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
