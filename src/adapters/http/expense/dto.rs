//! HTTP DTOs for expense endpoints.

use serde::{Deserialize, Serialize};

use crate::application::ListExpensesQuery;
use crate::domain::foundation::EntityId;
use crate::domain::{Expense, ExpenseInput};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of both create and update requests. `date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExpenseRequest {
    pub amount: f64,
    pub category_id: i64,
    pub subcategory_id: Option<i64>,
    pub date: String,
    pub payee_id: i64,
    pub account_id: i64,
    pub notes: String,
}

impl From<ExpenseRequest> for ExpenseInput {
    fn from(req: ExpenseRequest) -> Self {
        ExpenseInput {
            amount: req.amount,
            category_id: req.category_id,
            subcategory_id: req.subcategory_id,
            date: req.date,
            payee_id: req.payee_id,
            account_id: req.account_id,
            notes: req.notes,
        }
    }
}

/// Filters for listing. Zero ids and empty dates are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListExpensesParams {
    pub skip: i64,
    pub limit: i64,
    pub category_id: i64,
    pub subcategory_id: i64,
    pub payee_id: i64,
    pub account_id: i64,
    pub start_date: String,
    pub end_date: String,
}

impl From<ListExpensesParams> for ListExpensesQuery {
    fn from(params: ListExpensesParams) -> Self {
        ListExpensesQuery {
            skip: params.skip,
            limit: params.limit,
            category_id: params.category_id,
            subcategory_id: params.subcategory_id,
            payee_id: params.payee_id,
            account_id: params.account_id,
            start_date: params.start_date,
            end_date: params.end_date,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseResponse {
    pub id: i64,
    pub amount: f64,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<i64>,
    pub date: String,
    pub payee_id: i64,
    pub account_id: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id.as_i64(),
            amount: expense.amount,
            category_id: expense.category_id.as_i64(),
            subcategory_id: expense.subcategory_id.map(|id| id.as_i64()),
            date: expense.date.date().format("%Y-%m-%d").to_string(),
            payee_id: expense.payee_id.as_i64(),
            account_id: expense.account_id.as_i64(),
            notes: expense.notes,
            created_at: expense.created_at.as_datetime().to_rfc3339(),
            updated_at: expense.updated_at.as_datetime().to_rfc3339(),
        }
    }
}
