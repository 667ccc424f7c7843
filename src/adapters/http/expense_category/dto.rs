//! HTTP DTOs for expense category endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EntityId;
use crate::domain::ExpenseCategory;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExpenseCategoryRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListExpenseCategoriesParams {
    pub skip: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategoryResponse {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ExpenseCategory> for ExpenseCategoryResponse {
    fn from(category: ExpenseCategory) -> Self {
        Self {
            id: category.id.as_i64(),
            name: category.name,
            created_at: category.created_at.as_datetime().to_rfc3339(),
            updated_at: category.updated_at.as_datetime().to_rfc3339(),
        }
    }
}
