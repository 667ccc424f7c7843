//! HTTP DTOs for expense subcategory endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EntityId;
use crate::domain::ExpenseSubCategory;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExpenseSubCategoryRequest {
    pub name: String,
    pub expense_category_id: i64,
}

/// `expense_category_id` of zero or absent lists every category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListExpenseSubCategoriesParams {
    pub skip: i64,
    pub limit: i64,
    pub expense_category_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSubCategoryResponse {
    pub id: i64,
    pub name: String,
    pub expense_category_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ExpenseSubCategory> for ExpenseSubCategoryResponse {
    fn from(subcategory: ExpenseSubCategory) -> Self {
        Self {
            id: subcategory.id.as_i64(),
            name: subcategory.name,
            expense_category_id: subcategory.expense_category_id.as_i64(),
            created_at: subcategory.created_at.as_datetime().to_rfc3339(),
            updated_at: subcategory.updated_at.as_datetime().to_rfc3339(),
        }
    }
}
