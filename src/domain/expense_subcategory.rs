//! Expense subcategory, always nested under one category.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExpenseCategoryId, ExpenseSubCategoryId, Timestamp, ValidationError};
use crate::domain::validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSubCategory {
    pub id: ExpenseSubCategoryId,
    pub name: String,
    pub expense_category_id: ExpenseCategoryId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSubCategoryDraft {
    pub name: String,
    pub expense_category_id: ExpenseCategoryId,
}

impl ExpenseSubCategoryDraft {
    pub fn new(name: &str, expense_category_id: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validation::required_name("name", name)?,
            expense_category_id: validation::required_id(
                "expense_category_id",
                expense_category_id,
            )?,
        })
    }
}

impl ExpenseSubCategory {
    pub fn matches(&self, draft: &ExpenseSubCategoryDraft) -> bool {
        self.name == draft.name && self.expense_category_id == draft.expense_category_id
    }

    pub fn with_changes(&self, draft: ExpenseSubCategoryDraft, now: Timestamp) -> ExpenseSubCategory {
        ExpenseSubCategory {
            id: self.id,
            name: draft.name,
            expense_category_id: draft.expense_category_id,
            created_at: self.created_at,
            updated_at: now,
        }
    }

    /// Whether this subcategory sits under `category`.
    pub fn belongs_to(&self, category: ExpenseCategoryId) -> bool {
        self.expense_category_id == category
    }
}
