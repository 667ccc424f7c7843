//! Expense subcategory repository port.

use crate::domain::expense_subcategory::{ExpenseSubCategory, ExpenseSubCategoryDraft};
use crate::domain::foundation::{
    DomainError, ExpenseCategoryId, ExpenseSubCategoryId, PageRequest, Timestamp,
};
use async_trait::async_trait;

/// Storage contract for expense subcategories.
///
/// `(expense_category_id, name)` is unique.
#[async_trait]
pub trait ExpenseSubCategoryRepository: Send + Sync {
    async fn create(
        &self,
        draft: &ExpenseSubCategoryDraft,
        now: Timestamp,
    ) -> Result<ExpenseSubCategory, DomainError>;

    async fn find_by_id(
        &self,
        id: &ExpenseSubCategoryId,
    ) -> Result<Option<ExpenseSubCategory>, DomainError>;

    /// One page of subcategories, newest first, optionally restricted to
    /// one parent category.
    async fn list(
        &self,
        page: PageRequest,
        category: Option<ExpenseCategoryId>,
    ) -> Result<Vec<ExpenseSubCategory>, DomainError>;

    async fn update(&self, subcategory: &ExpenseSubCategory) -> Result<ExpenseSubCategory, DomainError>;

    async fn delete(&self, id: &ExpenseSubCategoryId) -> Result<(), DomainError>;

    /// Number of subcategories under `category`.
    async fn count_by_category(&self, category: &ExpenseCategoryId) -> Result<u64, DomainError>;
}
