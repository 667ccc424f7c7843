//! Expense category repository port.

use crate::domain::expense_category::{ExpenseCategory, ExpenseCategoryDraft};
use crate::domain::foundation::{DomainError, ExpenseCategoryId, PageRequest, Timestamp};
use async_trait::async_trait;

/// Storage contract for expense categories. Names are unique.
#[async_trait]
pub trait ExpenseCategoryRepository: Send + Sync {
    /// # Errors
    ///
    /// - `Conflict` if a category with the same name exists
    async fn create(
        &self,
        draft: &ExpenseCategoryDraft,
        now: Timestamp,
    ) -> Result<ExpenseCategory, DomainError>;

    async fn find_by_id(&self, id: &ExpenseCategoryId) -> Result<Option<ExpenseCategory>, DomainError>;

    /// One page of categories, newest first.
    async fn list(&self, page: PageRequest) -> Result<Vec<ExpenseCategory>, DomainError>;

    /// # Errors
    ///
    /// - `NotFound` if the category doesn't exist
    /// - `Conflict` if the new name is taken
    async fn update(&self, category: &ExpenseCategory) -> Result<ExpenseCategory, DomainError>;

    async fn delete(&self, id: &ExpenseCategoryId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_category_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ExpenseCategoryRepository) {}
    }
}
