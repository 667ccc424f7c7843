//! ExpenseSubCategoryService - subcategories nested under a category.

use std::sync::Arc;

use super::path_id;
use crate::application::{IntegrityChecker, ServiceError};
use crate::domain::expense_subcategory::{ExpenseSubCategory, ExpenseSubCategoryDraft};
use crate::domain::foundation::{
    EntityId, ExpenseCategoryId, ExpenseSubCategoryId, PageRequest, Timestamp,
};
use crate::domain::validation;
use crate::ports::ExpenseSubCategoryRepository;

#[derive(Debug, Clone, Default)]
pub struct CreateExpenseSubCategoryCommand {
    pub name: String,
    pub expense_category_id: i64,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseSubCategoryCommand {
    pub id: i64,
    pub name: String,
    pub expense_category_id: i64,
}

/// `category_id <= 0` lists subcategories of every category.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListExpenseSubCategoriesQuery {
    pub skip: i64,
    pub limit: i64,
    pub category_id: i64,
}

pub struct ExpenseSubCategoryService {
    repository: Arc<dyn ExpenseSubCategoryRepository>,
    integrity: Arc<IntegrityChecker>,
}

impl ExpenseSubCategoryService {
    pub fn new(
        repository: Arc<dyn ExpenseSubCategoryRepository>,
        integrity: Arc<IntegrityChecker>,
    ) -> Self {
        Self {
            repository,
            integrity,
        }
    }

    pub async fn create(
        &self,
        cmd: CreateExpenseSubCategoryCommand,
    ) -> Result<ExpenseSubCategory, ServiceError> {
        let draft = ExpenseSubCategoryDraft::new(&cmd.name, cmd.expense_category_id)?;
        self.integrity
            .require_category("expense_category_id", draft.expense_category_id)
            .await?;

        tracing::info!(
            name = %draft.name,
            expense_category_id = %draft.expense_category_id,
            "creating expense subcategory"
        );
        Ok(self.repository.create(&draft, Timestamp::now()).await?)
    }

    pub async fn get(&self, id: i64) -> Result<ExpenseSubCategory, ServiceError> {
        let id: ExpenseSubCategoryId = path_id(id)?;
        self.fetch(id).await
    }

    pub async fn list(
        &self,
        query: ListExpenseSubCategoriesQuery,
    ) -> Result<Vec<ExpenseSubCategory>, ServiceError> {
        let page = PageRequest::bounded(query.skip, query.limit);
        let category = validation::filter_id::<ExpenseCategoryId>(query.category_id);
        tracing::info!(
            skip = page.skip(),
            limit = page.limit(),
            category_id = ?category,
            "listing expense subcategories"
        );
        Ok(self.repository.list(page, category).await?)
    }

    pub async fn update(
        &self,
        cmd: UpdateExpenseSubCategoryCommand,
    ) -> Result<ExpenseSubCategory, ServiceError> {
        let id: ExpenseSubCategoryId = path_id(cmd.id)?;
        let existing = self.fetch(id).await?;

        if cmd.name.trim().is_empty() && cmd.expense_category_id == 0 {
            return Err(ServiceError::NoUpdatedData);
        }

        let draft = ExpenseSubCategoryDraft::new(&cmd.name, cmd.expense_category_id)?;
        self.integrity
            .require_category("expense_category_id", draft.expense_category_id)
            .await?;
        if !existing.belongs_to(draft.expense_category_id) {
            self.integrity.ensure_subcategory_can_move(id).await?;
        }

        if existing.matches(&draft) {
            return Err(ServiceError::NoUpdatedData);
        }

        tracing::info!(id = %id, "updating expense subcategory");
        let updated = existing.with_changes(draft, Timestamp::now());
        Ok(self.repository.update(&updated).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let id: ExpenseSubCategoryId = path_id(id)?;
        self.fetch(id).await?;
        self.integrity.ensure_subcategory_unreferenced(id).await?;

        tracing::info!(id = %id, "deleting expense subcategory");
        self.repository.delete(&id).await?;
        Ok(())
    }

    async fn fetch(&self, id: ExpenseSubCategoryId) -> Result<ExpenseSubCategory, ServiceError> {
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::not_found("expense subcategory", id.as_i64()))
    }
}
