//! ExpenseCategoryService - top-level expense classification.

use std::sync::Arc;

use super::path_id;
use crate::application::{IntegrityChecker, ServiceError};
use crate::domain::expense_category::{ExpenseCategory, ExpenseCategoryDraft};
use crate::domain::foundation::{EntityId, ExpenseCategoryId, PageRequest, Timestamp};
use crate::ports::ExpenseCategoryRepository;

#[derive(Debug, Clone, Default)]
pub struct CreateExpenseCategoryCommand {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseCategoryCommand {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListExpenseCategoriesQuery {
    pub skip: i64,
    pub limit: i64,
}

pub struct ExpenseCategoryService {
    repository: Arc<dyn ExpenseCategoryRepository>,
    integrity: Arc<IntegrityChecker>,
}

impl ExpenseCategoryService {
    pub fn new(
        repository: Arc<dyn ExpenseCategoryRepository>,
        integrity: Arc<IntegrityChecker>,
    ) -> Self {
        Self {
            repository,
            integrity,
        }
    }

    pub async fn create(&self, cmd: CreateExpenseCategoryCommand) -> Result<ExpenseCategory, ServiceError> {
        let draft = ExpenseCategoryDraft::new(&cmd.name)?;
        tracing::info!(name = %draft.name, "creating expense category");
        Ok(self.repository.create(&draft, Timestamp::now()).await?)
    }

    pub async fn get(&self, id: i64) -> Result<ExpenseCategory, ServiceError> {
        let id: ExpenseCategoryId = path_id(id)?;
        self.fetch(id).await
    }

    /// Newest first. Limits outside `1..=100` fall back to 10.
    pub async fn list(
        &self,
        query: ListExpenseCategoriesQuery,
    ) -> Result<Vec<ExpenseCategory>, ServiceError> {
        let page = PageRequest::bounded(query.skip, query.limit);
        tracing::info!(skip = page.skip(), limit = page.limit(), "listing expense categories");
        Ok(self.repository.list(page).await?)
    }

    pub async fn update(&self, cmd: UpdateExpenseCategoryCommand) -> Result<ExpenseCategory, ServiceError> {
        let id: ExpenseCategoryId = path_id(cmd.id)?;
        let existing = self.fetch(id).await?;

        if cmd.name.trim().is_empty() {
            return Err(ServiceError::NoUpdatedData);
        }

        let draft = ExpenseCategoryDraft::new(&cmd.name)?;
        if existing.matches(&draft) {
            return Err(ServiceError::NoUpdatedData);
        }

        tracing::info!(id = %id, name = %draft.name, "updating expense category");
        let updated = existing.with_changes(draft, Timestamp::now());
        Ok(self.repository.update(&updated).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let id: ExpenseCategoryId = path_id(id)?;
        self.fetch(id).await?;
        self.integrity.ensure_category_unreferenced(id).await?;

        tracing::info!(id = %id, "deleting expense category");
        self.repository.delete(&id).await?;
        Ok(())
    }

    async fn fetch(&self, id: ExpenseCategoryId) -> Result<ExpenseCategory, ServiceError> {
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::not_found("expense category", id.as_i64()))
    }
}
