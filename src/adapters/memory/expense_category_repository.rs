//! In-memory expense category storage.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::Table;
use crate::domain::expense_category::{ExpenseCategory, ExpenseCategoryDraft};
use crate::domain::foundation::{DomainError, EntityId, ExpenseCategoryId, PageRequest, Timestamp};
use crate::ports::ExpenseCategoryRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryExpenseCategoryRepository {
    table: Arc<Mutex<Table<ExpenseCategory>>>,
}

impl InMemoryExpenseCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_taken(table: &Table<ExpenseCategory>, name: &str, except: Option<ExpenseCategoryId>) -> bool {
    table.rows().any(|c| c.name == name && Some(c.id) != except)
}

#[async_trait]
impl ExpenseCategoryRepository for InMemoryExpenseCategoryRepository {
    async fn create(
        &self,
        draft: &ExpenseCategoryDraft,
        now: Timestamp,
    ) -> Result<ExpenseCategory, DomainError> {
        let mut table = self.table.lock().await;
        if name_taken(&table, &draft.name, None) {
            return Err(DomainError::conflict(format!("expense category already exists: {}", draft.name)));
        }

        let id = table.next_id();
        let category = ExpenseCategory {
            id: ExpenseCategoryId::from_raw(id),
            name: draft.name.clone(),
            created_at: now,
            updated_at: now,
        };
        table.put(id, category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: &ExpenseCategoryId) -> Result<Option<ExpenseCategory>, DomainError> {
        Ok(self.table.lock().await.get(id.as_i64()))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<ExpenseCategory>, DomainError> {
        let table = self.table.lock().await;
        let mut rows: Vec<_> = table.rows().cloned().collect();
        rows.sort_by_key(|c| Reverse((c.created_at, c.id)));
        Ok(page.apply(rows))
    }

    async fn update(&self, category: &ExpenseCategory) -> Result<ExpenseCategory, DomainError> {
        let mut table = self.table.lock().await;
        if !table.contains(category.id.as_i64()) {
            return Err(DomainError::not_found("expense category", category.id));
        }
        if name_taken(&table, &category.name, Some(category.id)) {
            return Err(DomainError::conflict(format!(
                "expense category already exists: {}",
                category.name
            )));
        }
        table.put(category.id.as_i64(), category.clone());
        Ok(category.clone())
    }

    async fn delete(&self, id: &ExpenseCategoryId) -> Result<(), DomainError> {
        if self.table.lock().await.remove(id.as_i64()) {
            Ok(())
        } else {
            Err(DomainError::not_found("expense category", id))
        }
    }
}
