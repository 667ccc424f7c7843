//! In-memory expense storage.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::Table;
use crate::domain::expense::{Expense, ExpenseDraft};
use crate::domain::foundation::{DomainError, EntityId, ExpenseId, PageRequest, Timestamp};
use crate::ports::{ExpenseFilter, ExpenseReference, ExpenseRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryExpenseRepository {
    table: Arc<Mutex<Table<Expense>>>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn create(&self, draft: &ExpenseDraft, now: Timestamp) -> Result<Expense, DomainError> {
        let mut table = self.table.lock().await;
        let id = table.next_id();
        let expense = Expense {
            id: ExpenseId::from_raw(id),
            amount: draft.amount,
            category_id: draft.category_id,
            subcategory_id: draft.subcategory_id,
            date: draft.date,
            payee_id: draft.payee_id,
            account_id: draft.account_id,
            notes: draft.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        table.put(id, expense.clone());
        Ok(expense)
    }

    async fn find_by_id(&self, id: &ExpenseId) -> Result<Option<Expense>, DomainError> {
        Ok(self.table.lock().await.get(id.as_i64()))
    }

    async fn list(&self, page: PageRequest, filter: &ExpenseFilter) -> Result<Vec<Expense>, DomainError> {
        let table = self.table.lock().await;
        let mut rows: Vec<_> = table.rows().filter(|e| filter.matches(e)).cloned().collect();
        rows.sort_by_key(|e| Reverse((e.date, e.created_at, e.id)));
        Ok(page.apply(rows))
    }

    async fn update(&self, expense: &Expense) -> Result<Expense, DomainError> {
        let mut table = self.table.lock().await;
        if !table.contains(expense.id.as_i64()) {
            return Err(DomainError::not_found("expense", expense.id));
        }
        table.put(expense.id.as_i64(), expense.clone());
        Ok(expense.clone())
    }

    async fn delete(&self, id: &ExpenseId) -> Result<(), DomainError> {
        if self.table.lock().await.remove(id.as_i64()) {
            Ok(())
        } else {
            Err(DomainError::not_found("expense", id))
        }
    }

    async fn count_referencing(&self, reference: ExpenseReference) -> Result<u64, DomainError> {
        let table = self.table.lock().await;
        Ok(table
            .rows()
            .filter(|e| reference.is_referenced_by(e))
            .count() as u64)
    }
}
