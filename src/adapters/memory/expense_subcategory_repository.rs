//! In-memory expense subcategory storage.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::Table;
use crate::domain::expense_subcategory::{ExpenseSubCategory, ExpenseSubCategoryDraft};
use crate::domain::foundation::{
    DomainError, EntityId, ExpenseCategoryId, ExpenseSubCategoryId, PageRequest, Timestamp,
};
use crate::ports::ExpenseSubCategoryRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryExpenseSubCategoryRepository {
    table: Arc<Mutex<Table<ExpenseSubCategory>>>,
}

impl InMemoryExpenseSubCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_taken(
    table: &Table<ExpenseSubCategory>,
    category: ExpenseCategoryId,
    name: &str,
    except: Option<ExpenseSubCategoryId>,
) -> bool {
    table
        .rows()
        .any(|s| s.belongs_to(category) && s.name == name && Some(s.id) != except)
}

fn duplicate(category: ExpenseCategoryId, name: &str) -> DomainError {
    DomainError::conflict(format!(
        "expense subcategory {} already exists in category {}",
        name, category
    ))
}

#[async_trait]
impl ExpenseSubCategoryRepository for InMemoryExpenseSubCategoryRepository {
    async fn create(
        &self,
        draft: &ExpenseSubCategoryDraft,
        now: Timestamp,
    ) -> Result<ExpenseSubCategory, DomainError> {
        let mut table = self.table.lock().await;
        if name_taken(&table, draft.expense_category_id, &draft.name, None) {
            return Err(duplicate(draft.expense_category_id, &draft.name));
        }

        let id = table.next_id();
        let subcategory = ExpenseSubCategory {
            id: ExpenseSubCategoryId::from_raw(id),
            name: draft.name.clone(),
            expense_category_id: draft.expense_category_id,
            created_at: now,
            updated_at: now,
        };
        table.put(id, subcategory.clone());
        Ok(subcategory)
    }

    async fn find_by_id(
        &self,
        id: &ExpenseSubCategoryId,
    ) -> Result<Option<ExpenseSubCategory>, DomainError> {
        Ok(self.table.lock().await.get(id.as_i64()))
    }

    async fn list(
        &self,
        page: PageRequest,
        category: Option<ExpenseCategoryId>,
    ) -> Result<Vec<ExpenseSubCategory>, DomainError> {
        let table = self.table.lock().await;
        let mut rows: Vec<_> = table
            .rows()
            .filter(|s| category.map_or(true, |c| s.belongs_to(c)))
            .cloned()
            .collect();
        rows.sort_by_key(|s| Reverse((s.created_at, s.id)));
        Ok(page.apply(rows))
    }

    async fn update(&self, subcategory: &ExpenseSubCategory) -> Result<ExpenseSubCategory, DomainError> {
        let mut table = self.table.lock().await;
        if !table.contains(subcategory.id.as_i64()) {
            return Err(DomainError::not_found("expense subcategory", subcategory.id));
        }
        if name_taken(
            &table,
            subcategory.expense_category_id,
            &subcategory.name,
            Some(subcategory.id),
        ) {
            return Err(duplicate(subcategory.expense_category_id, &subcategory.name));
        }
        table.put(subcategory.id.as_i64(), subcategory.clone());
        Ok(subcategory.clone())
    }

    async fn delete(&self, id: &ExpenseSubCategoryId) -> Result<(), DomainError> {
        if self.table.lock().await.remove(id.as_i64()) {
            Ok(())
        } else {
            Err(DomainError::not_found("expense subcategory", id))
        }
    }

    async fn count_by_category(&self, category: &ExpenseCategoryId) -> Result<u64, DomainError> {
        let table = self.table.lock().await;
        Ok(table.rows().filter(|s| s.belongs_to(*category)).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_and_count_respect_category() {
        let repo = InMemoryExpenseSubCategoryRepository::new();
        let now = Timestamp::now();
        for (name, category) in [("Snacks", 1), ("Dining", 1), ("Flights", 2)] {
            repo.create(&ExpenseSubCategoryDraft::new(name, category).unwrap(), now)
                .await
                .unwrap();
        }

        let food = ExpenseCategoryId::from_raw(1);
        let rows = repo.list(PageRequest::default(), Some(food)).await.unwrap();
        let names: Vec<_> = rows.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Dining", "Snacks"]);
        assert_eq!(repo.count_by_category(&food).await.unwrap(), 2);
        assert_eq!(repo.list(PageRequest::default(), None).await.unwrap().len(), 3);
    }
}
