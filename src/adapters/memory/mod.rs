//! In-memory storage adapters.
//!
//! Every entity lives in its own [`Table`] behind a single
//! `tokio::sync::Mutex`. Identifiers come from a per-table counter that only
//! grows, so ids are never reused after a delete. Useful for tests and
//! local development.

mod account_repository;
mod expense_category_repository;
mod expense_repository;
mod expense_subcategory_repository;
mod person_repository;

use std::collections::BTreeMap;
use std::sync::Arc;

pub use account_repository::InMemoryAccountRepository;
pub use expense_category_repository::InMemoryExpenseCategoryRepository;
pub use expense_repository::InMemoryExpenseRepository;
pub use expense_subcategory_repository::InMemoryExpenseSubCategoryRepository;
pub use person_repository::InMemoryPersonRepository;

use crate::ports::Repositories;

/// Rows of one entity keyed by raw id, plus the id counter.
#[derive(Debug)]
pub(crate) struct Table<T> {
    last_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T: Clone> Table<T> {
    pub(crate) fn new() -> Self {
        Self {
            last_id: 0,
            rows: BTreeMap::new(),
        }
    }

    /// Reserve the next identifier.
    pub(crate) fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    pub(crate) fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub(crate) fn contains(&self, id: i64) -> bool {
        self.rows.contains_key(&id)
    }

    /// Rows in ascending id order.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub(crate) fn put(&mut self, id: i64, row: T) {
        self.rows.insert(id, row);
    }

    pub(crate) fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A fresh, empty in-memory store for every entity.
pub fn in_memory_repositories() -> Repositories {
    Repositories {
        persons: Arc::new(InMemoryPersonRepository::new()),
        accounts: Arc::new(InMemoryAccountRepository::new()),
        categories: Arc::new(InMemoryExpenseCategoryRepository::new()),
        subcategories: Arc::new(InMemoryExpenseSubCategoryRepository::new()),
        expenses: Arc::new(InMemoryExpenseRepository::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut table: Table<&str> = Table::new();
        let first = table.next_id();
        table.put(first, "a");
        assert!(table.remove(first));

        let second = table.next_id();
        assert_eq!(second, 2);
        assert!(!table.contains(first));
    }

    #[test]
    fn rows_iterate_in_id_order() {
        let mut table: Table<i64> = Table::new();
        for _ in 0..3 {
            let id = table.next_id();
            table.put(id, id * 10);
        }
        let values: Vec<_> = table.rows().copied().collect();
        assert_eq!(values, vec![10, 20, 30]);
    }
}
