//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `PersonRepository` - People (payees and account owners)
//! - `AccountRepository` - Financial accounts
//! - `ExpenseCategoryRepository` / `ExpenseSubCategoryRepository` - Classification
//! - `ExpenseRepository` - Expense records, filtered listing
//!
//! `Repositories` bundles one handle per port so a backend can be chosen
//! once at startup and passed around as a unit.

mod account_repository;
mod expense_category_repository;
mod expense_repository;
mod expense_subcategory_repository;
mod person_repository;

use std::sync::Arc;

pub use account_repository::AccountRepository;
pub use expense_category_repository::ExpenseCategoryRepository;
pub use expense_repository::{ExpenseFilter, ExpenseReference, ExpenseRepository};
pub use expense_subcategory_repository::ExpenseSubCategoryRepository;
pub use person_repository::PersonRepository;

/// One storage handle per entity, all backed by the same store.
#[derive(Clone)]
pub struct Repositories {
    pub persons: Arc<dyn PersonRepository>,
    pub accounts: Arc<dyn AccountRepository>,
    pub categories: Arc<dyn ExpenseCategoryRepository>,
    pub subcategories: Arc<dyn ExpenseSubCategoryRepository>,
    pub expenses: Arc<dyn ExpenseRepository>,
}
