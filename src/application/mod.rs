//! Application layer - domain services and the integrity rules they share.
//!
//! Services take raw command/query structs from the transport, run them
//! through the validators and the [`IntegrityChecker`], and delegate
//! persistence to the storage ports.

mod error;
mod integrity;
pub mod services;

use std::sync::Arc;

pub use error::ServiceError;
pub use integrity::IntegrityChecker;
pub use services::{
    AccountService, CreateAccountCommand, CreateExpenseCategoryCommand, CreateExpenseCommand,
    CreateExpenseSubCategoryCommand, CreatePersonCommand, ExpenseCategoryService, ExpenseService,
    ExpenseSubCategoryService, ListAccountsQuery, ListExpenseCategoriesQuery,
    ListExpenseSubCategoriesQuery, ListExpensesQuery, ListPersonsQuery, PersonService,
    UpdateAccountCommand, UpdateExpenseCategoryCommand, UpdateExpenseCommand,
    UpdateExpenseSubCategoryCommand, UpdatePersonCommand,
};

use crate::domain::foundation::DeletePolicy;
use crate::ports::Repositories;

/// Every service, wired against one set of repositories.
#[derive(Clone)]
pub struct Services {
    pub persons: Arc<PersonService>,
    pub accounts: Arc<AccountService>,
    pub categories: Arc<ExpenseCategoryService>,
    pub subcategories: Arc<ExpenseSubCategoryService>,
    pub expenses: Arc<ExpenseService>,
}

impl Services {
    pub fn new(repos: &Repositories, delete_policy: DeletePolicy) -> Self {
        let integrity = Arc::new(IntegrityChecker::new(repos.clone(), delete_policy));

        Self {
            persons: Arc::new(PersonService::new(repos.persons.clone(), integrity.clone())),
            accounts: Arc::new(AccountService::new(repos.accounts.clone(), integrity.clone())),
            categories: Arc::new(ExpenseCategoryService::new(
                repos.categories.clone(),
                integrity.clone(),
            )),
            subcategories: Arc::new(ExpenseSubCategoryService::new(
                repos.subcategories.clone(),
                integrity.clone(),
            )),
            expenses: Arc::new(ExpenseService::new(repos.expenses.clone(), integrity)),
        }
    }
}
