//! Domain services, one per entity.
//!
//! Each service validates raw command input, runs the integrity checks,
//! rejects no-op updates, and delegates persistence to its repository port.

mod account_service;
mod expense_category_service;
mod expense_service;
mod expense_subcategory_service;
mod person_service;

pub use account_service::{AccountService, CreateAccountCommand, ListAccountsQuery, UpdateAccountCommand};
pub use expense_category_service::{
    CreateExpenseCategoryCommand, ExpenseCategoryService, ListExpenseCategoriesQuery,
    UpdateExpenseCategoryCommand,
};
pub use expense_service::{CreateExpenseCommand, ExpenseService, ListExpensesQuery, UpdateExpenseCommand};
pub use expense_subcategory_service::{
    CreateExpenseSubCategoryCommand, ExpenseSubCategoryService, ListExpenseSubCategoriesQuery,
    UpdateExpenseSubCategoryCommand,
};
pub use person_service::{CreatePersonCommand, ListPersonsQuery, PersonService, UpdatePersonCommand};

use crate::application::ServiceError;
use crate::domain::foundation::EntityId;
use crate::domain::validation;

/// Identifier taken from a request path; must be positive.
fn path_id<I: EntityId>(raw: i64) -> Result<I, ServiceError> {
    Ok(validation::required_id("id", raw)?)
}
