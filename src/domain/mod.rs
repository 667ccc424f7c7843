//! Domain layer containing business rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, pagination, errors)
//! - `validation` - Field-level validators returning normalized values
//! - `person`, `account`, `expense_category`, `expense_subcategory`, `expense` -
//!   stored records and their validated drafts

pub mod account;
pub mod expense;
pub mod expense_category;
pub mod expense_subcategory;
pub mod foundation;
pub mod person;
pub mod validation;

pub use account::{Account, AccountDraft};
pub use expense::{Expense, ExpenseDraft, ExpenseInput};
pub use expense_category::{ExpenseCategory, ExpenseCategoryDraft};
pub use expense_subcategory::{ExpenseSubCategory, ExpenseSubCategoryDraft};
pub use person::{Person, PersonDraft};
