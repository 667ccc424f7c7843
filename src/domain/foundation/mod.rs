//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the bookkeeping domain.

mod delete_policy;
mod errors;
mod ids;
mod pagination;
mod timestamp;

pub use delete_policy::DeletePolicy;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AccountId, EntityId, ExpenseCategoryId, ExpenseId, ExpenseSubCategoryId, PersonId};
pub use pagination::{PageRequest, DEFAULT_LIMIT, MAX_LIMIT};
pub use timestamp::Timestamp;
