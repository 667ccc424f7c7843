//! Strongly-typed identifier value objects.
//!
//! Identifiers are positive 64-bit integers assigned by storage. The raw
//! constructor is reserved for adapters reading rows back; input coming from
//! callers goes through [`crate::domain::validation::required_id`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Common behaviour of storage-assigned identifiers.
pub trait EntityId: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Wraps a raw value without validation.
    fn from_raw(raw: i64) -> Self;

    /// Returns the raw value.
    fn as_i64(&self) -> i64;
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl EntityId for $name {
            fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a person (payee or account owner).
    PersonId
);
entity_id!(
    /// Identifier of a financial account.
    AccountId
);
entity_id!(
    /// Identifier of an expense category.
    ExpenseCategoryId
);
entity_id!(
    /// Identifier of an expense subcategory.
    ExpenseSubCategoryId
);
entity_id!(
    /// Identifier of an expense record.
    ExpenseId
);
