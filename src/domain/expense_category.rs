//! Expense category.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExpenseCategoryId, Timestamp, ValidationError};
use crate::domain::validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub id: ExpenseCategoryId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseCategoryDraft {
    pub name: String,
}

impl ExpenseCategoryDraft {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validation::required_name("name", name)?,
        })
    }
}

impl ExpenseCategory {
    pub fn matches(&self, draft: &ExpenseCategoryDraft) -> bool {
        self.name == draft.name
    }

    pub fn with_changes(&self, draft: ExpenseCategoryDraft, now: Timestamp) -> ExpenseCategory {
        ExpenseCategory {
            id: self.id,
            name: draft.name,
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EntityId;

    #[test]
    fn draft_trims_name() {
        assert_eq!(ExpenseCategoryDraft::new(" Food ").unwrap().name, "Food");
        assert!(ExpenseCategoryDraft::new("").is_err());
    }

    #[test]
    fn matches_compares_trimmed_name() {
        let now = Timestamp::now();
        let category = ExpenseCategory {
            id: ExpenseCategoryId::from_raw(1),
            name: "Food".to_string(),
            created_at: now,
            updated_at: now,
        };
        assert!(category.matches(&ExpenseCategoryDraft::new("  Food").unwrap()));
        assert!(!category.matches(&ExpenseCategoryDraft::new("Groceries").unwrap()));
    }
}
