//! Expense: a payment out of an account to a payee, classified by category.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AccountId, ExpenseCategoryId, ExpenseId, ExpenseSubCategoryId, PersonId, Timestamp,
    ValidationError,
};
use crate::domain::validation;

/// Stored expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: f64,
    pub category_id: ExpenseCategoryId,
    pub subcategory_id: Option<ExpenseSubCategoryId>,
    /// Day of the expense, held at 00:00:00 UTC.
    pub date: Timestamp,
    pub payee_id: PersonId,
    pub account_id: AccountId,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated, normalized expense fields ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub category_id: ExpenseCategoryId,
    pub subcategory_id: Option<ExpenseSubCategoryId>,
    pub date: Timestamp,
    pub payee_id: PersonId,
    pub account_id: AccountId,
    pub notes: String,
}

/// Raw expense fields as they arrive from a caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseInput {
    pub amount: f64,
    pub category_id: i64,
    pub subcategory_id: Option<i64>,
    pub date: String,
    pub payee_id: i64,
    pub account_id: i64,
    pub notes: String,
}

impl ExpenseInput {
    /// True when every field holds its zero value, ignoring surrounding
    /// whitespace in the text fields.
    pub fn is_empty(&self) -> bool {
        self.amount == 0.0
            && self.category_id == 0
            && self.subcategory_id.is_none()
            && self.date.trim().is_empty()
            && self.payee_id == 0
            && self.account_id == 0
            && self.notes.trim().is_empty()
    }
}

impl ExpenseDraft {
    pub fn new(input: &ExpenseInput) -> Result<Self, ValidationError> {
        let date = validation::date("date", &input.date)?;
        Ok(Self {
            amount: validation::non_negative_amount("amount", input.amount)?,
            category_id: validation::required_id("category_id", input.category_id)?,
            subcategory_id: validation::optional_id("subcategory_id", input.subcategory_id)?,
            date: Timestamp::start_of_day(date),
            payee_id: validation::required_id("payee_id", input.payee_id)?,
            account_id: validation::required_id("account_id", input.account_id)?,
            notes: validation::notes(&input.notes),
        })
    }
}

impl Expense {
    /// True when writing `draft` would not change any mutable field.
    pub fn matches(&self, draft: &ExpenseDraft) -> bool {
        self.amount == draft.amount
            && self.category_id == draft.category_id
            && self.subcategory_id == draft.subcategory_id
            && self.date == draft.date
            && self.payee_id == draft.payee_id
            && self.account_id == draft.account_id
            && self.notes == draft.notes
    }

    /// Copy of this record carrying the draft's fields.
    pub fn with_changes(&self, draft: ExpenseDraft, now: Timestamp) -> Expense {
        Expense {
            id: self.id,
            amount: draft.amount,
            category_id: draft.category_id,
            subcategory_id: draft.subcategory_id,
            date: draft.date,
            payee_id: draft.payee_id,
            account_id: draft.account_id,
            notes: draft.notes,
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EntityId;
    use chrono::NaiveDate;

    fn lunch() -> ExpenseInput {
        ExpenseInput {
            amount: 12.5,
            category_id: 1,
            subcategory_id: Some(1),
            date: "2024-06-01".to_string(),
            payee_id: 1,
            account_id: 1,
            notes: "  lunch  ".to_string(),
        }
    }

    #[test]
    fn draft_normalizes_input() {
        let draft = ExpenseDraft::new(&lunch()).unwrap();
        assert_eq!(draft.notes, "lunch");
        assert_eq!(draft.date.date(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(draft.subcategory_id, Some(ExpenseSubCategoryId::from_raw(1)));
    }

    #[test]
    fn draft_rejects_negative_amount() {
        let input = ExpenseInput {
            amount: -1.0,
            ..lunch()
        };
        assert_eq!(ExpenseDraft::new(&input).unwrap_err().field(), "amount");
    }

    #[test]
    fn draft_rejects_bad_date() {
        let input = ExpenseInput {
            date: "06/01/2024".to_string(),
            ..lunch()
        };
        assert_eq!(ExpenseDraft::new(&input).unwrap_err().field(), "date");
    }

    #[test]
    fn empty_input_is_detected() {
        assert!(ExpenseInput::default().is_empty());
        assert!(!lunch().is_empty());
    }

    #[test]
    fn whitespace_only_text_counts_as_empty() {
        let blank = ExpenseInput {
            date: "  ".to_string(),
            notes: " \t ".to_string(),
            ..Default::default()
        };
        assert!(blank.is_empty());

        let with_subcategory = ExpenseInput {
            subcategory_id: Some(1),
            ..Default::default()
        };
        assert!(!with_subcategory.is_empty());
    }

    #[test]
    fn matches_ignores_surrounding_whitespace_in_notes() {
        let draft = ExpenseDraft::new(&lunch()).unwrap();
        let now = Timestamp::now();
        let stored = Expense {
            id: ExpenseId::from_raw(1),
            amount: 12.5,
            category_id: ExpenseCategoryId::from_raw(1),
            subcategory_id: Some(ExpenseSubCategoryId::from_raw(1)),
            date: draft.date,
            payee_id: PersonId::from_raw(1),
            account_id: AccountId::from_raw(1),
            notes: "lunch".to_string(),
            created_at: now,
            updated_at: now,
        };
        assert!(stored.matches(&draft));

        let changed = ExpenseDraft {
            subcategory_id: None,
            ..draft
        };
        assert!(!stored.matches(&changed));
    }
}
