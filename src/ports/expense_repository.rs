//! Expense repository port.

use crate::domain::expense::{Expense, ExpenseDraft};
use crate::domain::foundation::{
    AccountId, DomainError, ExpenseCategoryId, ExpenseId, ExpenseSubCategoryId, PageRequest,
    PersonId, Timestamp,
};
use async_trait::async_trait;

/// Optional restrictions applied when listing expenses.
///
/// Every `None` means "do not filter on this column". Date bounds are
/// inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub category: Option<ExpenseCategoryId>,
    pub subcategory: Option<ExpenseSubCategoryId>,
    pub payee: Option<PersonId>,
    pub account: Option<AccountId>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

impl ExpenseFilter {
    /// Whether `expense` passes every active restriction.
    pub fn matches(&self, expense: &Expense) -> bool {
        self.category.map_or(true, |c| expense.category_id == c)
            && self
                .subcategory
                .map_or(true, |s| expense.subcategory_id == Some(s))
            && self.payee.map_or(true, |p| expense.payee_id == p)
            && self.account.map_or(true, |a| expense.account_id == a)
            && self.start.map_or(true, |s| expense.date >= s)
            && self.end.map_or(true, |e| expense.date <= e)
    }
}

/// A foreign row an expense may point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseReference {
    Payee(PersonId),
    Account(AccountId),
    Category(ExpenseCategoryId),
    SubCategory(ExpenseSubCategoryId),
}

impl ExpenseReference {
    /// Whether `expense` points at this row.
    pub fn is_referenced_by(&self, expense: &Expense) -> bool {
        match *self {
            ExpenseReference::Payee(id) => expense.payee_id == id,
            ExpenseReference::Account(id) => expense.account_id == id,
            ExpenseReference::Category(id) => expense.category_id == id,
            ExpenseReference::SubCategory(id) => expense.subcategory_id == Some(id),
        }
    }
}

/// Storage contract for expenses.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn create(&self, draft: &ExpenseDraft, now: Timestamp) -> Result<Expense, DomainError>;

    async fn find_by_id(&self, id: &ExpenseId) -> Result<Option<Expense>, DomainError>;

    /// One page of matching expenses ordered by date, then creation time,
    /// newest first.
    async fn list(&self, page: PageRequest, filter: &ExpenseFilter) -> Result<Vec<Expense>, DomainError>;

    /// # Errors
    ///
    /// - `NotFound` if the expense doesn't exist
    async fn update(&self, expense: &Expense) -> Result<Expense, DomainError>;

    async fn delete(&self, id: &ExpenseId) -> Result<(), DomainError>;

    /// Number of expenses pointing at `reference`.
    async fn count_referencing(&self, reference: ExpenseReference) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EntityId;
    use chrono::NaiveDate;

    fn expense_on(day: u32) -> Expense {
        let now = Timestamp::now();
        Expense {
            id: ExpenseId::from_raw(1),
            amount: 5.0,
            category_id: ExpenseCategoryId::from_raw(1),
            subcategory_id: None,
            date: Timestamp::start_of_day(NaiveDate::from_ymd_opt(2024, 5, day).unwrap()),
            payee_id: PersonId::from_raw(2),
            account_id: AccountId::from_raw(3),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn expense_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ExpenseRepository) {}
    }

    #[test]
    fn default_filter_matches_everything() {
        assert!(ExpenseFilter::default().matches(&expense_on(1)));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let may = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
        let filter = ExpenseFilter {
            start: Some(Timestamp::start_of_day(may(1))),
            end: Some(Timestamp::end_of_day(may(1))),
            ..Default::default()
        };
        assert!(filter.matches(&expense_on(1)));
        assert!(!filter.matches(&expense_on(2)));
    }

    #[test]
    fn subcategory_filter_skips_expenses_without_one() {
        let filter = ExpenseFilter {
            subcategory: Some(ExpenseSubCategoryId::from_raw(1)),
            ..Default::default()
        };
        assert!(!filter.matches(&expense_on(1)));
    }

    #[test]
    fn reference_checks_the_right_column() {
        let expense = expense_on(1);
        assert!(ExpenseReference::Payee(PersonId::from_raw(2)).is_referenced_by(&expense));
        assert!(!ExpenseReference::Payee(PersonId::from_raw(3)).is_referenced_by(&expense));
        assert!(ExpenseReference::Account(AccountId::from_raw(3)).is_referenced_by(&expense));
        assert!(!ExpenseReference::SubCategory(ExpenseSubCategoryId::from_raw(1))
            .is_referenced_by(&expense));
    }
}
