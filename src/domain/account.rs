//! Account: a financial account owned by one or two people.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, PersonId, Timestamp, ValidationError};
use crate::domain::validation;

/// Stored account record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub currency: String,
    pub account_type: String,
    pub initial_balance: f64,
    pub primary_owner_id: PersonId,
    pub second_owner_id: Option<PersonId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated, normalized account fields ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDraft {
    pub name: String,
    pub currency: String,
    pub account_type: String,
    pub initial_balance: f64,
    pub primary_owner_id: PersonId,
    pub second_owner_id: Option<PersonId>,
}

impl AccountDraft {
    pub fn new(
        name: &str,
        currency: &str,
        account_type: &str,
        initial_balance: f64,
        primary_owner_id: i64,
        second_owner_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validation::required_name("name", name)?,
            currency: validation::required_text("currency", currency)?.to_uppercase(),
            account_type: validation::required_text("account_type", account_type)?,
            initial_balance: validation::finite_amount("initial_balance", initial_balance)?,
            primary_owner_id: validation::required_id("primary_owner_id", primary_owner_id)?,
            second_owner_id: validation::optional_id("second_owner_id", second_owner_id)?,
        })
    }

    /// Every person this account points at, primary owner first.
    pub fn owner_ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        std::iter::once(self.primary_owner_id).chain(self.second_owner_id)
    }
}

impl Account {
    /// True when writing `draft` would not change any mutable field.
    pub fn matches(&self, draft: &AccountDraft) -> bool {
        self.name == draft.name
            && self.currency == draft.currency
            && self.account_type == draft.account_type
            && self.initial_balance == draft.initial_balance
            && self.primary_owner_id == draft.primary_owner_id
            && self.second_owner_id == draft.second_owner_id
    }

    /// Copy of this record carrying the draft's fields.
    pub fn with_changes(&self, draft: AccountDraft, now: Timestamp) -> Account {
        Account {
            id: self.id,
            name: draft.name,
            currency: draft.currency,
            account_type: draft.account_type,
            initial_balance: draft.initial_balance,
            primary_owner_id: draft.primary_owner_id,
            second_owner_id: draft.second_owner_id,
            created_at: self.created_at,
            updated_at: now,
        }
    }

    /// Whether `person` owns this account, as primary or second owner.
    pub fn is_owned_by(&self, person: PersonId) -> bool {
        self.primary_owner_id == person || self.second_owner_id == Some(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EntityId;

    fn checking() -> AccountDraft {
        AccountDraft::new("Checking", "usd", "checking", 150.0, 1, None).unwrap()
    }

    #[test]
    fn draft_normalizes_currency() {
        assert_eq!(checking().currency, "USD");
    }

    #[test]
    fn draft_requires_positive_primary_owner() {
        let err = AccountDraft::new("Checking", "USD", "checking", 0.0, 0, None).unwrap_err();
        assert_eq!(err.field(), "primary_owner_id");
    }

    #[test]
    fn draft_rejects_zero_second_owner() {
        let err = AccountDraft::new("Checking", "USD", "checking", 0.0, 1, Some(0)).unwrap_err();
        assert_eq!(err.field(), "second_owner_id");
    }

    #[test]
    fn owner_ids_lists_both_owners() {
        let draft = AccountDraft::new("Joint", "EUR", "savings", 0.0, 1, Some(2)).unwrap();
        let owners: Vec<_> = draft.owner_ids().collect();
        assert_eq!(owners, vec![PersonId::from_raw(1), PersonId::from_raw(2)]);
    }

    #[test]
    fn matches_compares_optional_owner() {
        let now = Timestamp::now();
        let account = Account {
            id: AccountId::from_raw(1),
            name: "Checking".to_string(),
            currency: "USD".to_string(),
            account_type: "checking".to_string(),
            initial_balance: 150.0,
            primary_owner_id: PersonId::from_raw(1),
            second_owner_id: None,
            created_at: now,
            updated_at: now,
        };

        assert!(account.matches(&checking()));

        let mut joint = checking();
        joint.second_owner_id = Some(PersonId::from_raw(2));
        assert!(!account.matches(&joint));
        assert!(account.is_owned_by(PersonId::from_raw(1)));
        assert!(!account.is_owned_by(PersonId::from_raw(2)));
    }
}
