//! Account repository port.

use crate::domain::account::{Account, AccountDraft};
use crate::domain::foundation::{AccountId, DomainError, PageRequest, PersonId, Timestamp};
use async_trait::async_trait;

/// Storage contract for accounts.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account and return the stored row.
    async fn create(&self, draft: &AccountDraft, now: Timestamp) -> Result<Account, DomainError>;

    /// Find an account by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;

    /// One page of accounts ordered by id ascending.
    async fn list(&self, page: PageRequest) -> Result<Vec<Account>, DomainError>;

    /// Overwrite the mutable fields of an existing account.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the account doesn't exist
    async fn update(&self, account: &Account) -> Result<Account, DomainError>;

    /// Remove an account.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the account doesn't exist
    async fn delete(&self, id: &AccountId) -> Result<(), DomainError>;

    /// Number of accounts naming `owner` as primary or second owner.
    async fn count_by_owner(&self, owner: &PersonId) -> Result<u64, DomainError>;
}
