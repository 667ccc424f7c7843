//! In-memory account storage.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::Table;
use crate::domain::account::{Account, AccountDraft};
use crate::domain::foundation::{AccountId, DomainError, EntityId, PageRequest, PersonId, Timestamp};
use crate::ports::AccountRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    table: Arc<Mutex<Table<Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, draft: &AccountDraft, now: Timestamp) -> Result<Account, DomainError> {
        let mut table = self.table.lock().await;
        let id = table.next_id();
        let account = Account {
            id: AccountId::from_raw(id),
            name: draft.name.clone(),
            currency: draft.currency.clone(),
            account_type: draft.account_type.clone(),
            initial_balance: draft.initial_balance,
            primary_owner_id: draft.primary_owner_id,
            second_owner_id: draft.second_owner_id,
            created_at: now,
            updated_at: now,
        };
        table.put(id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        Ok(self.table.lock().await.get(id.as_i64()))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Account>, DomainError> {
        let table = self.table.lock().await;
        Ok(page.apply(table.rows().cloned()))
    }

    async fn update(&self, account: &Account) -> Result<Account, DomainError> {
        let mut table = self.table.lock().await;
        if !table.contains(account.id.as_i64()) {
            return Err(DomainError::not_found("account", account.id));
        }
        table.put(account.id.as_i64(), account.clone());
        Ok(account.clone())
    }

    async fn delete(&self, id: &AccountId) -> Result<(), DomainError> {
        if self.table.lock().await.remove(id.as_i64()) {
            Ok(())
        } else {
            Err(DomainError::not_found("account", id))
        }
    }

    async fn count_by_owner(&self, owner: &PersonId) -> Result<u64, DomainError> {
        let table = self.table.lock().await;
        Ok(table.rows().filter(|a| a.is_owned_by(*owner)).count() as u64)
    }
}
