//! AccountService - accounts and their owner references.

use std::sync::Arc;

use super::path_id;
use crate::application::{IntegrityChecker, ServiceError};
use crate::domain::account::{Account, AccountDraft};
use crate::domain::foundation::{AccountId, EntityId, PageRequest, Timestamp};
use crate::ports::AccountRepository;

#[derive(Debug, Clone, Default)]
pub struct CreateAccountCommand {
    pub name: String,
    pub currency: String,
    pub account_type: String,
    pub initial_balance: f64,
    pub primary_owner_id: i64,
    pub second_owner_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAccountCommand {
    pub id: i64,
    pub name: String,
    pub currency: String,
    pub account_type: String,
    pub initial_balance: f64,
    pub primary_owner_id: i64,
    pub second_owner_id: Option<i64>,
}

impl UpdateAccountCommand {
    fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.currency.trim().is_empty()
            && self.account_type.trim().is_empty()
            && self.initial_balance == 0.0
            && self.primary_owner_id == 0
            && self.second_owner_id.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListAccountsQuery {
    pub skip: i64,
    pub limit: i64,
}

pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
    integrity: Arc<IntegrityChecker>,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository>, integrity: Arc<IntegrityChecker>) -> Self {
        Self {
            repository,
            integrity,
        }
    }

    pub async fn create(&self, cmd: CreateAccountCommand) -> Result<Account, ServiceError> {
        let draft = AccountDraft::new(
            &cmd.name,
            &cmd.currency,
            &cmd.account_type,
            cmd.initial_balance,
            cmd.primary_owner_id,
            cmd.second_owner_id,
        )?;
        self.check_owners(&draft).await?;

        tracing::info!(
            name = %draft.name,
            account_type = %draft.account_type,
            primary_owner_id = %draft.primary_owner_id,
            "creating account"
        );
        Ok(self.repository.create(&draft, Timestamp::now()).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Account, ServiceError> {
        let id: AccountId = path_id(id)?;
        self.fetch(id).await
    }

    pub async fn list(&self, query: ListAccountsQuery) -> Result<Vec<Account>, ServiceError> {
        let page = PageRequest::defaulted(query.skip, query.limit);
        tracing::info!(skip = page.skip(), limit = page.limit(), "listing accounts");

        let accounts = self.repository.list(page).await?;
        tracing::debug!(count = accounts.len(), "accounts found");
        Ok(accounts)
    }

    pub async fn update(&self, cmd: UpdateAccountCommand) -> Result<Account, ServiceError> {
        let id: AccountId = path_id(cmd.id)?;
        let existing = self.fetch(id).await?;

        if cmd.is_empty() {
            return Err(ServiceError::NoUpdatedData);
        }

        let draft = AccountDraft::new(
            &cmd.name,
            &cmd.currency,
            &cmd.account_type,
            cmd.initial_balance,
            cmd.primary_owner_id,
            cmd.second_owner_id,
        )?;
        self.check_owners(&draft).await?;

        if existing.matches(&draft) {
            return Err(ServiceError::NoUpdatedData);
        }

        tracing::info!(id = %id, "updating account");
        let updated = existing.with_changes(draft, Timestamp::now());
        Ok(self.repository.update(&updated).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let id: AccountId = path_id(id)?;
        self.fetch(id).await?;
        self.integrity.ensure_account_unreferenced(id).await?;

        tracing::info!(id = %id, "deleting account");
        self.repository.delete(&id).await?;
        Ok(())
    }

    async fn fetch(&self, id: AccountId) -> Result<Account, ServiceError> {
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::not_found("account", id.as_i64()))
    }

    async fn check_owners(&self, draft: &AccountDraft) -> Result<(), ServiceError> {
        let fields = ["primary_owner_id", "second_owner_id"];
        for (field, owner) in fields.into_iter().zip(draft.owner_ids()) {
            self.integrity.require_person(field, owner).await?;
        }
        Ok(())
    }
}
