//! PostgreSQL implementation of AccountRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error, id_column, optional_id_column, page_bind, timestamp_column};
use crate::domain::account::{Account, AccountDraft};
use crate::domain::foundation::{AccountId, DomainError, EntityId, PageRequest, PersonId, Timestamp};
use crate::ports::AccountRepository;

const COLUMNS: &str = "id, name, currency, account_type, initial_balance, \
                       primary_owner_id, second_owner_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, draft: &AccountDraft, now: Timestamp) -> Result<Account, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO account (
                name, currency, account_type, initial_balance,
                primary_owner_id, second_owner_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&draft.name)
        .bind(&draft.currency)
        .bind(&draft.account_type)
        .bind(draft.initial_balance)
        .bind(draft.primary_owner_id.as_i64())
        .bind(draft.second_owner_id.map(|id| id.as_i64()))
        .bind(now.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("insert account", e))?;

        row_to_account(&row)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM account WHERE id = $1", COLUMNS))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch account", e))?;

        row.as_ref().map(row_to_account).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Account>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM account ORDER BY id ASC LIMIT $1 OFFSET $2",
            COLUMNS
        ))
        .bind(page_bind(page.limit()))
        .bind(page_bind(page.skip()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list accounts", e))?;

        rows.iter().map(row_to_account).collect()
    }

    async fn update(&self, account: &Account) -> Result<Account, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE account SET
                name = $2,
                currency = $3,
                account_type = $4,
                initial_balance = $5,
                primary_owner_id = $6,
                second_owner_id = $7,
                updated_at = $8
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(account.id.as_i64())
        .bind(&account.name)
        .bind(&account.currency)
        .bind(&account.account_type)
        .bind(account.initial_balance)
        .bind(account.primary_owner_id.as_i64())
        .bind(account.second_owner_id.map(|id| id.as_i64()))
        .bind(account.updated_at.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("update account", e))?;

        match row {
            Some(row) => row_to_account(&row),
            None => Err(DomainError::not_found("account", account.id)),
        }
    }

    async fn delete(&self, id: &AccountId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete account", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("account", id));
        }
        Ok(())
    }

    async fn count_by_owner(&self, owner: &PersonId) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM account WHERE primary_owner_id = $1 OR second_owner_id = $1",
        )
        .bind(owner.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("count accounts by owner", e))?;

        Ok(count.max(0) as u64)
    }
}

fn row_to_account(row: &PgRow) -> Result<Account, DomainError> {
    Ok(Account {
        id: id_column(row, "id")?,
        name: column(row, "name")?,
        currency: column(row, "currency")?,
        account_type: column(row, "account_type")?,
        initial_balance: column(row, "initial_balance")?,
        primary_owner_id: id_column(row, "primary_owner_id")?,
        second_owner_id: optional_id_column(row, "second_owner_id")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}
