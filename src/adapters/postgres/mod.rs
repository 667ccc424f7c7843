//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresPersonRepository`, `PostgresAccountRepository`
//! - `PostgresExpenseCategoryRepository`, `PostgresExpenseSubCategoryRepository`
//! - `PostgresExpenseRepository` - filtered listing via `QueryBuilder`
//!
//! Timestamps are written by the service layer; the schema carries no
//! defaults and no foreign keys (the delete policy lives in the services).

mod account_repository;
mod expense_category_repository;
mod expense_repository;
mod expense_subcategory_repository;
mod person_repository;

use std::sync::Arc;

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

pub use account_repository::PostgresAccountRepository;
pub use expense_category_repository::PostgresExpenseCategoryRepository;
pub use expense_repository::PostgresExpenseRepository;
pub use expense_subcategory_repository::PostgresExpenseSubCategoryRepository;
pub use person_repository::PostgresPersonRepository;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, EntityId, Timestamp};
use crate::ports::Repositories;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Opens a connection pool sized by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(&config.url)
        .await
}

/// Applies the embedded `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Every repository backed by the same pool.
pub fn postgres_repositories(pool: PgPool) -> Repositories {
    Repositories {
        persons: Arc::new(PostgresPersonRepository::new(pool.clone())),
        accounts: Arc::new(PostgresAccountRepository::new(pool.clone())),
        categories: Arc::new(PostgresExpenseCategoryRepository::new(pool.clone())),
        subcategories: Arc::new(PostgresExpenseSubCategoryRepository::new(pool.clone())),
        expenses: Arc::new(PostgresExpenseRepository::new(pool)),
    }
}

/// Maps a driver error, turning unique violations into `Conflict`.
pub(crate) fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return DomainError::conflict(format!("Failed to {}: duplicate value", action))
                .with_detail("constraint", db.constraint().unwrap_or_default());
        }
    }
    DomainError::database(format!("Failed to {}: {}", action, e))
}

/// Reads one column, reporting the column name on failure.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

pub(crate) fn id_column<I: EntityId>(row: &PgRow, name: &str) -> Result<I, DomainError> {
    column::<i64>(row, name).map(I::from_raw)
}

pub(crate) fn optional_id_column<I: EntityId>(row: &PgRow, name: &str) -> Result<Option<I>, DomainError> {
    column::<Option<i64>>(row, name).map(|raw| raw.map(I::from_raw))
}

pub(crate) fn timestamp_column(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    column::<chrono::DateTime<chrono::Utc>>(row, name).map(Timestamp::from_datetime)
}

/// Converts an unsigned page bound into a bind parameter.
pub(crate) fn page_bind(value: u32) -> i64 {
    i64::from(value)
}
