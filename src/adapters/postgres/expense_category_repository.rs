//! PostgreSQL implementation of ExpenseCategoryRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error, id_column, page_bind, timestamp_column};
use crate::domain::expense_category::{ExpenseCategory, ExpenseCategoryDraft};
use crate::domain::foundation::{DomainError, EntityId, ExpenseCategoryId, PageRequest, Timestamp};
use crate::ports::ExpenseCategoryRepository;

const COLUMNS: &str = "id, name, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresExpenseCategoryRepository {
    pool: PgPool,
}

impl PostgresExpenseCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseCategoryRepository for PostgresExpenseCategoryRepository {
    async fn create(
        &self,
        draft: &ExpenseCategoryDraft,
        now: Timestamp,
    ) -> Result<ExpenseCategory, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO expense_categories (name, created_at, updated_at)
            VALUES ($1, $2, $2)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&draft.name)
        .bind(now.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("insert expense category", e))?;

        row_to_category(&row)
    }

    async fn find_by_id(&self, id: &ExpenseCategoryId) -> Result<Option<ExpenseCategory>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM expense_categories WHERE id = $1",
            COLUMNS
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch expense category", e))?;

        row.as_ref().map(row_to_category).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<ExpenseCategory>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM expense_categories
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
            COLUMNS
        ))
        .bind(page_bind(page.limit()))
        .bind(page_bind(page.skip()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list expense categories", e))?;

        rows.iter().map(row_to_category).collect()
    }

    async fn update(&self, category: &ExpenseCategory) -> Result<ExpenseCategory, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE expense_categories SET name = $2, updated_at = $3
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(category.id.as_i64())
        .bind(&category.name)
        .bind(category.updated_at.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("update expense category", e))?;

        match row {
            Some(row) => row_to_category(&row),
            None => Err(DomainError::not_found("expense category", category.id)),
        }
    }

    async fn delete(&self, id: &ExpenseCategoryId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM expense_categories WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete expense category", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("expense category", id));
        }
        Ok(())
    }
}

fn row_to_category(row: &PgRow) -> Result<ExpenseCategory, DomainError> {
    Ok(ExpenseCategory {
        id: id_column(row, "id")?,
        name: column(row, "name")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}
