//! PostgreSQL implementation of ExpenseSubCategoryRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error, id_column, page_bind, timestamp_column};
use crate::domain::expense_subcategory::{ExpenseSubCategory, ExpenseSubCategoryDraft};
use crate::domain::foundation::{
    DomainError, EntityId, ExpenseCategoryId, ExpenseSubCategoryId, PageRequest, Timestamp,
};
use crate::ports::ExpenseSubCategoryRepository;

const COLUMNS: &str = "id, name, expense_category_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresExpenseSubCategoryRepository {
    pool: PgPool,
}

impl PostgresExpenseSubCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseSubCategoryRepository for PostgresExpenseSubCategoryRepository {
    async fn create(
        &self,
        draft: &ExpenseSubCategoryDraft,
        now: Timestamp,
    ) -> Result<ExpenseSubCategory, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO expense_subcategories (name, expense_category_id, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&draft.name)
        .bind(draft.expense_category_id.as_i64())
        .bind(now.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("insert expense subcategory", e))?;

        row_to_subcategory(&row)
    }

    async fn find_by_id(
        &self,
        id: &ExpenseSubCategoryId,
    ) -> Result<Option<ExpenseSubCategory>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM expense_subcategories WHERE id = $1",
            COLUMNS
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch expense subcategory", e))?;

        row.as_ref().map(row_to_subcategory).transpose()
    }

    async fn list(
        &self,
        page: PageRequest,
        category: Option<ExpenseCategoryId>,
    ) -> Result<Vec<ExpenseSubCategory>, DomainError> {
        // NULL category disables the filter
        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM expense_subcategories
            WHERE ($1::BIGINT IS NULL OR expense_category_id = $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
            COLUMNS
        ))
        .bind(category.map(|c| c.as_i64()))
        .bind(page_bind(page.limit()))
        .bind(page_bind(page.skip()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list expense subcategories", e))?;

        rows.iter().map(row_to_subcategory).collect()
    }

    async fn update(&self, subcategory: &ExpenseSubCategory) -> Result<ExpenseSubCategory, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE expense_subcategories SET
                name = $2,
                expense_category_id = $3,
                updated_at = $4
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(subcategory.id.as_i64())
        .bind(&subcategory.name)
        .bind(subcategory.expense_category_id.as_i64())
        .bind(subcategory.updated_at.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("update expense subcategory", e))?;

        match row {
            Some(row) => row_to_subcategory(&row),
            None => Err(DomainError::not_found("expense subcategory", subcategory.id)),
        }
    }

    async fn delete(&self, id: &ExpenseSubCategoryId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM expense_subcategories WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete expense subcategory", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("expense subcategory", id));
        }
        Ok(())
    }

    async fn count_by_category(&self, category: &ExpenseCategoryId) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM expense_subcategories WHERE expense_category_id = $1",
        )
        .bind(category.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("count expense subcategories", e))?;

        Ok(count.max(0) as u64)
    }
}

fn row_to_subcategory(row: &PgRow) -> Result<ExpenseSubCategory, DomainError> {
    Ok(ExpenseSubCategory {
        id: id_column(row, "id")?,
        name: column(row, "name")?,
        expense_category_id: id_column(row, "expense_category_id")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}
