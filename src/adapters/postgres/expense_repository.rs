//! PostgreSQL implementation of ExpenseRepository.
//!
//! The list query is assembled with `QueryBuilder` so that only the active
//! filters appear in the `WHERE` clause.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{column, db_error, id_column, optional_id_column, page_bind, timestamp_column};
use crate::domain::expense::{Expense, ExpenseDraft};
use crate::domain::foundation::{DomainError, EntityId, ExpenseId, PageRequest, Timestamp};
use crate::ports::{ExpenseFilter, ExpenseReference, ExpenseRepository};

const COLUMNS: &str = "id, amount, category_id, subcategory_id, date, payee_id, account_id, \
                       notes, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresExpenseRepository {
    pool: PgPool,
}

impl PostgresExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `SELECT ... WHERE <active filters> ORDER BY ... LIMIT ... OFFSET ...`
fn list_query(page: PageRequest, filter: &ExpenseFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {} FROM expenses WHERE TRUE", COLUMNS));

    if let Some(category) = filter.category {
        query.push(" AND category_id = ").push_bind(category.as_i64());
    }
    if let Some(subcategory) = filter.subcategory {
        query.push(" AND subcategory_id = ").push_bind(subcategory.as_i64());
    }
    if let Some(payee) = filter.payee {
        query.push(" AND payee_id = ").push_bind(payee.as_i64());
    }
    if let Some(account) = filter.account {
        query.push(" AND account_id = ").push_bind(account.as_i64());
    }
    if let Some(start) = filter.start {
        query.push(" AND date >= ").push_bind(*start.as_datetime());
    }
    if let Some(end) = filter.end {
        query.push(" AND date <= ").push_bind(*end.as_datetime());
    }

    query
        .push(" ORDER BY date DESC, created_at DESC, id DESC LIMIT ")
        .push_bind(page_bind(page.limit()))
        .push(" OFFSET ")
        .push_bind(page_bind(page.skip()));
    query
}

/// Column an expense reference is stored in, with its raw id.
fn reference_column(reference: ExpenseReference) -> (&'static str, i64) {
    match reference {
        ExpenseReference::Payee(id) => ("payee_id", id.as_i64()),
        ExpenseReference::Account(id) => ("account_id", id.as_i64()),
        ExpenseReference::Category(id) => ("category_id", id.as_i64()),
        ExpenseReference::SubCategory(id) => ("subcategory_id", id.as_i64()),
    }
}

#[async_trait]
impl ExpenseRepository for PostgresExpenseRepository {
    async fn create(&self, draft: &ExpenseDraft, now: Timestamp) -> Result<Expense, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO expenses (
                amount, category_id, subcategory_id, date, payee_id, account_id,
                notes, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(draft.amount)
        .bind(draft.category_id.as_i64())
        .bind(draft.subcategory_id.map(|id| id.as_i64()))
        .bind(draft.date.as_datetime())
        .bind(draft.payee_id.as_i64())
        .bind(draft.account_id.as_i64())
        .bind(&draft.notes)
        .bind(now.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("insert expense", e))?;

        row_to_expense(&row)
    }

    async fn find_by_id(&self, id: &ExpenseId) -> Result<Option<Expense>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM expenses WHERE id = $1", COLUMNS))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch expense", e))?;

        row.as_ref().map(row_to_expense).transpose()
    }

    async fn list(&self, page: PageRequest, filter: &ExpenseFilter) -> Result<Vec<Expense>, DomainError> {
        let mut query = list_query(page, filter);
        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list expenses", e))?;

        rows.iter().map(row_to_expense).collect()
    }

    async fn update(&self, expense: &Expense) -> Result<Expense, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE expenses SET
                amount = $2,
                category_id = $3,
                subcategory_id = $4,
                date = $5,
                payee_id = $6,
                account_id = $7,
                notes = $8,
                updated_at = $9
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(expense.id.as_i64())
        .bind(expense.amount)
        .bind(expense.category_id.as_i64())
        .bind(expense.subcategory_id.map(|id| id.as_i64()))
        .bind(expense.date.as_datetime())
        .bind(expense.payee_id.as_i64())
        .bind(expense.account_id.as_i64())
        .bind(&expense.notes)
        .bind(expense.updated_at.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("update expense", e))?;

        match row {
            Some(row) => row_to_expense(&row),
            None => Err(DomainError::not_found("expense", expense.id)),
        }
    }

    async fn delete(&self, id: &ExpenseId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete expense", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("expense", id));
        }
        Ok(())
    }

    async fn count_referencing(&self, reference: ExpenseReference) -> Result<u64, DomainError> {
        let (column, id) = reference_column(reference);
        let (count,): (i64,) =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM expenses WHERE {} = $1", column))
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| db_error("count expenses", e))?;

        Ok(count.max(0) as u64)
    }
}

fn row_to_expense(row: &PgRow) -> Result<Expense, DomainError> {
    Ok(Expense {
        id: id_column(row, "id")?,
        amount: column(row, "amount")?,
        category_id: id_column(row, "category_id")?,
        subcategory_id: optional_id_column(row, "subcategory_id")?,
        date: timestamp_column(row, "date")?,
        payee_id: id_column(row, "payee_id")?,
        account_id: id_column(row, "account_id")?,
        notes: column(row, "notes")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AccountId, ExpenseCategoryId, PersonId};
    use chrono::NaiveDate;

    #[test]
    fn unfiltered_query_has_only_paging_binds() {
        let query = list_query(PageRequest::default(), &ExpenseFilter::default());
        let sql = query.sql();
        assert!(sql.ends_with("ORDER BY date DESC, created_at DESC, id DESC LIMIT $1 OFFSET $2"));
        assert!(!sql.contains("category_id ="));
    }

    #[test]
    fn active_filters_are_numbered_in_order() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let filter = ExpenseFilter {
            category: Some(ExpenseCategoryId::from_raw(1)),
            payee: Some(PersonId::from_raw(2)),
            account: Some(AccountId::from_raw(3)),
            end: Some(Timestamp::end_of_day(day)),
            ..Default::default()
        };
        let query = list_query(PageRequest::bounded(5, 20), &filter);
        let sql = query.sql();

        assert!(sql.contains("AND category_id = $1"));
        assert!(sql.contains("AND payee_id = $2"));
        assert!(sql.contains("AND account_id = $3"));
        assert!(sql.contains("AND date <= $4"));
        assert!(sql.contains("LIMIT $5 OFFSET $6"));
        assert!(!sql.contains("subcategory_id ="));
    }

    #[test]
    fn references_map_to_their_columns() {
        assert_eq!(
            reference_column(ExpenseReference::Payee(PersonId::from_raw(4))),
            ("payee_id", 4)
        );
        assert_eq!(
            reference_column(ExpenseReference::Category(ExpenseCategoryId::from_raw(9))),
            ("category_id", 9)
        );
    }
}
