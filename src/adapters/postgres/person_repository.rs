//! PostgreSQL implementation of PersonRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error, id_column, page_bind, timestamp_column};
use crate::domain::foundation::{DomainError, EntityId, PageRequest, PersonId, Timestamp};
use crate::domain::person::{Person, PersonDraft};
use crate::ports::PersonRepository;

const COLUMNS: &str = "id, name, email, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPersonRepository {
    pool: PgPool,
}

impl PostgresPersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for PostgresPersonRepository {
    async fn create(&self, draft: &PersonDraft, now: Timestamp) -> Result<Person, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO person (name, email, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(now.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("insert person", e))?;

        row_to_person(&row)
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM person WHERE id = $1", COLUMNS))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch person", e))?;

        row.as_ref().map(row_to_person).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Person>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM person WHERE email = $1", COLUMNS))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch person by email", e))?;

        row.as_ref().map(row_to_person).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Person>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM person ORDER BY id ASC LIMIT $1 OFFSET $2",
            COLUMNS
        ))
        .bind(page_bind(page.limit()))
        .bind(page_bind(page.skip()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list persons", e))?;

        rows.iter().map(row_to_person).collect()
    }

    async fn update(&self, person: &Person) -> Result<Person, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE person SET
                name = $2,
                email = $3,
                updated_at = $4
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(person.id.as_i64())
        .bind(&person.name)
        .bind(&person.email)
        .bind(person.updated_at.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("update person", e))?;

        match row {
            Some(row) => row_to_person(&row),
            None => Err(DomainError::not_found("person", person.id)),
        }
    }

    async fn delete(&self, id: &PersonId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM person WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete person", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("person", id));
        }
        Ok(())
    }
}

fn row_to_person(row: &PgRow) -> Result<Person, DomainError> {
    Ok(Person {
        id: id_column(row, "id")?,
        name: column(row, "name")?,
        email: column(row, "email")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}
