//! In-memory person storage.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::Table;
use crate::domain::foundation::{DomainError, EntityId, PageRequest, PersonId, Timestamp};
use crate::domain::person::{Person, PersonDraft};
use crate::ports::PersonRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonRepository {
    table: Arc<Mutex<Table<Person>>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(table: &Table<Person>, email: &str, except: Option<PersonId>) -> bool {
    table
        .rows()
        .any(|p| p.email == email && Some(p.id) != except)
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn create(&self, draft: &PersonDraft, now: Timestamp) -> Result<Person, DomainError> {
        let mut table = self.table.lock().await;
        if email_taken(&table, &draft.email, None) {
            return Err(DomainError::conflict(format!("email already in use: {}", draft.email)));
        }

        let id = table.next_id();
        let person = Person {
            id: PersonId::from_raw(id),
            name: draft.name.clone(),
            email: draft.email.clone(),
            created_at: now,
            updated_at: now,
        };
        table.put(id, person.clone());
        Ok(person)
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, DomainError> {
        Ok(self.table.lock().await.get(id.as_i64()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Person>, DomainError> {
        let table = self.table.lock().await;
        let found = table.rows().find(|p| p.email == email).cloned();
        Ok(found)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Person>, DomainError> {
        let table = self.table.lock().await;
        Ok(page.apply(table.rows().cloned()))
    }

    async fn update(&self, person: &Person) -> Result<Person, DomainError> {
        let mut table = self.table.lock().await;
        if !table.contains(person.id.as_i64()) {
            return Err(DomainError::not_found("person", person.id));
        }
        if email_taken(&table, &person.email, Some(person.id)) {
            return Err(DomainError::conflict(format!("email already in use: {}", person.email)));
        }
        table.put(person.id.as_i64(), person.clone());
        Ok(person.clone())
    }

    async fn delete(&self, id: &PersonId) -> Result<(), DomainError> {
        if self.table.lock().await.remove(id.as_i64()) {
            Ok(())
        } else {
            Err(DomainError::not_found("person", id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn draft(name: &str, email: &str) -> PersonDraft {
        PersonDraft::new(name, email).unwrap()
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = InMemoryPersonRepository::new();
        let now = Timestamp::now();
        let ann = repo.create(&draft("Ann", "a@x.com"), now).await.unwrap();
        let bob = repo.create(&draft("Bob", "b@x.com"), now).await.unwrap();
        assert_eq!(ann.id.as_i64(), 1);
        assert_eq!(bob.id.as_i64(), 2);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let repo = InMemoryPersonRepository::new();
        let now = Timestamp::now();
        repo.create(&draft("Ann", "a@x.com"), now).await.unwrap();
        let err = repo.create(&draft("Other", "a@x.com"), now).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn find_by_email_matches_exact_address() {
        let repo = InMemoryPersonRepository::new();
        let ann = repo
            .create(&draft("Ann", "a@x.com"), Timestamp::now())
            .await
            .unwrap();
        assert_eq!(repo.find_by_email("a@x.com").await.unwrap(), Some(ann));
        assert_eq!(repo.find_by_email("b@x.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() {
        let repo = InMemoryPersonRepository::new();
        let now = Timestamp::now();
        let ghost = Person {
            id: PersonId::from_raw(3),
            name: "Ghost".to_string(),
            email: "g@x.com".to_string(),
            created_at: now,
            updated_at: now,
        };
        assert!(repo.update(&ghost).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn update_may_keep_own_email() {
        let repo = InMemoryPersonRepository::new();
        let mut ann = repo
            .create(&draft("Ann", "a@x.com"), Timestamp::now())
            .await
            .unwrap();
        ann.name = "Anne".to_string();
        assert_eq!(repo.update(&ann).await.unwrap().name, "Anne");
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let repo = InMemoryPersonRepository::new();
        let ann = repo
            .create(&draft("Ann", "a@x.com"), Timestamp::now())
            .await
            .unwrap();
        repo.delete(&ann.id).await.unwrap();
        assert!(repo.delete(&ann.id).await.unwrap_err().is_not_found());
    }
}
