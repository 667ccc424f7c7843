//! PersonService - create, read, list, update and delete people.

use std::sync::Arc;

use super::path_id;
use crate::application::{IntegrityChecker, ServiceError};
use crate::domain::foundation::{EntityId, PageRequest, PersonId, Timestamp};
use crate::domain::person::{Person, PersonDraft};
use crate::ports::PersonRepository;

#[derive(Debug, Clone, Default)]
pub struct CreatePersonCommand {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePersonCommand {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListPersonsQuery {
    pub skip: i64,
    pub limit: i64,
}

pub struct PersonService {
    repository: Arc<dyn PersonRepository>,
    integrity: Arc<IntegrityChecker>,
}

impl PersonService {
    pub fn new(repository: Arc<dyn PersonRepository>, integrity: Arc<IntegrityChecker>) -> Self {
        Self {
            repository,
            integrity,
        }
    }

    pub async fn create(&self, cmd: CreatePersonCommand) -> Result<Person, ServiceError> {
        let draft = PersonDraft::new(&cmd.name, &cmd.email)?;
        self.ensure_email_free(&draft.email, None).await?;

        tracing::info!(name = %draft.name, "creating person");
        let person = self.repository.create(&draft, Timestamp::now()).await?;
        Ok(person)
    }

    pub async fn get(&self, id: i64) -> Result<Person, ServiceError> {
        let id: PersonId = path_id(id)?;
        self.fetch(id).await
    }

    /// People ordered by id; a missing limit means 10, anything above 100 is capped.
    pub async fn list(&self, query: ListPersonsQuery) -> Result<Vec<Person>, ServiceError> {
        let page = PageRequest::defaulted(query.skip, query.limit);
        tracing::info!(skip = page.skip(), limit = page.limit(), "listing persons");

        let persons = self.repository.list(page).await?;
        tracing::debug!(count = persons.len(), "persons found");
        Ok(persons)
    }

    pub async fn update(&self, cmd: UpdatePersonCommand) -> Result<Person, ServiceError> {
        let id: PersonId = path_id(cmd.id)?;
        let existing = self.fetch(id).await?;

        if cmd.name.trim().is_empty() && cmd.email.trim().is_empty() {
            return Err(ServiceError::NoUpdatedData);
        }

        let draft = PersonDraft::new(&cmd.name, &cmd.email)?;
        if existing.matches(&draft) {
            return Err(ServiceError::NoUpdatedData);
        }
        self.ensure_email_free(&draft.email, Some(id)).await?;

        tracing::info!(id = %id, "updating person");
        let updated = existing.with_changes(draft, Timestamp::now());
        Ok(self.repository.update(&updated).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let id: PersonId = path_id(id)?;
        self.fetch(id).await?;
        self.integrity.ensure_person_unreferenced(id).await?;

        tracing::info!(id = %id, "deleting person");
        self.repository.delete(&id).await?;
        Ok(())
    }

    async fn fetch(&self, id: PersonId) -> Result<Person, ServiceError> {
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::not_found("person", id.as_i64()))
    }

    async fn ensure_email_free(&self, email: &str, owner: Option<PersonId>) -> Result<(), ServiceError> {
        match self.repository.find_by_email(email).await? {
            Some(other) if Some(other.id) != owner => Err(ServiceError::ConflictingData(format!(
                "email already in use: {}",
                email
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::services;
    use crate::domain::foundation::{DeletePolicy, DomainError, ErrorCode};
    use crate::ports::Repositories;
    use async_trait::async_trait;

    fn ann() -> CreatePersonCommand {
        CreatePersonCommand {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_first_id() {
        let (services, _) = services();
        let person = services.persons.create(ann()).await.unwrap();
        assert_eq!(person.id.as_i64(), 1);
        assert_eq!(person.name, "Ann");
    }

    #[tokio::test]
    async fn get_returns_created_person() {
        let (services, _) = services();
        let created = services.persons.create(ann()).await.unwrap();
        let fetched = services.persons.get(created.id.as_i64()).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn fails_when_id_not_positive() {
        let (services, _) = services();
        assert!(matches!(
            services.persons.get(0).await,
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn fails_when_person_not_found() {
        let (services, _) = services();
        assert!(matches!(
            services.persons.get(42).await,
            Err(ServiceError::DataNotFound(_))
        ));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let (services, _) = services();
        services.persons.create(ann()).await.unwrap();
        let err = services
            .persons
            .create(CreatePersonCommand {
                name: "Annie".to_string(),
                email: "a@x.com".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::ConflictingData(_)));
    }

    #[tokio::test]
    async fn update_rejects_identical_values() {
        let (services, _) = services();
        let created = services.persons.create(ann()).await.unwrap();

        let err = services
            .persons
            .update(UpdatePersonCommand {
                id: created.id.as_i64(),
                name: " Ann ".to_string(),
                email: "a@x.com".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, ServiceError::NoUpdatedData);
        let stored = services.persons.get(created.id.as_i64()).await.unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn update_rejects_empty_request() {
        let (services, _) = services();
        let created = services.persons.create(ann()).await.unwrap();
        let err = services
            .persons
            .update(UpdatePersonCommand {
                id: created.id.as_i64(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::NoUpdatedData);
    }

    #[tokio::test]
    async fn update_persists_new_values() {
        let (services, _) = services();
        let created = services.persons.create(ann()).await.unwrap();
        let updated = services
            .persons
            .update(UpdatePersonCommand {
                id: created.id.as_i64(),
                name: "Anne".to_string(),
                email: "anne@x.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Anne");
        assert_eq!(updated.created_at, created.created_at);
        assert!(!updated.updated_at.is_before(&created.updated_at));
    }

    #[tokio::test]
    async fn list_defaults_and_caps_limit() {
        let (services, _) = services();
        for i in 0..12 {
            services
                .persons
                .create(CreatePersonCommand {
                    name: format!("P{}", i),
                    email: format!("p{}@x.com", i),
                })
                .await
                .unwrap();
        }

        let defaulted = services.persons.list(ListPersonsQuery::default()).await.unwrap();
        assert_eq!(defaulted.len(), 10);
        assert_eq!(defaulted[0].id.as_i64(), 1);

        let wide = services
            .persons
            .list(ListPersonsQuery { skip: -3, limit: 500 })
            .await
            .unwrap();
        assert_eq!(wide.len(), 12);
    }

    #[tokio::test]
    async fn delete_rejects_account_owner() {
        let (services, _) = services();
        services.persons.create(ann()).await.unwrap();
        services
            .accounts
            .create(crate::application::CreateAccountCommand {
                name: "Checking".to_string(),
                currency: "USD".to_string(),
                account_type: "checking".to_string(),
                initial_balance: 0.0,
                primary_owner_id: 1,
                second_owner_id: None,
            })
            .await
            .unwrap();

        let err = services.persons.delete(1).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConflictingData(_)));
    }

    #[tokio::test]
    async fn delete_removes_unreferenced_person() {
        let (services, _) = services();
        services.persons.create(ann()).await.unwrap();
        services.persons.delete(1).await.unwrap();
        assert!(matches!(
            services.persons.get(1).await,
            Err(ServiceError::DataNotFound(_))
        ));
    }

    struct FailingPersonRepository;

    #[async_trait]
    impl PersonRepository for FailingPersonRepository {
        async fn create(&self, _draft: &PersonDraft, _now: Timestamp) -> Result<Person, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated insert failure"))
        }

        async fn find_by_id(&self, _id: &PersonId) -> Result<Option<Person>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated lookup failure"))
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<Person>, DomainError> {
            Ok(None)
        }

        async fn list(&self, _page: PageRequest) -> Result<Vec<Person>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated list failure"))
        }

        async fn update(&self, _person: &Person) -> Result<Person, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated update failure"))
        }

        async fn delete(&self, _id: &PersonId) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated delete failure"))
        }
    }

    fn failing_service() -> PersonService {
        let repos = crate::adapters::memory::in_memory_repositories();
        let repos = Repositories {
            persons: Arc::new(FailingPersonRepository),
            ..repos
        };
        let integrity = Arc::new(IntegrityChecker::new(repos.clone(), DeletePolicy::default()));
        PersonService::new(repos.persons, integrity)
    }

    #[tokio::test]
    async fn storage_failures_are_flattened_to_internal() {
        let service = failing_service();
        assert_eq!(service.create(ann()).await.unwrap_err(), ServiceError::Internal);
        assert_eq!(service.get(1).await.unwrap_err(), ServiceError::Internal);
        assert_eq!(
            service.list(ListPersonsQuery::default()).await.unwrap_err(),
            ServiceError::Internal
        );
    }
}
