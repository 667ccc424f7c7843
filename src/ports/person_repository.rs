//! Person repository port.

use crate::domain::foundation::{DomainError, PageRequest, PersonId, Timestamp};
use crate::domain::person::{Person, PersonDraft};
use async_trait::async_trait;

/// Storage contract for people.
///
/// Implementations must keep `email` unique and report a clash as
/// `ErrorCode::Conflict`.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Insert a new person and return the stored row.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the email is already taken
    /// - `DatabaseError` on persistence failure
    async fn create(&self, draft: &PersonDraft, now: Timestamp) -> Result<Person, DomainError>;

    /// Find a person by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, DomainError>;

    /// Find a person by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Person>, DomainError>;

    /// One page of people ordered by id ascending.
    async fn list(&self, page: PageRequest) -> Result<Vec<Person>, DomainError>;

    /// Overwrite the mutable fields of an existing person.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the person doesn't exist
    /// - `Conflict` if the new email is already taken
    async fn update(&self, person: &Person) -> Result<Person, DomainError>;

    /// Remove a person.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the person doesn't exist
    async fn delete(&self, id: &PersonId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn PersonRepository) {}
    }
}
