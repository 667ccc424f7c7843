//! Person: a payee or account owner.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PersonId, Timestamp, ValidationError};
use crate::domain::validation;

/// Stored person record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated, normalized person fields ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonDraft {
    pub name: String,
    pub email: String,
}

impl PersonDraft {
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validation::required_name("name", name)?,
            email: validation::email("email", email)?,
        })
    }
}

impl Person {
    /// True when writing `draft` would not change any mutable field.
    pub fn matches(&self, draft: &PersonDraft) -> bool {
        self.name == draft.name && self.email == draft.email
    }

    /// Copy of this record carrying the draft's fields.
    pub fn with_changes(&self, draft: PersonDraft, now: Timestamp) -> Person {
        Person {
            id: self.id,
            name: draft.name,
            email: draft.email,
            created_at: self.created_at,
            updated_at: now,
        }
    }
}
