//! HTTP DTOs for person endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EntityId;
use crate::domain::Person;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of both create and update requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListPersonsParams {
    pub skip: i64,
    pub limit: i64,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.as_i64(),
            name: person.name,
            email: person.email,
            created_at: person.created_at.as_datetime().to_rfc3339(),
            updated_at: person.updated_at.as_datetime().to_rfc3339(),
        }
    }
}
