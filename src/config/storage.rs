//! Storage backend selection

use serde::Deserialize;

use crate::domain::foundation::DeletePolicy;

/// Which store backs the repositories.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local maps, lost on restart
    #[default]
    Memory,
    /// PostgreSQL via `database.*`
    Postgres,
}

/// Storage configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// What happens when deleting a row that others still reference
    #[serde(default)]
    pub delete_policy: DeletePolicy,
}

impl StorageConfig {
    pub fn uses_postgres(&self) -> bool {
        self.backend == StorageBackend::Postgres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.delete_policy, DeletePolicy::RejectIfReferenced);
        assert!(!config.uses_postgres());
    }
}
