//! Policy applied when deleting a row that other rows still reference.

use serde::{Deserialize, Serialize};

/// What a delete does when dependents exist.
///
/// - `RejectIfReferenced` refuses the delete with a conflict.
/// - `AllowOrphans` deletes anyway and leaves dangling references behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    #[default]
    RejectIfReferenced,
    AllowOrphans,
}

impl DeletePolicy {
    pub fn checks_references(&self) -> bool {
        matches!(self, DeletePolicy::RejectIfReferenced)
    }
}
