//! HTTP DTOs for account endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EntityId;
use crate::domain::Account;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of both create and update requests. Missing fields take their zero value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountRequest {
    pub name: String,
    pub currency: String,
    pub account_type: String,
    pub initial_balance: f64,
    pub primary_owner_id: i64,
    pub second_owner_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListAccountsParams {
    pub skip: i64,
    pub limit: i64,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: i64,
    pub name: String,
    pub currency: String,
    pub account_type: String,
    pub initial_balance: f64,
    pub primary_owner_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_owner_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.as_i64(),
            name: account.name,
            currency: account.currency,
            account_type: account.account_type,
            initial_balance: account.initial_balance,
            primary_owner_id: account.primary_owner_id.as_i64(),
            second_owner_id: account.second_owner_id.map(|id| id.as_i64()),
            created_at: account.created_at.as_datetime().to_rfc3339(),
            updated_at: account.updated_at.as_datetime().to_rfc3339(),
        }
    }
}
