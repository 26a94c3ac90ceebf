//! User record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's authorization record and balances.
///
/// A record exists iff `allowed_groups` is non-empty: revoking the last
/// group deletes the record entirely.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub full_name: Option<String>,
    /// Group-id strings the user may act in.
    pub allowed_groups: Vec<String>,
    pub balance_tk: f64,
    pub balance_usdt: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Whether this record authorizes the user in the given group.
    pub fn is_allowed_in(&self, group_id: i64) -> bool {
        self.allowed_groups.iter().any(|g| g == &group_id.to_string())
    }
}

/// Request to create a fresh user record with zeroed balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserRecord {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub allowed_groups: Vec<String>,
}
