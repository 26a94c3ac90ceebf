//! Record store abstraction
//!
//! Services talk to persistence through these traits so the Postgres
//! backend can be swapped for the in-memory one in tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::{AdjustMode, Currency, NewUserRecord, SeenMember, UserRecord};
use crate::utils::errors::Result;

pub use memory::{MemoryMemberDirectory, MemoryRecordStore};
pub use postgres::{PostgresMemberDirectory, PostgresRecordStore};

/// Persistence for user authorization records and balances.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch a user's record, if one exists.
    async fn fetch(&self, telegram_id: i64) -> Result<Option<UserRecord>>;

    /// Insert a fresh record with zeroed balances.
    async fn insert(&self, record: NewUserRecord) -> Result<UserRecord>;

    /// Replace the allowed-groups list and refresh profile fields.
    /// Fails with `RecordNotFound` when no record exists.
    async fn update_access(
        &self,
        telegram_id: i64,
        allowed_groups: &[String],
        username: Option<&str>,
        full_name: Option<&str>,
    ) -> Result<UserRecord>;

    /// Delete a record outright. Returns whether a record existed.
    async fn delete(&self, telegram_id: i64) -> Result<bool>;

    /// Apply a balance adjustment as a single store operation and return
    /// the resulting balance, or `None` when no record exists. Concurrent
    /// adjustments must not lose updates.
    async fn adjust_balance(
        &self,
        telegram_id: i64,
        currency: Currency,
        mode: AdjustMode,
        amount: f64,
    ) -> Result<Option<f64>>;
}

/// Who has been seen in which chat.
///
/// The Bot API cannot enumerate group participants, so the directory is
/// built up from observed messages and join/leave updates.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Record that a user was seen in a chat, inserting or refreshing
    /// the sighting.
    async fn record_seen(&self, member: SeenMember) -> Result<()>;

    /// Forget a user for a chat after they leave or are removed.
    async fn record_departure(&self, chat_id: i64, telegram_id: i64) -> Result<()>;

    /// All known human members of a chat except the given user.
    async fn others_in_chat(&self, chat_id: i64, except: i64) -> Result<Vec<SeenMember>>;
}
