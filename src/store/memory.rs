//! In-memory store implementations
//!
//! Backed by `RwLock`-guarded maps. Used by the test suite; also handy
//! for running the bot without a database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{AdjustMode, Currency, NewUserRecord, SeenMember, UserRecord};
use crate::utils::errors::{Result, VoucherBotError};

use super::{MemberDirectory, RecordStore};

#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Arc<RwLock<HashMap<i64, UserRecord>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn fetch(&self, telegram_id: i64) -> Result<Option<UserRecord>> {
        let records = self.records.read().await;
        Ok(records.get(&telegram_id).cloned())
    }

    async fn insert(&self, record: NewUserRecord) -> Result<UserRecord> {
        let mut records = self.records.write().await;
        let now = Utc::now();
        let created = UserRecord {
            telegram_id: record.telegram_id,
            username: record.username,
            full_name: record.full_name,
            allowed_groups: record.allowed_groups,
            balance_tk: 0.0,
            balance_usdt: 0.0,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        records.insert(created.telegram_id, created.clone());
        Ok(created)
    }

    async fn update_access(
        &self,
        telegram_id: i64,
        allowed_groups: &[String],
        username: Option<&str>,
        full_name: Option<&str>,
    ) -> Result<UserRecord> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&telegram_id)
            .ok_or(VoucherBotError::RecordNotFound { user_id: telegram_id })?;

        record.allowed_groups = allowed_groups.to_vec();
        if let Some(name) = username {
            record.username = Some(name.to_string());
        }
        if let Some(name) = full_name {
            record.full_name = Some(name.to_string());
        }
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn delete(&self, telegram_id: i64) -> Result<bool> {
        let mut records = self.records.write().await;
        Ok(records.remove(&telegram_id).is_some())
    }

    async fn adjust_balance(
        &self,
        telegram_id: i64,
        currency: Currency,
        mode: AdjustMode,
        amount: f64,
    ) -> Result<Option<f64>> {
        // Holding the write lock across read-modify-write keeps the
        // adjustment atomic, matching the SQL backend's single UPDATE.
        let mut records = self.records.write().await;
        let Some(record) = records.get_mut(&telegram_id) else {
            return Ok(None);
        };

        let balance = match currency {
            Currency::Tk => &mut record.balance_tk,
            Currency::Usdt => &mut record.balance_usdt,
        };
        *balance = match mode {
            AdjustMode::Add => *balance + amount,
            AdjustMode::Subtract => *balance - amount,
            AdjustMode::Set => amount,
        };
        let result = *balance;
        record.updated_at = Utc::now();
        Ok(Some(result))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryMemberDirectory {
    members: Arc<RwLock<HashMap<(i64, i64), SeenMember>>>,
}

impl MemoryMemberDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberDirectory for MemoryMemberDirectory {
    async fn record_seen(&self, member: SeenMember) -> Result<()> {
        let mut members = self.members.write().await;
        members.insert((member.chat_id, member.telegram_id), member);
        Ok(())
    }

    async fn record_departure(&self, chat_id: i64, telegram_id: i64) -> Result<()> {
        let mut members = self.members.write().await;
        members.remove(&(chat_id, telegram_id));
        Ok(())
    }

    async fn others_in_chat(&self, chat_id: i64, except: i64) -> Result<Vec<SeenMember>> {
        let members = self.members.read().await;
        let mut found: Vec<SeenMember> = members
            .values()
            .filter(|m| m.chat_id == chat_id && m.telegram_id != except && !m.is_bot)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.last_seen.cmp(&a.last_seen));
        Ok(found)
    }
}
