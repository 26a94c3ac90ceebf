//! Postgres-backed store implementations

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::models::{AdjustMode, Currency, NewUserRecord, SeenMember, UserRecord};
use crate::utils::errors::{Result, VoucherBotError};

use super::{MemberDirectory, RecordStore};

#[derive(Debug, Clone)]
pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    async fn fetch(&self, telegram_id: i64) -> Result<Option<UserRecord>> {
        let record = sqlx::query_as::<_, UserRecord>(
            "SELECT telegram_id, username, full_name, allowed_groups, balance_tk, balance_usdt, is_active, created_at, updated_at FROM voucher_users WHERE telegram_id = $1"
        )
        .bind(telegram_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn insert(&self, record: NewUserRecord) -> Result<UserRecord> {
        let created = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO voucher_users (telegram_id, username, full_name, allowed_groups, balance_tk, balance_usdt, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, 0.0, 0.0, TRUE, $5, $6)
            RETURNING telegram_id, username, full_name, allowed_groups, balance_tk, balance_usdt, is_active, created_at, updated_at
            "#
        )
        .bind(record.telegram_id)
        .bind(record.username)
        .bind(record.full_name)
        .bind(&record.allowed_groups)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_access(
        &self,
        telegram_id: i64,
        allowed_groups: &[String],
        username: Option<&str>,
        full_name: Option<&str>,
    ) -> Result<UserRecord> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE voucher_users
            SET allowed_groups = $2,
                username = COALESCE($3, username),
                full_name = COALESCE($4, full_name),
                updated_at = $5
            WHERE telegram_id = $1
            RETURNING telegram_id, username, full_name, allowed_groups, balance_tk, balance_usdt, is_active, created_at, updated_at
            "#
        )
        .bind(telegram_id)
        .bind(allowed_groups)
        .bind(username)
        .bind(full_name)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(VoucherBotError::RecordNotFound { user_id: telegram_id })?;

        Ok(record)
    }

    async fn delete(&self, telegram_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM voucher_users WHERE telegram_id = $1")
            .bind(telegram_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn adjust_balance(
        &self,
        telegram_id: i64,
        currency: Currency,
        mode: AdjustMode,
        amount: f64,
    ) -> Result<Option<f64>> {
        // The column name comes from the Currency enum, never from input,
        // so interpolating it is safe. The arithmetic runs inside the
        // UPDATE so concurrent adjustments cannot lose increments.
        let column = currency.column();
        let sql = match mode {
            AdjustMode::Add => format!(
                "UPDATE voucher_users SET {column} = {column} + $2, updated_at = $3 WHERE telegram_id = $1 RETURNING {column}"
            ),
            AdjustMode::Subtract => format!(
                "UPDATE voucher_users SET {column} = {column} - $2, updated_at = $3 WHERE telegram_id = $1 RETURNING {column}"
            ),
            AdjustMode::Set => format!(
                "UPDATE voucher_users SET {column} = $2, updated_at = $3 WHERE telegram_id = $1 RETURNING {column}"
            ),
        };

        let balance = sqlx::query_scalar::<_, f64>(&sql)
            .bind(telegram_id)
            .bind(amount)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await?;

        Ok(balance)
    }
}

#[derive(Debug, Clone)]
pub struct PostgresMemberDirectory {
    pool: PgPool,
}

impl PostgresMemberDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberDirectory for PostgresMemberDirectory {
    async fn record_seen(&self, member: SeenMember) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO chat_members (chat_id, telegram_id, username, first_name, last_name, is_bot, last_seen)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (chat_id, telegram_id) DO UPDATE
            SET username = EXCLUDED.username,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                last_seen = EXCLUDED.last_seen
            "#
        )
        .bind(member.chat_id)
        .bind(member.telegram_id)
        .bind(member.username)
        .bind(member.first_name)
        .bind(member.last_name)
        .bind(member.is_bot)
        .bind(member.last_seen)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn record_departure(&self, chat_id: i64, telegram_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM chat_members WHERE chat_id = $1 AND telegram_id = $2")
            .bind(chat_id)
            .bind(telegram_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn others_in_chat(&self, chat_id: i64, except: i64) -> Result<Vec<SeenMember>> {
        let members = sqlx::query_as::<_, SeenMember>(
            "SELECT chat_id, telegram_id, username, first_name, last_name, is_bot, last_seen FROM chat_members WHERE chat_id = $1 AND telegram_id <> $2 AND is_bot = FALSE ORDER BY last_seen DESC"
        )
        .bind(chat_id)
        .bind(except)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }
}
