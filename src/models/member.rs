//! Chat member sightings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user observed in a chat, recorded from message traffic and
/// join/leave service updates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SeenMember {
    pub chat_id: i64,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub is_bot: bool,
    pub last_seen: DateTime<Utc>,
}

impl SeenMember {
    /// Build a sighting from a Telegram user seen in the given chat.
    pub fn from_telegram(chat_id: i64, user: &teloxide::types::User) -> Self {
        Self {
            chat_id,
            telegram_id: user.id.0 as i64,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_bot: user.is_bot,
            last_seen: Utc::now(),
        }
    }

    /// First and last name joined, as Telegram shows display names.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }

    /// `@username` when one is set, otherwise `@<id>` so replies always
    /// have something to address the user by.
    pub fn mention(&self) -> String {
        match &self.username {
            Some(name) => format!("@{}", name),
            None => format!("@{}", self.telegram_id),
        }
    }
}
