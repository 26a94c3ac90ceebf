//! Chat member tracking service
//!
//! The Bot API offers no way to list a group's participants, so the bot
//! maintains its own directory from observed messages and join/leave
//! updates. Admin commands that act on "the other user in this group"
//! resolve their target against these sightings.

use std::sync::Arc;
use tracing::debug;
use crate::models::SeenMember;
use crate::store::MemberDirectory;
use crate::utils::errors::Result;

/// Result of resolving the single counterpart user in a group.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Exactly one other known member.
    Sole(SeenMember),
    /// Nobody else has been seen in this chat.
    NoCandidates,
    /// More than one candidate; the command is ambiguous.
    Ambiguous(usize),
}

/// Member service for tracking who is present in which chat
#[derive(Clone)]
pub struct MemberService {
    directory: Arc<dyn MemberDirectory>,
}

impl MemberService {
    /// Create a new MemberService instance
    pub fn new(directory: Arc<dyn MemberDirectory>) -> Self {
        Self { directory }
    }

    /// Record a user seen posting in a chat
    pub async fn record_sighting(&self, chat_id: i64, user: &teloxide::types::User) -> Result<()> {
        self.directory
            .record_seen(SeenMember::from_telegram(chat_id, user))
            .await
    }

    /// Record a user joining a chat
    pub async fn record_join(&self, chat_id: i64, user: &teloxide::types::User) -> Result<()> {
        debug!(chat_id = chat_id, user_id = user.id.0 as i64, "Member joined chat");
        self.directory
            .record_seen(SeenMember::from_telegram(chat_id, user))
            .await
    }

    /// Record a user leaving a chat
    pub async fn record_leave(&self, chat_id: i64, user_id: i64) -> Result<()> {
        debug!(chat_id = chat_id, user_id = user_id, "Member left chat");
        self.directory.record_departure(chat_id, user_id).await
    }

    /// Find the single other participant that admin commands act on.
    ///
    /// Only members the bot has actually observed count; a user who never
    /// posted or joined while the bot was present is invisible here.
    pub async fn resolve_counterpart(&self, chat_id: i64, sender_id: i64) -> Result<Resolution> {
        let mut others = self.directory.others_in_chat(chat_id, sender_id).await?;

        if others.len() > 1 {
            return Ok(Resolution::Ambiguous(others.len()));
        }
        match others.pop() {
            Some(member) => Ok(Resolution::Sole(member)),
            None => Ok(Resolution::NoCandidates),
        }
    }
}
