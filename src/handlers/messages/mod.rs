//! Message handlers module
//!
//! Handles plain text messages and member join/leave service updates.
//! These exist to feed the member directory: every observed group message
//! refreshes the sender's sighting so admin commands can resolve "the
//! other user in this group".

use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Handle incoming text messages that are not commands
pub async fn handle_message(_bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let Some(user) = msg.from.as_ref() else {
        // Channel posts and service messages carry no sender.
        return Ok(());
    };

    let chat_id = msg.chat.id;
    if chat_id.is_user() {
        return Ok(());
    }

    debug!(user_id = user.id.0 as i64, chat_id = ?chat_id, "Recording member sighting");
    services.member_service.record_sighting(chat_id.0, user).await
}

/// Handle new chat member events
pub async fn handle_new_chat_member(
    _bot: Bot,
    msg: Message,
    services: ServiceFactory,
) -> Result<()> {
    if let Some(new_members) = msg.new_chat_members() {
        for member in new_members {
            debug!(user_id = member.id.0 as i64, chat_id = ?msg.chat.id, "New member joined chat");
            services
                .member_service
                .record_join(msg.chat.id.0, member)
                .await?;
        }
    }

    Ok(())
}

/// Handle chat member departure events
pub async fn handle_left_chat_member(
    _bot: Bot,
    msg: Message,
    services: ServiceFactory,
) -> Result<()> {
    if let Some(member) = msg.left_chat_member() {
        debug!(user_id = member.id.0 as i64, chat_id = ?msg.chat.id, "Member left chat");
        services
            .member_service
            .record_leave(msg.chat.id.0, member.id.0 as i64)
            .await?;
    }

    Ok(())
}
