//! Admin command handlers
//!
//! `.adduser` and `.removeuser` act on the single other participant in the
//! group, which fits the two-party voucher-trading chat these groups are
//! set up for. With more than one candidate the command refuses instead
//! of guessing.

use teloxide::{Bot, types::Message, prelude::*};
use tracing::{debug, warn};
use crate::services::{GrantOutcome, Resolution, RevokeOutcome, ServiceFactory};
use crate::utils::errors::{Result, VoucherBotError};
use crate::utils::logging::log_admin_action;

/// Handle .adduser command
pub async fn handle_add_user(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        VoucherBotError::InvalidInput("No user in message".to_string())
    })?;

    let sender_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    debug!(user_id = sender_id, chat_id = ?chat_id, "Processing .adduser command");

    if !services.auth_service.is_admin(sender_id) {
        warn!(user_id = sender_id, "Unauthorized admin command attempt");
        bot.send_message(chat_id, "❌ You are not authorized to use this command!")
            .await?;
        return Ok(());
    }

    if chat_id.is_user() {
        bot.send_message(chat_id, "❌ This command can only be used in groups!")
            .await?;
        return Ok(());
    }

    let target = match services
        .member_service
        .resolve_counterpart(chat_id.0, sender_id)
        .await?
    {
        Resolution::Sole(member) => member,
        Resolution::NoCandidates => {
            bot.send_message(chat_id, "❌ No other users found in this group to add!")
                .await?;
            return Ok(());
        }
        Resolution::Ambiguous(_) => {
            bot.send_message(chat_id, "❌ Multiple users found. Please specify which user to add!")
                .await?;
            return Ok(());
        }
    };

    let outcome = services.auth_service.grant(chat_id.0, &target).await?;
    let reply = match outcome {
        GrantOutcome::Created(record) => format!(
            "✅ User {} has been added successfully!\n💰 Initial Balance: 0 TK | 0 USDT\n📊 Groups Allowed: {}",
            target.mention(),
            record.allowed_groups.len()
        ),
        GrantOutcome::Updated(_) => format!(
            "✅ User {} has been granted access to this group!",
            target.mention()
        ),
        GrantOutcome::AlreadyAllowed => format!(
            "✅ User {} is already allowed in this group!",
            target.mention()
        ),
    };
    bot.send_message(chat_id, reply).await?;

    log_admin_action(sender_id, "adduser", Some(target.telegram_id), None);
    Ok(())
}

/// Handle .removeuser command
pub async fn handle_remove_user(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        VoucherBotError::InvalidInput("No user in message".to_string())
    })?;

    let sender_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    debug!(user_id = sender_id, chat_id = ?chat_id, "Processing .removeuser command");

    if !services.auth_service.is_admin(sender_id) {
        warn!(user_id = sender_id, "Unauthorized admin command attempt");
        bot.send_message(chat_id, "❌ You are not authorized to use this command!")
            .await?;
        return Ok(());
    }

    if chat_id.is_user() {
        bot.send_message(chat_id, "❌ This command can only be used in groups!")
            .await?;
        return Ok(());
    }

    let target = match services
        .member_service
        .resolve_counterpart(chat_id.0, sender_id)
        .await?
    {
        Resolution::Sole(member) => member,
        Resolution::NoCandidates => {
            bot.send_message(chat_id, "❌ No other users found in this group to remove!")
                .await?;
            return Ok(());
        }
        Resolution::Ambiguous(_) => {
            bot.send_message(chat_id, "❌ Multiple users found. Please specify which user to remove!")
                .await?;
            return Ok(());
        }
    };

    let outcome = services
        .auth_service
        .revoke(chat_id.0, target.telegram_id)
        .await?;
    let reply = match outcome {
        RevokeOutcome::RemovedFromGroup => format!(
            "✅ User {} has been removed from this group!",
            target.mention()
        ),
        RevokeOutcome::DeletedCompletely => format!(
            "✅ User {} has been completely removed from the system!",
            target.mention()
        ),
        RevokeOutcome::UserNotInGroup => format!(
            "❌ User {} is not allowed in this group!",
            target.mention()
        ),
        RevokeOutcome::UserNotFound => format!(
            "❌ User {} not found in the system!",
            target.mention()
        ),
    };
    bot.send_message(chat_id, reply).await?;

    log_admin_action(sender_id, "removeuser", Some(target.telegram_id), None);
    Ok(())
}
