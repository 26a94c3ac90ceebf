//! Balance command handlers

use teloxide::{Bot, types::Message, prelude::*};
use tracing::{debug, warn};
use crate::models::{AdjustMode, Currency};
use crate::services::{Resolution, ServiceFactory};
use crate::utils::errors::{Result, VoucherBotError};
use crate::utils::logging::log_admin_action;

/// Handle .addbalance command
pub async fn handle_add_balance(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
    amount: Option<f64>,
) -> Result<()> {
    adjust_counterpart_balance(bot, msg, services, amount, AdjustMode::Add, ".addbalance").await
}

/// Handle .deductbalance command
pub async fn handle_deduct_balance(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
    amount: Option<f64>,
) -> Result<()> {
    adjust_counterpart_balance(bot, msg, services, amount, AdjustMode::Subtract, ".deductbalance")
        .await
}

/// Credit or debit the TK balance of the sole other participant.
///
/// The target must already have a record; balance commands never create
/// one, that is what `.adduser` is for.
async fn adjust_counterpart_balance(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
    amount: Option<f64>,
    mode: AdjustMode,
    command_name: &str,
) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        VoucherBotError::InvalidInput("No user in message".to_string())
    })?;

    let sender_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    debug!(user_id = sender_id, chat_id = ?chat_id, mode = ?mode, "Processing balance adjustment command");

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

    let Some(amount) = amount else {
        bot.send_message(chat_id, format!("❌ Usage: {} <amount>", command_name))
            .await?;
        return Ok(());
    };

    let target = match services
        .member_service
        .resolve_counterpart(chat_id.0, sender_id)
        .await?
    {
        Resolution::Sole(member) => member,
        Resolution::NoCandidates => {
            bot.send_message(chat_id, "❌ No other users found in this group!")
                .await?;
            return Ok(());
        }
        Resolution::Ambiguous(_) => {
            bot.send_message(chat_id, "❌ Multiple users found. Please specify which user!")
                .await?;
            return Ok(());
        }
    };

    let new_balance = match services
        .balance_service
        .adjust(target.telegram_id, Currency::Tk, mode, amount)
        .await
    {
        Ok(balance) => balance,
        Err(VoucherBotError::RecordNotFound { .. }) => {
            bot.send_message(
                chat_id,
                format!("❌ User {} is not registered in the system!", target.mention()),
            )
            .await?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    bot.send_message(
        chat_id,
        format!(
            "✅ Balance updated for {}!\n💰 New Balance: {:.2} TK",
            target.mention(),
            new_balance
        ),
    )
    .await?;

    log_admin_action(sender_id, command_name, Some(target.telegram_id), None);
    Ok(())
}

/// Handle .balance command
pub async fn handle_balance(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        VoucherBotError::InvalidInput("No user in message".to_string())
    })?;

    let sender_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    debug!(user_id = sender_id, chat_id = ?chat_id, "Processing .balance command");

    // In private chats the group authorization check does not apply.
    if !chat_id.is_user() && !services.auth_service.is_allowed(sender_id, chat_id.0).await? {
        warn!(user_id = sender_id, chat_id = ?chat_id, "User not allowed in group");
        bot.send_message(chat_id, "❌ You are not authorized to use the bot in this group!")
            .await?;
        return Ok(());
    }

    let Some(record) = services.balance_service.snapshot(sender_id).await? else {
        bot.send_message(chat_id, "❌ You are not registered in the system!")
            .await?;
        return Ok(());
    };

    let reply = format!(
        "💰 Your Balance\n\
        ──────────────\n\
        📊 TK: {:.2}\n\
        📊 USDT: {:.2}\n\
        ──────────────\n\
        🆔 User ID: {}",
        record.balance_tk, record.balance_usdt, sender_id
    );
    bot.send_message(chat_id, reply).await?;

    Ok(())
}
