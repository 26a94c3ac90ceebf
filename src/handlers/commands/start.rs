//! Start command handler

use teloxide::{Bot, types::Message, prelude::*};
use tracing::debug;
use crate::utils::errors::Result;

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message) -> Result<()> {
    if let Some(user) = msg.from.as_ref() {
        debug!(user_id = user.id.0 as i64, "Processing /start command");
    }

    let welcome_text = "🎉 Welcome to Voucher Trading Bot! 🎉\n\n\
        I'm a bot for buying and selling vouchers with secure transactions.\n\n\
        📋 Available Commands:\n\
        .help - Show all commands\n\
        .balance - Check your balance\n\n\
        👑 Admin users have additional commands for managing users in groups.\n\n\
        Start trading vouchers today! 🚀";

    bot.send_message(msg.chat.id, welcome_text).await?;
    Ok(())
}
