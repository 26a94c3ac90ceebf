//! Help command handler

use teloxide::{Bot, types::Message, prelude::*};
use crate::utils::errors::Result;

/// Handle .help command
pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    let help_text = "🤖 Voucher Trading Bot 🤖\n\n\
        👑 Admin Commands:\n\
        .adduser - Add a user to this group\n\
        .removeuser - Remove a user from this group\n\
        .addbalance <amount> - Credit the user in this group\n\
        .deductbalance <amount> - Debit the user in this group\n\n\
        👤 User Commands:\n\
        .balance - Check your balance\n\
        .help - Show this help message\n\n\
        📊 Features:\n\
        • Buy/Sell vouchers\n\
        • Balance management\n\
        • Multi-group support\n\n\
        💡 More commands coming soon!";

    bot.send_message(msg.chat.id, help_text).await?;
    Ok(())
}
