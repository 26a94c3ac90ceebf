//! Command handlers module
//!
//! The bot's command surface is a fixed table of literal dot-commands
//! matched against raw message text. Parsing is stateless: one pass over
//! the table per inbound message, no conversation state.

pub mod admin;
pub mod balance;
pub mod help;
pub mod start;

use once_cell::sync::Lazy;
use regex::Regex;
use teloxide::{Bot, types::Message, prelude::*};
use tracing::{error, warn};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// All available bot commands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    AddUser,
    RemoveUser,
    /// `None` when the amount argument is missing or malformed.
    AddBalance(Option<f64>),
    DeductBalance(Option<f64>),
    Balance,
    Help,
    Start,
}

// Unwrap as the patterns are checked for correctness
static ADD_USER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.adduser$").unwrap());
static REMOVE_USER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.removeuser$").unwrap());
static ADD_BALANCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.addbalance(?:\s+(.+))?$").unwrap());
static DEDUCT_BALANCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.deductbalance(?:\s+(.+))?$").unwrap());
static BALANCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.balance$").unwrap());
static HELP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.help$").unwrap());
static START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/start$").unwrap());

/// Non-negative decimal number, nothing else.
static AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(?:\.\d+)?$").unwrap());

/// Match raw message text against the command table.
///
/// Matching is exact and anchored; anything that is not a command returns
/// `None` and is treated as plain chatter. A recognized balance command
/// with a missing or malformed amount still dispatches (carrying `None`)
/// so the handler can answer with usage help instead of staying silent.
pub fn parse_command(text: &str) -> Option<Command> {
    if ADD_USER.is_match(text) {
        return Some(Command::AddUser);
    }
    if REMOVE_USER.is_match(text) {
        return Some(Command::RemoveUser);
    }
    if let Some(caps) = ADD_BALANCE.captures(text) {
        return Some(Command::AddBalance(parse_amount(caps.get(1))));
    }
    if let Some(caps) = DEDUCT_BALANCE.captures(text) {
        return Some(Command::DeductBalance(parse_amount(caps.get(1))));
    }
    if BALANCE.is_match(text) {
        return Some(Command::Balance);
    }
    if HELP.is_match(text) {
        return Some(Command::Help);
    }
    if START.is_match(text) {
        return Some(Command::Start);
    }
    None
}

fn parse_amount(capture: Option<regex::Match<'_>>) -> Option<f64> {
    let raw = capture?.as_str();
    if !AMOUNT.is_match(raw) {
        return None;
    }
    raw.parse().ok()
}

/// Main command dispatcher
///
/// Every handler is wrapped in a catch-all: an unexpected failure is
/// logged and the reply is replaced with a generic error message, so no
/// command crashes the dispatch loop.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: ServiceFactory,
) -> Result<()> {
    let chat_id = msg.chat.id;

    // Commands bypass the plain-message handler, so track the sender here
    // to keep counterpart resolution current.
    if !chat_id.is_user() {
        if let Some(user) = msg.from.as_ref() {
            if let Err(e) = services.member_service.record_sighting(chat_id.0, user).await {
                warn!(error = %e, chat_id = ?chat_id, "Failed to record sender sighting");
            }
        }
    }

    let result = match cmd {
        Command::AddUser => admin::handle_add_user(bot.clone(), msg, services).await,
        Command::RemoveUser => admin::handle_remove_user(bot.clone(), msg, services).await,
        Command::AddBalance(amount) => {
            balance::handle_add_balance(bot.clone(), msg, services, amount).await
        }
        Command::DeductBalance(amount) => {
            balance::handle_deduct_balance(bot.clone(), msg, services, amount).await
        }
        Command::Balance => balance::handle_balance(bot.clone(), msg, services).await,
        Command::Help => help::handle_help(bot.clone(), msg).await,
        Command::Start => start::handle_start(bot.clone(), msg).await,
    };

    if let Err(e) = result {
        if e.is_request_fault() {
            warn!(error = %e, command = ?cmd, "Command rejected");
        } else {
            error!(error = %e, command = ?cmd, "Error handling command");
        }
        let fallback = match cmd {
            Command::Balance => "❌ An error occurred!",
            _ => "❌ An error occurred while processing your request!",
        };
        if let Err(send_err) = bot.send_message(chat_id, fallback).await {
            error!(error = %send_err, "Failed to send error reply");
        }
    }

    Ok(())
}
