//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for the dot-command table
//! - Message handlers for plain text and member join/leave updates

pub mod commands;
pub mod messages;

// Re-export commonly used handler functions
pub use commands::{handle_command, parse_command, Command};
pub use messages::{handle_left_chat_member, handle_message, handle_new_chat_member};
