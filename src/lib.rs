//! VoucherBot Telegram Bot
//!
//! A Telegram bot for voucher trading groups. It manages which users are
//! authorized to trade in which group, tracks per-user TK/USDT balances,
//! and answers a small table of literal dot-commands. A liveness HTTP
//! endpoint keeps hosting platforms from recycling the process.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod handlers;
pub mod health;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, VoucherBotError};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use store::{MemberDirectory, RecordStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
