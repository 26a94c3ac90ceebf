//! Test helpers module
//!
//! This module provides utilities and helpers for testing the VoucherBot
//! application: a mock Telegram API server and builders for inbound updates.

pub mod telegram_mock;
pub mod test_data;

pub use telegram_mock::*;
pub use test_data::*;
