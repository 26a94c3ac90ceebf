//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured before the bot
//! starts handling any commands.

use super::Settings;
use crate::utils::errors::{Result, VoucherBotError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_database_config(&settings.database)?;
    validate_server_config(&settings.server)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(VoucherBotError::Config(
            "Bot token is required".to_string(),
        ));
    }

    if config.admin_ids.is_empty() {
        return Err(VoucherBotError::Config(
            "At least one admin ID must be configured".to_string(),
        ));
    }

    if config.admin_ids.iter().any(|id| *id <= 0) {
        return Err(VoucherBotError::Config(
            "Admin IDs must be positive Telegram user IDs".to_string(),
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(VoucherBotError::Config(
            "Database URL is required".to_string(),
        ));
    }

    if config.max_connections == 0 {
        return Err(VoucherBotError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(VoucherBotError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate liveness endpoint configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.parse::<std::net::IpAddr>().is_err() {
        return Err(VoucherBotError::Config(format!(
            "Invalid liveness bind address: {}",
            config.host
        )));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(VoucherBotError::Config(
            "Log level is required".to_string(),
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(VoucherBotError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
