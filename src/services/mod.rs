//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod balance;
pub mod members;

// Re-export commonly used services
pub use auth::{AuthService, GrantOutcome, RevokeOutcome};
pub use balance::BalanceService;
pub use members::{MemberService, Resolution};

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::store::{MemberDirectory, RecordStore};

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub balance_service: BalanceService,
    pub member_service: MemberService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(
        settings: &Settings,
        store: Arc<dyn RecordStore>,
        directory: Arc<dyn MemberDirectory>,
    ) -> Self {
        let auth_service = AuthService::new(Arc::clone(&store), &settings.bot.admin_ids);
        let balance_service = BalanceService::new(store);
        let member_service = MemberService::new(directory);

        Self {
            auth_service,
            balance_service,
            member_service,
        }
    }
}
