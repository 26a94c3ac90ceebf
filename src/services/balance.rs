//! Balance service implementation
//!
//! Balance arithmetic on user records. Adjustments are delegated to the
//! store as a single atomic operation so concurrent commands on the same
//! user cannot lose updates.

use std::sync::Arc;
use tracing::{debug, info};
use crate::models::{AdjustMode, Currency, UserRecord};
use crate::store::RecordStore;
use crate::utils::errors::{Result, VoucherBotError};

/// Balance service for crediting and debiting user records
#[derive(Clone)]
pub struct BalanceService {
    store: Arc<dyn RecordStore>,
}

impl BalanceService {
    /// Create a new BalanceService instance
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Apply an adjustment to one currency and return the new balance.
    ///
    /// The record must already exist; adjustments never create one. No
    /// bounds are enforced, so balances may go negative.
    pub async fn adjust(
        &self,
        user_id: i64,
        currency: Currency,
        mode: AdjustMode,
        amount: f64,
    ) -> Result<f64> {
        debug!(user_id = user_id, currency = %currency, mode = ?mode, amount = amount, "Adjusting balance");

        let new_balance = self
            .store
            .adjust_balance(user_id, currency, mode, amount)
            .await?
            .ok_or(VoucherBotError::RecordNotFound { user_id })?;

        info!(user_id = user_id, currency = %currency, new_balance = new_balance, "Balance adjusted");
        Ok(new_balance)
    }

    /// Fetch the user's record for balance display, if one exists.
    pub async fn snapshot(&self, user_id: i64) -> Result<Option<UserRecord>> {
        self.store.fetch(user_id).await
    }
}
