//! Balance currencies and adjustment modes

use std::fmt;

/// Currencies tracked per user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Tk,
    Usdt,
}

impl Currency {
    /// Column holding this currency's balance in `voucher_users`.
    pub fn column(&self) -> &'static str {
        match self {
            Currency::Tk => "balance_tk",
            Currency::Usdt => "balance_usdt",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Tk => write!(f, "TK"),
            Currency::Usdt => write!(f, "USDT"),
        }
    }
}

/// How an adjustment applies to the stored balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustMode {
    /// Increment by the amount.
    Add,
    /// Decrement by the amount. Balances may go negative.
    Subtract,
    /// Overwrite with the amount.
    Set,
}
