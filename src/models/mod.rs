//! Data models for VoucherBot

pub mod balance;
pub mod member;
pub mod user;

pub use balance::{AdjustMode, Currency};
pub use member::SeenMember;
pub use user::{NewUserRecord, UserRecord};
