//! Database module
//!
//! This module handles connection pooling and schema migrations

pub mod connection;

// Re-export commonly used database components
pub use connection::{DatabasePool, create_pool, run_migrations};
