//! Shared types, utilities, and constants
//!
//! This module contains common types, utilities, configuration and constants
//! used throughout the vault core.

pub mod types;
pub mod utils;
pub mod constants;
pub mod error;
pub mod config;

// Re-export shared components
pub use types::*;
pub use utils::*;
pub use constants::*;
pub use error::*;
pub use config::*;
