//! Passphrase handling for the wallet vault
//!
//! This module handles the passphrase wrapper and key derivation.

pub mod key_derivation;
pub mod passphrase;
pub mod password_config;
pub mod password_algorithm;

// Re-export all public items from submodules
pub use key_derivation::*;
pub use passphrase::*;
pub use password_config::*;
pub use password_algorithm::*;
