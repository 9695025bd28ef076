//! Passphrase encryption for wallet secrets
//!
//! This module seals private keys and mnemonics under a user passphrase with
//! AES-256-GCM or ChaCha20-Poly1305, keyed by Argon2id.

pub mod passphrase_cipher;
pub mod encryption_algorithm;
pub mod encrypted_data;

// Re-export all public items from submodules
pub use passphrase_cipher::*;
pub use encryption_algorithm::*;
pub use encrypted_data::*;
