//! Cryptographic functionality for the wallet vault
//!
//! This module provides the passphrase cipher, key derivation and the
//! zeroizing wrappers for plaintext secrets.
//!
//! SECURITY:
//! - Derived keys and passphrases are wiped when dropped
//! - Every seal uses a fresh salt and nonce from the OS RNG
//! - Open failures never reveal whether the passphrase or the blob was wrong

pub mod keys;
pub mod encryption;
pub mod password;

// Re-export all public items from submodules
pub use keys::*;
pub use encryption::*;
pub use password::*;
