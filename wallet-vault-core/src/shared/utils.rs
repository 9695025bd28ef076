//! Utility functions for the wallet vault
//!
//! This module contains common utility functions used throughout the vault core.

use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::WalletResult;
use rand_core::OsRng;
use rand_core::RngCore;

/// Generate a new wallet id
pub fn generate_wallet_id() -> String {
    format!("{}{}", WALLET_ID_PREFIX, uuid::Uuid::new_v4())
}

/// Validate a user-chosen wallet label
pub fn validate_wallet_name(name: &str) -> WalletResult<String> {
    let trimmed = name.trim();
    if trimmed.len() < WALLET_NAME_MIN_LENGTH {
        return Err(WalletError::invalid_input("Wallet name cannot be empty"));
    }
    if trimmed.chars().count() > WALLET_NAME_MAX_LENGTH {
        return Err(WalletError::invalid_input(format!(
            "Wallet name must be at most {} characters",
            WALLET_NAME_MAX_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a public account address.
///
/// Address formats differ per chain, so this only rejects blanks, embedded
/// whitespace and absurd lengths.
pub fn validate_address(address: &str) -> WalletResult<String> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(WalletError::invalid_input("Wallet address cannot be empty"));
    }
    if trimmed.len() > ADDRESS_MAX_LENGTH {
        return Err(WalletError::invalid_input("Wallet address is too long"));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(WalletError::invalid_input("Wallet address cannot contain whitespace"));
    }
    Ok(trimmed.to_string())
}

/// Parse a user-entered decimal amount such as `"1.5"` or `"300.00"`.
///
/// Rejects blanks, non-numeric text, NaN/infinity and negative values.
pub fn parse_amount(field: &str, amount: &str) -> WalletResult<f64> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(WalletError::invalid_input(format!("{} is required", field)));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-' || c == '+')
    {
        return Err(WalletError::invalid_input(format!("{} must be a decimal number", field)));
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| WalletError::invalid_input(format!("{} must be a decimal number", field)))?;
    if !value.is_finite() {
        return Err(WalletError::invalid_input(format!("{} must be finite", field)));
    }
    if value < 0.0 {
        return Err(WalletError::invalid_input(format!("{} cannot be negative", field)));
    }
    Ok(value)
}

/// Generate secure random bytes
pub fn generate_random_bytes(length: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; length];
    let mut rng = OsRng;
    rng.fill_bytes(&mut bytes);
    bytes
}

/// Serde adapter storing byte vectors as standard base64 strings
pub mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
