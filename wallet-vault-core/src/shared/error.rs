//! Error handling for the wallet vault
//!
//! This module defines the error types used throughout the vault core.
//! Cipher failures never say *why* an `open` failed: a wrong passphrase and a
//! tampered blob both surface as [`WalletError::AuthenticationFailure`].

use thiserror::Error;

/// Wallet vault error type
#[derive(Error, Debug, Clone)]
pub enum WalletError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Authentication failed: wrong passphrase or corrupted secret")]
    AuthenticationFailure,

    #[error("Unsupported encrypted blob: {0}")]
    UnsupportedVersion(String),

    #[error("Wallet id already exists: {0}")]
    DuplicateId(String),

    #[error("Wallet not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Create a provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Create a malformed response error
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Create an unsupported version error
    pub fn unsupported_version(message: impl Into<String>) -> Self {
        Self::UnsupportedVersion(message.into())
    }

    /// Create a duplicate id error
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    /// Create a not found error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a cryptographic error
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

// Standard library error conversions
impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::storage(format!("JSON error: {}", err))
    }
}

impl From<tokio::task::JoinError> for WalletError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Task join error: {}", err))
    }
}

impl From<argon2::Error> for WalletError {
    fn from(err: argon2::Error) -> Self {
        Self::crypto(format!("Argon2 error: {}", err))
    }
}

impl From<reqwest::Error> for WalletError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::malformed_response(format!("Undecodable provider body: {}", err))
        } else {
            Self::provider(err.to_string())
        }
    }
}
