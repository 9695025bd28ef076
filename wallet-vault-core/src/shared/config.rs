//! Vault configuration
//!
//! Read from the environment (optionally seeded from a `.env` file).
//!
//! Keys: WALLET_VAULT_DATA_DIR, WALLET_VAULT_PROVIDER_URL,
//!       WALLET_VAULT_PROVIDER_TIMEOUT_MS, WALLET_VAULT_CIPHER

use crate::core::crypto::encryption::EncryptionAlgorithm;
use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::WalletResult;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_DATA_DIR: &str = "WALLET_VAULT_DATA_DIR";
pub const ENV_PROVIDER_URL: &str = "WALLET_VAULT_PROVIDER_URL";
pub const ENV_PROVIDER_TIMEOUT_MS: &str = "WALLET_VAULT_PROVIDER_TIMEOUT_MS";
pub const ENV_CIPHER: &str = "WALLET_VAULT_CIPHER";

#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Directory holding the wallet collection file
    pub data_dir: PathBuf,
    /// Base URL of the wallet generation provider, if one is configured
    pub provider_url: Option<String>,
    pub provider_timeout: Duration,
    /// AEAD used for newly sealed secrets
    pub cipher: EncryptionAlgorithm,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            provider_url: None,
            provider_timeout: Duration::from_millis(DEFAULT_PROVIDER_TIMEOUT_MS),
            cipher: EncryptionAlgorithm::AES256GCM,
        }
    }
}

impl VaultConfig {
    /// Load configuration from .env or safe defaults
    pub fn from_env() -> WalletResult<Self> {
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(dir) = env::var(ENV_DATA_DIR) {
            if !dir.trim().is_empty() {
                config.data_dir = PathBuf::from(dir);
            }
        }

        config.provider_url = env::var(ENV_PROVIDER_URL)
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        if let Ok(raw) = env::var(ENV_PROVIDER_TIMEOUT_MS) {
            let millis: u64 = raw.trim().parse().map_err(|_| {
                WalletError::config(format!("{} must be a number of milliseconds", ENV_PROVIDER_TIMEOUT_MS))
            })?;
            if millis == 0 {
                return Err(WalletError::config(format!("{} must be greater than zero", ENV_PROVIDER_TIMEOUT_MS)));
            }
            config.provider_timeout = Duration::from_millis(millis);
        }

        if let Ok(raw) = env::var(ENV_CIPHER) {
            config.cipher = EncryptionAlgorithm::from_tag(raw.trim())
                .ok_or_else(|| WalletError::config(format!("Unknown cipher in {}: {}", ENV_CIPHER, raw)))?;
        }

        Ok(config)
    }

    /// Path of the wallet collection file
    pub fn wallets_file(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", WALLETS_STORAGE_KEY))
    }
}

/// OS-specific app data directory, falling back to a local directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("./vault_storage"))
        .join(DATA_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VaultConfig::default();
        assert!(config.data_dir.ends_with(DATA_DIR_NAME));
        assert!(config.provider_url.is_none());
        assert_eq!(config.provider_timeout, Duration::from_millis(DEFAULT_PROVIDER_TIMEOUT_MS));
        assert_eq!(config.cipher, EncryptionAlgorithm::AES256GCM);
    }

    #[test]
    fn test_wallets_file_lives_in_data_dir() {
        let config = VaultConfig {
            data_dir: PathBuf::from("/tmp/vault"),
            ..VaultConfig::default()
        };
        assert_eq!(config.wallets_file(), PathBuf::from("/tmp/vault/wallets.json"));
    }
}
