//! Wallet generation provider port
//!
//! Key material for new wallets comes from an external generation service.
//! The vault only sees it through [`WalletGenerationProvider`]; the HTTP
//! adapter lives in `infrastructure::provider`.

use crate::core::crypto::keys::{SecurePrivateKey, SecureSeedPhrase};
use crate::shared::types::{Address, Network};
use crate::shared::WalletResult;
use async_trait::async_trait;

/// Fresh key material returned by a provider.
///
/// Secrets are held in zeroizing wrappers from the moment they arrive.
pub struct GeneratedWallet {
    pub address: Address,
    pub private_key: SecurePrivateKey,
    pub mnemonic: Option<SecureSeedPhrase>,
}

/// Source of newly generated wallets
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalletGenerationProvider: Send + Sync {
    /// Generate a wallet on `network`.
    ///
    /// Transport failures are `Provider` errors; a response without an
    /// address or private key is `MalformedResponse`.
    async fn generate(&self, network: Network) -> WalletResult<GeneratedWallet>;
}
