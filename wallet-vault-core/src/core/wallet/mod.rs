//! Wallet creation for the vault
//!
//! `WalletManager` drives a generated wallet through
//! `Requesting -> Sealing -> Persisting -> Disclosed` (or `Failed`), and
//! admits manually tracked wallets after validating every field.

pub mod provider;

pub use provider::*;

use crate::core::crypto::encryption::{EncryptedBlob, PassphraseCipher};
use crate::core::crypto::keys::{SecurePrivateKey, SecureSeedPhrase};
use crate::core::crypto::password::Passphrase;
use crate::domain::entities::{SealedSecret, WalletRecord};
use crate::domain::repositories::WalletRepository;
use crate::shared::constants::DUPLICATE_ID_RETRIES;
use crate::shared::error::WalletError;
use crate::shared::types::{Address, Network, WalletId};
use crate::shared::utils::{generate_wallet_id, parse_amount, validate_address, validate_wallet_name};
use crate::shared::WalletResult;
use std::sync::Arc;

/// Stages of a generated wallet's creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationState {
    Requesting,
    Sealing,
    Persisting,
    Disclosed,
    Failed,
}

/// The one moment a generated wallet's secrets are shown to the caller.
///
/// Dropping the disclosure wipes the plaintext; nothing else holds it.
pub struct WalletDisclosure {
    pub wallet: WalletRecord,
    pub address: Address,
    pub private_key: SecurePrivateKey,
    pub mnemonic: Option<SecureSeedPhrase>,
}

/// Orchestrates wallet creation against a store and a generation provider
pub struct WalletManager {
    store: Arc<dyn WalletRepository>,
    provider: Option<Arc<dyn WalletGenerationProvider>>,
    cipher: PassphraseCipher,
    next_id: fn() -> WalletId,
}

impl WalletManager {
    pub fn new(
        store: Arc<dyn WalletRepository>,
        provider: Option<Arc<dyn WalletGenerationProvider>>,
        cipher: PassphraseCipher,
    ) -> Self {
        Self {
            store,
            provider,
            cipher,
            next_id: generate_wallet_id,
        }
    }

    #[cfg(test)]
    fn with_id_source(mut self, next_id: fn() -> WalletId) -> Self {
        self.next_id = next_id;
        self
    }

    fn enter(state: CreationState, network: Network) {
        log::debug!("Wallet creation on {}: {:?}", network, state);
    }

    /// Generate a wallet through the provider, seal its secrets under
    /// `passphrase`, persist it, and disclose the plaintext once.
    pub async fn create_generated_wallet(
        &self,
        name: &str,
        network: Network,
        passphrase: Passphrase,
    ) -> WalletResult<WalletDisclosure> {
        let name = validate_wallet_name(name)?;
        if passphrase.is_empty() {
            return Err(WalletError::invalid_input("Passphrase cannot be empty"));
        }
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| WalletError::config("No wallet generation provider configured"))?;

        let result = self.run_creation(provider.as_ref(), name, network, passphrase).await;
        match &result {
            Ok(disclosure) => {
                Self::enter(CreationState::Disclosed, network);
                log::info!("Created wallet {} on {}", disclosure.wallet.id, network);
            }
            Err(e) => {
                Self::enter(CreationState::Failed, network);
                log::warn!("Wallet creation on {} failed: {}", network, e);
            }
        }
        result
    }

    async fn run_creation(
        &self,
        provider: &dyn WalletGenerationProvider,
        name: String,
        network: Network,
        passphrase: Passphrase,
    ) -> WalletResult<WalletDisclosure> {
        Self::enter(CreationState::Requesting, network);
        let generated = provider.generate(network).await?;
        if generated.address.trim().is_empty() {
            return Err(WalletError::malformed_response("missing address"));
        }
        if generated.private_key.is_empty() {
            return Err(WalletError::malformed_response("missing private key"));
        }

        Self::enter(CreationState::Sealing, network);
        let (sealed, generated) = self.seal(generated, passphrase).await?;
        let (private_key_blob, mnemonic_blob) = sealed?;

        Self::enter(CreationState::Persisting, network);
        let address = generated.address.trim().to_string();
        let wallet = self
            .insert_with_fresh_id(|id| {
                WalletRecord::generated(
                    id,
                    name.clone(),
                    address.clone(),
                    network,
                    private_key_blob.clone(),
                    SealedSecret::from(mnemonic_blob.clone()),
                )
            })
            .await?;

        Ok(WalletDisclosure {
            wallet,
            address,
            private_key: generated.private_key,
            mnemonic: generated.mnemonic,
        })
    }

    /// Seal on the blocking pool; the KDF is deliberately slow.
    /// The plaintext comes back alongside the result for disclosure.
    async fn seal(
        &self,
        generated: GeneratedWallet,
        passphrase: Passphrase,
    ) -> WalletResult<(WalletResult<(EncryptedBlob, Option<EncryptedBlob>)>, GeneratedWallet)> {
        let cipher = self.cipher.clone();
        let joined = tokio::task::spawn_blocking(move || {
            let sealed = cipher
                .seal(generated.private_key.as_bytes(), &passphrase)
                .and_then(|key_blob| {
                    let mnemonic_blob = generated
                        .mnemonic
                        .as_ref()
                        .map(|m| cipher.seal(m.as_str().as_bytes(), &passphrase))
                        .transpose()?;
                    Ok((key_blob, mnemonic_blob))
                });
            (sealed, generated)
        })
        .await?;
        Ok(joined)
    }

    /// Track a wallet whose secret the vault does not hold
    pub async fn add_manual_wallet(
        &self,
        name: &str,
        address: &str,
        network: &str,
        balance: &str,
        balance_usd: &str,
    ) -> WalletResult<WalletRecord> {
        let name = validate_wallet_name(name)?;
        let address = validate_address(address)?;
        let network: Network = network.parse()?;
        let balance = parse_amount("balance", balance)?;
        let balance_usd = parse_amount("balance_usd", balance_usd)?;

        let wallet = self
            .insert_with_fresh_id(|id| {
                WalletRecord::manual(id, name.clone(), address.clone(), network, balance, balance_usd)
            })
            .await?;
        log::info!("Added manual wallet {} on {}", wallet.id, network);
        Ok(wallet)
    }

    /// Insert a record under a new id, regenerating the id on collision
    async fn insert_with_fresh_id<F>(&self, build: F) -> WalletResult<WalletRecord>
    where
        F: Fn(WalletId) -> WalletRecord,
    {
        for attempt in 0..=DUPLICATE_ID_RETRIES {
            let record = build((self.next_id)());
            match self.store.insert(record.clone()).await {
                Ok(()) => return Ok(record),
                Err(WalletError::DuplicateId(id)) => {
                    log::warn!("Wallet id {} already taken (attempt {})", id, attempt + 1);
                }
                Err(e) => return Err(e),
            }
        }
        Err(WalletError::internal("Could not allocate a unique wallet id"))
    }
}
