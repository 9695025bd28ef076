//! Wallet Vault Core
//!
//! Local encrypted vault for blockchain wallets.
//! Generates wallets through an external provider, seals their secrets under
//! a user passphrase, persists the records, and totals portfolio value.
//!
//! ## Architecture
//!
//! - **Core**: Passphrase cipher, wallet store, wallet creation, portfolio
//! - **Domain**: Wallet records and the repository contract
//! - **Infrastructure**: File storage and the HTTP generation provider
//! - **Shared**: Common types, configuration, constants, and utilities
//!
//! ## Security Features
//!
//! - Secrets are sealed with Argon2id + AES-256-GCM (or ChaCha20-Poly1305)
//! - Plaintext keys only live in zeroize-on-drop wrappers
//! - The collection file is replaced atomically on every write
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wallet_vault_core::{Network, Passphrase, VaultConfig, WalletVault};
//!
//! # async fn run() -> Result<(), wallet_vault_core::WalletError> {
//! let vault = WalletVault::open(&VaultConfig::from_env()?)?;
//!
//! let disclosure = vault
//!     .create_generated_wallet("Savings", Network::Ethereum, Passphrase::new("correct horse"))
//!     .await?;
//! println!("New wallet at {}", disclosure.address);
//!
//! vault.add_manual_wallet("Cold", "0xdef", "bnb", "1.5", "300.00").await?;
//! let summary = vault.portfolio().await?;
//! println!("Portfolio: ${:.2} ({:+.2}%)", summary.total_value, summary.total_change_percent);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod core;
pub mod domain;
pub mod shared;
pub mod infrastructure;

use crate::core::crypto::encryption::{EncryptedBlob, PassphraseCipher};
use crate::core::crypto::keys::{SecurePrivateKey, SecureSeedPhrase};
use crate::core::crypto::password::PasswordConfig;
use crate::core::portfolio;
use crate::core::storage::WalletStore;
use crate::domain::repositories::WalletRepository;
use crate::infrastructure::platform::FileStorage;
use crate::infrastructure::provider::HttpGenerationProvider;
use crate::shared::utils::validate_wallet_name;
use zeroize::Zeroizing;

// Re-export specific components
pub use crate::core::crypto::encryption::EncryptionAlgorithm;
pub use crate::core::crypto::password::Passphrase;
pub use crate::core::portfolio::PortfolioSummary;
pub use crate::core::wallet::{
    CreationState, GeneratedWallet, WalletDisclosure, WalletGenerationProvider, WalletManager,
};
pub use crate::domain::entities::{SealedSecret, TokenBalance, TransactionEntry, WalletRecord};
pub use crate::shared::config::VaultConfig;
pub use crate::shared::error::WalletError;
pub use crate::shared::types::{Network, WalletId, WalletResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging; `RUST_LOG` overrides the default `info` level.
/// Safe to call more than once.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();
}

/// Handle to an open vault. Every operation goes through it.
pub struct WalletVault {
    store: Arc<dyn WalletRepository>,
    manager: WalletManager,
    cipher: PassphraseCipher,
}

impl WalletVault {
    /// Open the vault stored under `config.data_dir`
    pub fn open(config: &VaultConfig) -> WalletResult<Self> {
        let storage = Arc::new(FileStorage::new(&config.data_dir)?);
        let store = Arc::new(WalletStore::open(storage)?);
        let provider = HttpGenerationProvider::from_config(config)?
            .map(|p| Arc::new(p) as Arc<dyn WalletGenerationProvider>);
        if provider.is_none() {
            log::warn!("No wallet generation provider configured; only manual wallets can be added");
        }
        let cipher = PassphraseCipher::new(config.cipher, PasswordConfig::default());
        log::info!("Opened wallet vault at {}", config.data_dir.display());
        Ok(Self::open_with(store, provider, cipher))
    }

    /// Open with configuration from .env or safe defaults
    pub fn from_env() -> WalletResult<Self> {
        Self::open(&VaultConfig::from_env()?)
    }

    /// Assemble a vault from explicit parts
    pub fn open_with(
        store: Arc<dyn WalletRepository>,
        provider: Option<Arc<dyn WalletGenerationProvider>>,
        cipher: PassphraseCipher,
    ) -> Self {
        let manager = WalletManager::new(store.clone(), provider, cipher.clone());
        Self { store, manager, cipher }
    }

    /// Generate, seal and persist a wallet; the returned disclosure is the
    /// only time its plaintext secrets leave the vault.
    pub async fn create_generated_wallet(
        &self,
        name: &str,
        network: Network,
        passphrase: Passphrase,
    ) -> WalletResult<WalletDisclosure> {
        self.manager.create_generated_wallet(name, network, passphrase).await
    }

    /// Track a wallet by address without holding its secret
    pub async fn add_manual_wallet(
        &self,
        name: &str,
        address: &str,
        network: &str,
        balance: &str,
        balance_usd: &str,
    ) -> WalletResult<WalletRecord> {
        self.manager
            .add_manual_wallet(name, address, network, balance, balance_usd)
            .await
    }

    /// Every wallet, in the order they were added
    pub async fn list_wallets(&self) -> WalletResult<Vec<WalletRecord>> {
        self.store.list_all().await
    }

    pub async fn get_wallet(&self, id: &str) -> WalletResult<WalletRecord> {
        self.store.get(id).await
    }

    pub async fn rename_wallet(&self, id: &str, name: &str) -> WalletResult<WalletRecord> {
        let name = validate_wallet_name(name)?;
        self.store.update(id, Box::new(move |w: &mut WalletRecord| w.name = name)).await
    }

    /// Apply a change such as refreshed balances or token holdings.
    /// `id`, `address`, `network` and `created_at` cannot be changed.
    pub async fn update_wallet<F>(&self, id: &str, mutator: F) -> WalletResult<WalletRecord>
    where
        F: FnOnce(&mut WalletRecord) + Send + 'static,
    {
        self.store.update(id, Box::new(mutator)).await
    }

    pub async fn delete_wallet(&self, id: &str) -> WalletResult<WalletRecord> {
        let removed = self.store.delete(id).await?;
        log::info!("Deleted wallet {}", id);
        Ok(removed)
    }

    /// Totals for an arbitrary set of records
    pub fn aggregate(records: &[WalletRecord]) -> PortfolioSummary {
        portfolio::aggregate(records)
    }

    /// Totals for every wallet currently in the vault
    pub async fn portfolio(&self) -> WalletResult<PortfolioSummary> {
        Ok(portfolio::aggregate(&self.store.list_all().await?))
    }

    /// Check `passphrase` against a generated wallet's sealed key
    pub async fn verify_passphrase(&self, id: &str, passphrase: Passphrase) -> WalletResult<()> {
        let blob = self.sealed_private_key(id).await?;
        self.open_blob(blob, passphrase).await.map(|_| ())
    }

    /// Run `f` with a wallet's decrypted private key; the key is wiped
    /// when `f` returns.
    pub async fn with_private_key<F, R>(&self, id: &str, passphrase: Passphrase, f: F) -> WalletResult<R>
    where
        F: FnOnce(&SecurePrivateKey) -> R,
    {
        let blob = self.sealed_private_key(id).await?;
        let plaintext = self.open_blob(blob, passphrase).await?;
        let key = SecurePrivateKey::new(utf8_secret(&plaintext)?);
        Ok(f(&key))
    }

    /// Run `f` with a wallet's decrypted seed phrase
    pub async fn with_mnemonic<F, R>(&self, id: &str, passphrase: Passphrase, f: F) -> WalletResult<R>
    where
        F: FnOnce(&SecureSeedPhrase) -> R,
    {
        let wallet = self.store.get(id).await?;
        let blob = wallet
            .mnemonic
            .blob()
            .cloned()
            .ok_or_else(|| WalletError::invalid_input(format!("Wallet {} has no stored mnemonic", id)))?;
        let plaintext = self.open_blob(blob, passphrase).await?;
        let phrase = SecureSeedPhrase::new(utf8_secret(&plaintext)?);
        Ok(f(&phrase))
    }

    async fn sealed_private_key(&self, id: &str) -> WalletResult<EncryptedBlob> {
        let wallet = self.store.get(id).await?;
        wallet
            .private_key
            .blob()
            .cloned()
            .ok_or_else(|| WalletError::invalid_input(format!("Wallet {} is tracked without a private key", id)))
    }

    async fn open_blob(&self, blob: EncryptedBlob, passphrase: Passphrase) -> WalletResult<Zeroizing<Vec<u8>>> {
        let cipher = self.cipher.clone();
        tokio::task::spawn_blocking(move || cipher.open(&blob, &passphrase)).await?
    }
}

fn utf8_secret(plaintext: &[u8]) -> WalletResult<String> {
    std::str::from_utf8(plaintext)
        .map(str::to_string)
        .map_err(|_| WalletError::crypto("Decrypted secret is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wallet::MockWalletGenerationProvider;
    use crate::infrastructure::platform::PlatformStorage;
    use tempfile::TempDir;

    fn test_cipher() -> PassphraseCipher {
        PassphraseCipher::new(EncryptionAlgorithm::AES256GCM, PasswordConfig::for_tests())
    }

    fn provider() -> Arc<dyn WalletGenerationProvider> {
        let mut mock = MockWalletGenerationProvider::new();
        mock.expect_generate().returning(|_| {
            Ok(GeneratedWallet {
                address: "0xabc".to_string(),
                private_key: SecurePrivateKey::new("k1".to_string()),
                mnemonic: Some(SecureSeedPhrase::new("alpha beta gamma".to_string())),
            })
        });
        Arc::new(mock)
    }

    fn open_vault(dir: &TempDir) -> WalletVault {
        let storage: Arc<dyn PlatformStorage> = Arc::new(FileStorage::new(dir.path()).unwrap());
        let store = Arc::new(WalletStore::open(storage).unwrap());
        WalletVault::open_with(store, Some(provider()), test_cipher())
    }

    #[tokio::test]
    async fn test_generated_wallet_survives_restart() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let id = {
            let vault = open_vault(&dir);
            let disclosure = vault
                .create_generated_wallet("W1", Network::Ethereum, Passphrase::new("p"))
                .await
                .unwrap();
            disclosure.wallet.id.clone()
        };

        let vault = open_vault(&dir);
        let wallets = vault.list_wallets().await.unwrap();
        assert_eq!(wallets.len(), 1);
        assert_eq!(wallets[0].id, id);

        let key = vault
            .with_private_key(&id, Passphrase::new("p"), |k| k.expose_secret().to_string())
            .await
            .unwrap();
        assert_eq!(key, "k1");
        let words = vault
            .with_mnemonic(&id, Passphrase::new("p"), |m| m.as_words().len())
            .await
            .unwrap();
        assert_eq!(words, 3);
    }

    #[tokio::test]
    async fn test_persisted_file_holds_no_plaintext() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let vault = open_vault(&dir);
        vault
            .create_generated_wallet("W1", Network::Ethereum, Passphrase::new("p"))
            .await
            .unwrap();

        let config = VaultConfig {
            data_dir: dir.path().to_path_buf(),
            ..VaultConfig::default()
        };
        let contents = std::fs::read_to_string(config.wallets_file()).unwrap();
        assert!(contents.contains("0xabc"));
        assert!(!contents.contains("alpha beta gamma"));
        assert!(!contents.contains("\"k1\""));
    }

    #[tokio::test]
    async fn test_verify_passphrase() {
        let vault = WalletVault::open_with(Arc::new(WalletStore::in_memory()), Some(provider()), test_cipher());
        let disclosure = vault
            .create_generated_wallet("W1", Network::Polygon, Passphrase::new("right"))
            .await
            .unwrap();
        let id = disclosure.wallet.id.clone();
        drop(disclosure);

        assert!(vault.verify_passphrase(&id, Passphrase::new("right")).await.is_ok());
        assert!(matches!(
            vault.verify_passphrase(&id, Passphrase::new("wrong")).await,
            Err(WalletError::AuthenticationFailure)
        ));
    }

    #[tokio::test]
    async fn test_manual_wallet_has_nothing_to_unlock() {
        let vault = WalletVault::open_with(Arc::new(WalletStore::in_memory()), None, test_cipher());
        let wallet = vault
            .add_manual_wallet("W2", "0xdef", "bnb", "1.5", "300.00")
            .await
            .unwrap();

        assert!(matches!(
            vault.verify_passphrase(&wallet.id, Passphrase::new("p")).await,
            Err(WalletError::InvalidInput(_))
        ));
        assert!(matches!(
            vault.with_mnemonic(&wallet.id, Passphrase::new("p"), |_| ()).await,
            Err(WalletError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_rename_update_delete() {
        let vault = WalletVault::open_with(Arc::new(WalletStore::in_memory()), None, test_cipher());
        let wallet = vault
            .add_manual_wallet("W2", "0xdef", "bnb", "1.5", "300.00")
            .await
            .unwrap();

        let renamed = vault.rename_wallet(&wallet.id, " Cold storage ").await.unwrap();
        assert_eq!(renamed.name, "Cold storage");
        assert!(matches!(
            vault.rename_wallet(&wallet.id, "").await,
            Err(WalletError::InvalidInput(_))
        ));

        let updated = vault
            .update_wallet(&wallet.id, |w| {
                w.balance_usd = 320.0;
                w.change_24h = 20.0;
            })
            .await
            .unwrap();
        assert_eq!(updated.balance_usd, 320.0);
        assert_eq!(vault.get_wallet(&wallet.id).await.unwrap().change_24h, 20.0);

        vault.delete_wallet(&wallet.id).await.unwrap();
        assert!(matches!(vault.get_wallet(&wallet.id).await, Err(WalletError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_portfolio_over_vault() {
        let vault = WalletVault::open_with(Arc::new(WalletStore::in_memory()), None, test_cipher());
        let a = vault.add_manual_wallet("A", "0x1", "ethereum", "1", "100").await.unwrap();
        let b = vault.add_manual_wallet("B", "0x2", "polygon", "1", "250").await.unwrap();
        vault.update_wallet(&a.id, |w| w.change_24h = 10.0).await.unwrap();
        vault.update_wallet(&b.id, |w| w.change_24h = -5.0).await.unwrap();

        let summary = vault.portfolio().await.unwrap();
        assert_eq!(summary.total_value, 350.0);
        assert_eq!(summary.total_change, 5.0);
        assert!((summary.total_change_percent - 1.4493).abs() < 1e-3);

        let wallets = vault.list_wallets().await.unwrap();
        assert_eq!(WalletVault::aggregate(&wallets), summary);
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
