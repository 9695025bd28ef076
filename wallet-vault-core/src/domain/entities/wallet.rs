//! Wallet record entity
//!
//! A `WalletRecord` is the durable unit of the vault. Secrets only ever
//! appear in it sealed; a manually tracked wallet has none at all.

use crate::core::crypto::encryption::EncryptedBlob;
use crate::shared::types::{Address, Network, WalletId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::{TokenBalance, TransactionEntry};

/// Secret material attached to a wallet record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "blob", rename_all = "snake_case")]
pub enum SealedSecret {
    /// No secret held locally
    #[default]
    None,
    Sealed(EncryptedBlob),
}

impl SealedSecret {
    pub fn is_sealed(&self) -> bool {
        matches!(self, SealedSecret::Sealed(_))
    }

    pub fn blob(&self) -> Option<&EncryptedBlob> {
        match self {
            SealedSecret::None => None,
            SealedSecret::Sealed(blob) => Some(blob),
        }
    }
}

impl From<Option<EncryptedBlob>> for SealedSecret {
    fn from(blob: Option<EncryptedBlob>) -> Self {
        blob.map_or(SealedSecret::None, SealedSecret::Sealed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletRecord {
    pub id: WalletId,
    pub name: String,
    pub address: Address,
    pub network: Network,
    /// Holdings in the network's native unit
    pub balance: f64,
    /// Fiat value of the holdings; the figure portfolio totals are built from
    pub balance_usd: f64,
    pub change_24h: f64,
    pub change_percent_24h: f64,
    #[serde(default)]
    pub tokens: Vec<TokenBalance>,
    #[serde(default)]
    pub transactions: Vec<TransactionEntry>,
    #[serde(default)]
    pub private_key: SealedSecret,
    #[serde(default)]
    pub mnemonic: SealedSecret,
    pub created_at: DateTime<Utc>,
}

impl WalletRecord {
    /// Record for a vault-generated wallet: zero balances, sealed secrets
    pub fn generated(
        id: WalletId,
        name: String,
        address: Address,
        network: Network,
        private_key: EncryptedBlob,
        mnemonic: SealedSecret,
    ) -> Self {
        Self {
            id,
            name,
            address,
            network,
            balance: 0.0,
            balance_usd: 0.0,
            change_24h: 0.0,
            change_percent_24h: 0.0,
            tokens: Vec::new(),
            transactions: Vec::new(),
            private_key: SealedSecret::Sealed(private_key),
            mnemonic,
            created_at: Utc::now(),
        }
    }

    /// Record for a wallet the user tracks without holding its secret
    pub fn manual(
        id: WalletId,
        name: String,
        address: Address,
        network: Network,
        balance: f64,
        balance_usd: f64,
    ) -> Self {
        Self {
            id,
            name,
            address,
            network,
            balance,
            balance_usd,
            change_24h: 0.0,
            change_percent_24h: 0.0,
            tokens: Vec::new(),
            transactions: Vec::new(),
            private_key: SealedSecret::None,
            mnemonic: SealedSecret::None,
            created_at: Utc::now(),
        }
    }

    /// True when the vault holds this wallet's private key
    pub fn holds_secret(&self) -> bool {
        self.private_key.is_sealed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crypto::password::PasswordConfig;

    fn blob() -> EncryptedBlob {
        EncryptedBlob {
            version: 1,
            algorithm: "aes-256-gcm".to_string(),
            kdf: PasswordConfig::default().to_params(),
            salt: vec![0; 32],
            nonce: vec![0; 12],
            ciphertext: vec![1, 2, 3],
            tag: vec![0; 16],
        }
    }

    #[test]
    fn test_manual_record_has_no_secrets() {
        let record = WalletRecord::manual(
            "wallet_1".to_string(),
            "W2".to_string(),
            "0xdef".to_string(),
            Network::BnbChain,
            1.5,
            300.0,
        );
        assert!(!record.holds_secret());
        assert_eq!(record.mnemonic, SealedSecret::None);
        assert_eq!(record.change_24h, 0.0);
        assert!(record.tokens.is_empty());
        assert!(record.transactions.is_empty());
    }

    #[test]
    fn test_generated_record_is_zeroed() {
        let record = WalletRecord::generated(
            "wallet_2".to_string(),
            "W1".to_string(),
            "0xabc".to_string(),
            Network::Ethereum,
            blob(),
            SealedSecret::None,
        );
        assert!(record.holds_secret());
        assert_eq!(record.balance, 0.0);
        assert_eq!(record.balance_usd, 0.0);
        assert_eq!(record.change_percent_24h, 0.0);
    }

    #[test]
    fn test_sealed_secret_serialization() {
        let none = serde_json::to_value(SealedSecret::None).unwrap();
        assert_eq!(none["state"], "none");

        let sealed = serde_json::to_value(SealedSecret::Sealed(blob())).unwrap();
        assert_eq!(sealed["state"], "sealed");
        assert_eq!(sealed["blob"]["algorithm"], "aes-256-gcm");

        let back: SealedSecret = serde_json::from_value(sealed).unwrap();
        assert_eq!(back.blob(), Some(&blob()));
    }

    #[test]
    fn test_record_without_secret_fields_deserializes() {
        let json = serde_json::json!({
            "id": "wallet_3",
            "name": "Old",
            "address": "0x1",
            "network": "ethereum",
            "balance": 1.0,
            "balance_usd": 2.0,
            "change_24h": 0.5,
            "change_percent_24h": 33.3,
            "created_at": "2024-01-01T00:00:00Z"
        });
        let record: WalletRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.private_key, SealedSecret::None);
        assert!(record.tokens.is_empty());
    }

    #[test]
    fn test_sealed_secret_from_option() {
        assert_eq!(SealedSecret::from(None), SealedSecret::None);
        assert!(SealedSecret::from(Some(blob())).is_sealed());
    }
}
