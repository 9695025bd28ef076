//! Durable wallet collection
//!
//! `WalletStore` keeps every wallet record in insertion order and persists
//! the whole collection as one JSON document through a [`PlatformStorage`]
//! backend. Writers are serialized on the collection lock; each write builds
//! the next collection, persists it, and only then makes it visible, so a
//! failed persist leaves both memory and disk unchanged.

use crate::domain::entities::WalletRecord;
use crate::domain::repositories::{WalletMutator, WalletRepository};
use crate::infrastructure::platform::{MemoryStorage, PlatformStorage};
use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::WalletResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::RwLock;

/// On-disk layout of the collection
#[derive(Deserialize)]
struct WalletCollection {
    version: u32,
    wallets: Vec<WalletRecord>,
}

#[derive(Serialize)]
struct WalletCollectionRef<'a> {
    version: u32,
    wallets: &'a [WalletRecord],
}

/// Persistent, insertion-ordered wallet store
pub struct WalletStore {
    storage: Arc<dyn PlatformStorage>,
    wallets: RwLock<Vec<WalletRecord>>,
}

impl WalletStore {
    /// Load the collection from `storage`; an absent document is an empty vault
    pub fn open(storage: Arc<dyn PlatformStorage>) -> WalletResult<Self> {
        let wallets = match storage.retrieve(WALLETS_STORAGE_KEY)? {
            None => Vec::new(),
            Some(bytes) => Self::decode(&bytes)?,
        };
        log::info!("Opened wallet store with {} wallet(s)", wallets.len());
        Ok(Self {
            storage,
            wallets: RwLock::new(wallets),
        })
    }

    /// Store backed by process memory only
    pub fn in_memory() -> Self {
        Self {
            storage: Arc::new(MemoryStorage::new()),
            wallets: RwLock::new(Vec::new()),
        }
    }

    fn decode(bytes: &[u8]) -> WalletResult<Vec<WalletRecord>> {
        let collection: WalletCollection = serde_json::from_slice(bytes)
            .map_err(|e| WalletError::storage(format!("Wallet collection is corrupted: {}", e)))?;
        if collection.version != STORE_FORMAT_VERSION {
            return Err(WalletError::storage(format!(
                "Wallet collection format {} is not supported (expected {})",
                collection.version, STORE_FORMAT_VERSION
            )));
        }

        let mut seen = HashSet::new();
        for record in &collection.wallets {
            if !seen.insert(record.id.as_str()) {
                return Err(WalletError::storage(format!(
                    "Wallet collection holds id {} more than once",
                    record.id
                )));
            }
        }
        Ok(collection.wallets)
    }

    fn persist(&self, wallets: &[WalletRecord]) -> WalletResult<()> {
        let document = serde_json::to_vec_pretty(&WalletCollectionRef {
            version: STORE_FORMAT_VERSION,
            wallets,
        })?;
        let write = || self.storage.store(WALLETS_STORAGE_KEY, &document);

        // Hand the worker's other tasks off while we fsync; not possible on
        // a current-thread runtime
        match Handle::try_current().map(|h| h.runtime_flavor()) {
            Ok(RuntimeFlavor::MultiThread) => tokio::task::block_in_place(write),
            _ => write(),
        }
    }

    pub async fn len(&self) -> usize {
        self.wallets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.wallets.read().await.is_empty()
    }
}

#[async_trait]
impl WalletRepository for WalletStore {
    async fn insert(&self, record: WalletRecord) -> WalletResult<()> {
        let mut wallets = self.wallets.write().await;
        if wallets.iter().any(|w| w.id == record.id) {
            return Err(WalletError::duplicate_id(record.id));
        }

        let mut next = wallets.clone();
        let id = record.id.clone();
        next.push(record);
        self.persist(&next)?;
        *wallets = next;

        log::debug!("Inserted wallet {}", id);
        Ok(())
    }

    async fn list_all(&self) -> WalletResult<Vec<WalletRecord>> {
        Ok(self.wallets.read().await.clone())
    }

    async fn get(&self, id: &str) -> WalletResult<WalletRecord> {
        self.wallets
            .read()
            .await
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or_else(|| WalletError::not_found(id))
    }

    async fn update(&self, id: &str, mutator: WalletMutator) -> WalletResult<WalletRecord> {
        let mut wallets = self.wallets.write().await;
        let index = wallets
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| WalletError::not_found(id))?;

        let original = &wallets[index];
        let mut updated = original.clone();
        mutator(&mut updated);

        // Identity fields are fixed once a record exists
        updated.id = original.id.clone();
        updated.address = original.address.clone();
        updated.network = original.network;
        updated.created_at = original.created_at;

        let mut next = wallets.clone();
        next[index] = updated.clone();
        self.persist(&next)?;
        *wallets = next;

        log::debug!("Updated wallet {}", id);
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> WalletResult<WalletRecord> {
        let mut wallets = self.wallets.write().await;
        let index = wallets
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| WalletError::not_found(id))?;

        let mut next = wallets.clone();
        let removed = next.remove(index);
        self.persist(&next)?;
        *wallets = next;

        log::debug!("Deleted wallet {}", id);
        Ok(removed)
    }
}
