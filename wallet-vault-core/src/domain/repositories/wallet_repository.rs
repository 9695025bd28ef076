//! Wallet repository for data access
//!
//! This module defines the keyed wallet collection the vault persists to.

use crate::domain::entities::WalletRecord;
use crate::shared::WalletResult;
use async_trait::async_trait;

/// In-place edit applied to a single record under the store's write lock
pub type WalletMutator = Box<dyn FnOnce(&mut WalletRecord) + Send>;

/// Wallet repository trait
#[async_trait]
pub trait WalletRepository: Send + Sync {
    /// Add a record; fails with `DuplicateId` if the id is taken
    async fn insert(&self, record: WalletRecord) -> WalletResult<()>;

    /// Snapshot of every record, in insertion order
    async fn list_all(&self) -> WalletResult<Vec<WalletRecord>>;

    /// Fetch one record by id
    async fn get(&self, id: &str) -> WalletResult<WalletRecord>;

    /// Apply `mutator` to the record and persist; returns the updated record
    async fn update(&self, id: &str, mutator: WalletMutator) -> WalletResult<WalletRecord>;

    /// Remove a record; returns what was removed
    async fn delete(&self, id: &str) -> WalletResult<WalletRecord>;
}
