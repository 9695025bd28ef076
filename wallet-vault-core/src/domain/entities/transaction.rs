//! Transaction history entry for the wallet vault

use crate::shared::types::{Address, TransactionHash};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionDirection {
    Send,
    Receive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
}

/// Informational history line; the vault never derives balances from these
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEntry {
    pub direction: TransactionDirection,
    pub amount: f64,
    pub counterparty: Address,
    pub timestamp: DateTime<Utc>,
    pub status: TransactionStatus,
    pub hash: TransactionHash,
}
