//! Token balance entry for the wallet vault

use serde::{Deserialize, Serialize};

/// One token held by a wallet, as reported by a market-data collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBalance {
    pub symbol: String,
    pub name: String,
    pub balance: f64,
    pub balance_usd: f64,
    pub price: f64,
    pub change_24h: f64,
}
