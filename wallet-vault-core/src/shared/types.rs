use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Basic types for vault operations
pub type WalletId = String;
pub type Address = String;
pub type TransactionHash = String;

// Networks a vault wallet can live on. New chains are added as variants;
// the kebab-case id is what gets persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    Ethereum,
    BnbChain,
    Polygon,
    Arbitrum,
    Optimism,
    Base,
    Avalanche,
    Solana,
    Bitcoin,
    Tron,
}

impl Network {
    pub const ALL: [Network; 10] = [
        Network::Ethereum,
        Network::BnbChain,
        Network::Polygon,
        Network::Arbitrum,
        Network::Optimism,
        Network::Base,
        Network::Avalanche,
        Network::Solana,
        Network::Bitcoin,
        Network::Tron,
    ];

    /// Stable identifier, identical to the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            Network::Ethereum => "ethereum",
            Network::BnbChain => "bnb-chain",
            Network::Polygon => "polygon",
            Network::Arbitrum => "arbitrum",
            Network::Optimism => "optimism",
            Network::Base => "base",
            Network::Avalanche => "avalanche",
            Network::Solana => "solana",
            Network::Bitcoin => "bitcoin",
            Network::Tron => "tron",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Ethereum => "Ethereum",
            Network::BnbChain => "BNB Chain",
            Network::Polygon => "Polygon",
            Network::Arbitrum => "Arbitrum One",
            Network::Optimism => "Optimism",
            Network::Base => "Base",
            Network::Avalanche => "Avalanche C-Chain",
            Network::Solana => "Solana",
            Network::Bitcoin => "Bitcoin",
            Network::Tron => "Tron",
        }
    }

    pub fn native_currency(&self) -> &'static str {
        match self {
            Network::Ethereum | Network::Arbitrum | Network::Optimism | Network::Base => "ETH",
            Network::BnbChain => "BNB",
            Network::Polygon => "POL",
            Network::Avalanche => "AVAX",
            Network::Solana => "SOL",
            Network::Bitcoin => "BTC",
            Network::Tron => "TRX",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Network {
    type Err = crate::shared::error::WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        let network = match normalized.as_str() {
            "ethereum" | "eth" => Network::Ethereum,
            "bnb-chain" | "bnb" | "bsc" | "binance-smart-chain" => Network::BnbChain,
            "polygon" | "matic" => Network::Polygon,
            "arbitrum" | "arbitrum-one" => Network::Arbitrum,
            "optimism" | "op" => Network::Optimism,
            "base" => Network::Base,
            "avalanche" | "avax" => Network::Avalanche,
            "solana" | "sol" => Network::Solana,
            "bitcoin" | "btc" => Network::Bitcoin,
            "tron" | "trx" => Network::Tron,
            _ => {
                return Err(crate::shared::error::WalletError::invalid_input(format!(
                    "Unknown network: {}",
                    s
                )))
            }
        };
        Ok(network)
    }
}

// Result types for better error handling
pub type WalletResult<T> = Result<T, crate::shared::error::WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_ids_round_trip_through_from_str() {
        for network in Network::ALL {
            assert_eq!(network.id().parse::<Network>().unwrap(), network);
        }
    }

    #[test]
    fn test_network_aliases() {
        assert_eq!("bnb".parse::<Network>().unwrap(), Network::BnbChain);
        assert_eq!("BSC".parse::<Network>().unwrap(), Network::BnbChain);
        assert_eq!(" Ethereum ".parse::<Network>().unwrap(), Network::Ethereum);
        assert_eq!("bnb_chain".parse::<Network>().unwrap(), Network::BnbChain);
        assert!("dogecoin".parse::<Network>().is_err());
    }

    #[test]
    fn test_network_serializes_as_kebab_case() {
        let json = serde_json::to_string(&Network::BnbChain).unwrap();
        assert_eq!(json, "\"bnb-chain\"");
        let parsed: Network = serde_json::from_str("\"ethereum\"").unwrap();
        assert_eq!(parsed, Network::Ethereum);
    }

    #[test]
    fn test_network_native_currencies() {
        assert_eq!(Network::Ethereum.native_currency(), "ETH");
        assert_eq!(Network::BnbChain.native_currency(), "BNB");
        assert_eq!(Network::Solana.name(), "Solana");
    }
}
