//! Constants for the wallet vault
//!
//! This module contains all constants used throughout the vault core.

// Cipher blob format
pub const CIPHER_VERSION: u8 = 1;
pub const KEY_SIZE: usize = 32;
pub const NONCE_SIZE: usize = 12;
pub const TAG_SIZE: usize = 16;
pub const SALT_SIZE: usize = 32;

// Argon2id work factor for sealing wallet secrets.
// 64 MiB of memory, 3 passes, single lane.
pub const KDF_MEMORY_COST_KIB: u32 = 65_536;
pub const KDF_TIME_COST: u32 = 3;
pub const KDF_PARALLELISM: u32 = 1;

// Upper bounds accepted when reading KDF parameters back from a blob
pub const KDF_MAX_MEMORY_COST_KIB: u32 = 1_048_576; // 1 GiB
pub const KDF_MAX_TIME_COST: u32 = 64;
pub const KDF_MAX_PARALLELISM: u32 = 16;
pub const PBKDF2_MAX_ITERATIONS: u32 = 10_000_000;

// Wallet constants
pub const WALLET_ID_PREFIX: &str = "wallet_";
pub const WALLET_NAME_MAX_LENGTH: usize = 50;
pub const WALLET_NAME_MIN_LENGTH: usize = 1;
pub const ADDRESS_MAX_LENGTH: usize = 128;

// Storage constants
pub const STORE_FORMAT_VERSION: u32 = 1;
pub const WALLETS_STORAGE_KEY: &str = "wallets";
pub const DATA_DIR_NAME: &str = "wallet-vault";

// Provider constants
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 30_000;
pub const PROVIDER_GENERATE_PATH: &str = "/wallets/generate";

// Number of times a colliding wallet id is regenerated before giving up
pub const DUPLICATE_ID_RETRIES: usize = 1;
