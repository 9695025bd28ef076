//! Plaintext secret wrappers
//!
//! Private keys and seed phrases only exist in these types while a freshly
//! generated wallet is being disclosed or a sealed secret is unlocked.

pub mod secure_private_key;
pub mod secure_seed_phrase;

// Re-export all public items from submodules
pub use secure_private_key::*;
pub use secure_seed_phrase::*;
