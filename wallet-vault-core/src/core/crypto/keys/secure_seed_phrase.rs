use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secure seed phrase wrapper
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecureSeedPhrase {
    phrase: String,
}

impl SecureSeedPhrase {
    /// Create a new secure seed phrase
    pub fn new(phrase: String) -> Self {
        Self { phrase }
    }

    /// Get the seed phrase as a &str
    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    /// Get the seed phrase as `Vec<String>`
    pub fn as_words(&self) -> Vec<String> {
        self.phrase.split_whitespace().map(|s| s.to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.phrase.trim().is_empty()
    }
}
