use zeroize::{Zeroize, ZeroizeOnDrop};

/// User passphrase, wiped from memory when dropped.
/// No Debug, Clone or Serialize implementations on purpose.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Passphrase(String);

impl Passphrase {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self(passphrase.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Passphrase {
    fn from(passphrase: String) -> Self {
        Self(passphrase)
    }
}

impl From<&str> for Passphrase {
    fn from(passphrase: &str) -> Self {
        Self(passphrase.to_string())
    }
}
