use zeroize::{Zeroize, ZeroizeOnDrop};

/// Plaintext private key held only for the lifetime of a disclosure or a
/// scoped unlock. Wiped on drop.
// No Debug implementation to prevent key exposure in logs
// No Clone implementation to prevent accidental key duplication
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecurePrivateKey {
    key: String,
}

impl SecurePrivateKey {
    pub fn new(key: String) -> Self {
        Self { key }
    }

    /// Borrow the key text. Callers must not copy it into long-lived state.
    pub fn expose_secret(&self) -> &str {
        &self.key
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.key.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_private_key_access() {
        let key = SecurePrivateKey::new("k1".to_string());
        assert_eq!(key.expose_secret(), "k1");
        assert_eq!(key.as_bytes(), b"k1");
        assert!(!key.is_empty());
        assert!(SecurePrivateKey::new("  ".to_string()).is_empty());
    }

    #[test]
    fn test_secure_private_key_zeroize() {
        let mut key = SecurePrivateKey::new("k1".to_string());
        key.zeroize();
        assert!(key.is_empty());
    }
}
