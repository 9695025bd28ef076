/// Authenticated encryption algorithms a sealed blob may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncryptionAlgorithm {
    AES256GCM,
    ChaCha20Poly1305,
}

impl EncryptionAlgorithm {
    /// Tag written into every blob
    pub fn tag(&self) -> &'static str {
        match self {
            EncryptionAlgorithm::AES256GCM => "aes-256-gcm",
            EncryptionAlgorithm::ChaCha20Poly1305 => "chacha20-poly1305",
        }
    }

    /// Inverse of [`EncryptionAlgorithm::tag`]; `None` for algorithms this
    /// build does not know.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "aes-256-gcm" => Some(EncryptionAlgorithm::AES256GCM),
            "chacha20-poly1305" => Some(EncryptionAlgorithm::ChaCha20Poly1305),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_tags() {
        for algorithm in [EncryptionAlgorithm::AES256GCM, EncryptionAlgorithm::ChaCha20Poly1305] {
            assert_eq!(EncryptionAlgorithm::from_tag(algorithm.tag()), Some(algorithm));
        }
        assert_eq!(EncryptionAlgorithm::from_tag("aes-512-ocb"), None);
    }
}
