use crate::core::crypto::password::KdfParams;
use crate::shared::utils::base64_bytes;
use serde::{Deserialize, Serialize};

/// Sealed secret as produced by [`super::PassphraseCipher::seal`].
///
/// Self-describing: the format version, AEAD and KDF tags travel with the
/// ciphertext so later builds can still open it or refuse explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedBlob {
    pub version: u8,
    pub algorithm: String,
    pub kdf: KdfParams,
    #[serde(with = "base64_bytes")]
    pub salt: Vec<u8>,
    #[serde(with = "base64_bytes")]
    pub nonce: Vec<u8>,
    #[serde(with = "base64_bytes")]
    pub ciphertext: Vec<u8>,
    #[serde(with = "base64_bytes")]
    pub tag: Vec<u8>,
}

impl EncryptedBlob {
    /// Associated data bound into the AEAD tag: everything except the
    /// nonce (already an AEAD input) and the ciphertext itself.
    pub fn associated_data(&self) -> Vec<u8> {
        let header = format!(
            "wallet-vault/v{}/{}/{}/{}/{}/{}/",
            self.version,
            self.algorithm,
            self.kdf.algorithm,
            self.kdf.iterations,
            self.kdf.memory_cost,
            self.kdf.parallelism,
        );
        let mut aad = header.into_bytes();
        aad.extend_from_slice(&self.salt);
        aad
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crypto::password::PasswordConfig;

    fn sample_blob() -> EncryptedBlob {
        EncryptedBlob {
            version: 1,
            algorithm: "aes-256-gcm".to_string(),
            kdf: PasswordConfig::default().to_params(),
            salt: vec![1, 2, 3, 4],
            nonce: vec![5, 6, 7, 8],
            ciphertext: vec![9, 10],
            tag: vec![11, 12],
        }
    }

    #[test]
    fn test_blob_json_uses_base64() {
        let json = serde_json::to_value(sample_blob()).unwrap();
        assert_eq!(json["salt"], "AQIDBA==");
        assert_eq!(json["algorithm"], "aes-256-gcm");
        assert_eq!(json["kdf"]["algorithm"], "argon2id");

        let parsed: EncryptedBlob = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, sample_blob());
    }

    #[test]
    fn test_associated_data_covers_header() {
        let blob = sample_blob();
        let mut other = sample_blob();
        other.kdf.iterations += 1;
        assert_ne!(blob.associated_data(), other.associated_data());

        let mut other_salt = sample_blob();
        other_salt.salt[0] ^= 1;
        assert_ne!(blob.associated_data(), other_salt.associated_data());
    }
}
