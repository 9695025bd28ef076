use crate::core::crypto::password::{derive_key, Passphrase, PasswordConfig};
use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::utils::generate_random_bytes;
use crate::shared::WalletResult;
use aes_gcm::aead::{Aead, Payload};
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use chacha20poly1305::{ChaCha20Poly1305, Key as ChaChaKey, Nonce as ChaChaNonce};
use zeroize::Zeroizing;
use super::{EncryptedBlob, EncryptionAlgorithm};

/// Seals and opens wallet secrets under a user passphrase.
///
/// Holds no secrets itself; every call derives its own key from a fresh
/// salt, so instances can be shared freely across tasks.
#[derive(Debug, Clone)]
pub struct PassphraseCipher {
    algorithm: EncryptionAlgorithm,
    kdf: PasswordConfig,
}

impl PassphraseCipher {
    pub fn new(algorithm: EncryptionAlgorithm, kdf: PasswordConfig) -> Self {
        Self { algorithm, kdf }
    }

    pub fn new_default() -> Self {
        Self::new(EncryptionAlgorithm::AES256GCM, PasswordConfig::default())
    }

    pub fn algorithm(&self) -> EncryptionAlgorithm {
        self.algorithm
    }

    /// Encrypt `plaintext` under `passphrase` with a fresh salt and nonce
    pub fn seal(&self, plaintext: &[u8], passphrase: &Passphrase) -> WalletResult<EncryptedBlob> {
        let salt = generate_random_bytes(SALT_SIZE);
        let nonce = generate_random_bytes(NONCE_SIZE);
        let key = derive_key(passphrase.as_bytes(), &salt, &self.kdf)?;

        let mut blob = EncryptedBlob {
            version: CIPHER_VERSION,
            algorithm: self.algorithm.tag().to_string(),
            kdf: self.kdf.to_params(),
            salt,
            nonce,
            ciphertext: Vec::new(),
            tag: Vec::new(),
        };
        let aad = blob.associated_data();

        let mut sealed = match self.algorithm {
            EncryptionAlgorithm::AES256GCM => self.encrypt_aes_gcm(&key, &blob.nonce, plaintext, &aad)?,
            EncryptionAlgorithm::ChaCha20Poly1305 => self.encrypt_chacha20(&key, &blob.nonce, plaintext, &aad)?,
        };

        // Split ciphertext and tag
        let tag = sealed.split_off(sealed.len() - TAG_SIZE);
        blob.ciphertext = sealed;
        blob.tag = tag;
        Ok(blob)
    }

    /// Decrypt a blob sealed by any supported cipher version.
    ///
    /// Wrong passphrase, tampering and malformed fields all yield
    /// [`WalletError::AuthenticationFailure`].
    pub fn open(&self, blob: &EncryptedBlob, passphrase: &Passphrase) -> WalletResult<Zeroizing<Vec<u8>>> {
        if blob.version != CIPHER_VERSION {
            return Err(WalletError::unsupported_version(format!(
                "blob version {} (this build reads version {})",
                blob.version, CIPHER_VERSION
            )));
        }
        let algorithm = EncryptionAlgorithm::from_tag(&blob.algorithm).ok_or_else(|| {
            WalletError::unsupported_version(format!("unknown cipher algorithm '{}'", blob.algorithm))
        })?;
        let kdf = PasswordConfig::from_params(&blob.kdf).ok_or_else(|| {
            WalletError::unsupported_version(format!("unknown key derivation '{}'", blob.kdf.algorithm))
        })?;

        if !kdf.within_bounds() || blob.nonce.len() != NONCE_SIZE || blob.tag.len() != TAG_SIZE {
            return Err(WalletError::AuthenticationFailure);
        }

        let key = derive_key(passphrase.as_bytes(), &blob.salt, &kdf)
            .map_err(|_| WalletError::AuthenticationFailure)?;

        // Combine ciphertext and tag
        let mut ciphertext_with_tag = Vec::with_capacity(blob.ciphertext.len() + TAG_SIZE);
        ciphertext_with_tag.extend_from_slice(&blob.ciphertext);
        ciphertext_with_tag.extend_from_slice(&blob.tag);
        let aad = blob.associated_data();

        let plaintext = match algorithm {
            EncryptionAlgorithm::AES256GCM => {
                let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key[..]));
                cipher.decrypt(Nonce::from_slice(&blob.nonce), Payload { msg: &ciphertext_with_tag, aad: &aad })
            }
            EncryptionAlgorithm::ChaCha20Poly1305 => {
                let cipher = ChaCha20Poly1305::new(ChaChaKey::from_slice(&key[..]));
                cipher.decrypt(ChaChaNonce::from_slice(&blob.nonce), Payload { msg: &ciphertext_with_tag, aad: &aad })
            }
        }
        .map_err(|_| WalletError::AuthenticationFailure)?;

        Ok(Zeroizing::new(plaintext))
    }

    /// Encrypt using AES-256-GCM
    fn encrypt_aes_gcm(&self, key: &[u8; KEY_SIZE], nonce: &[u8], data: &[u8], aad: &[u8]) -> WalletResult<Vec<u8>> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
        cipher
            .encrypt(Nonce::from_slice(nonce), Payload { msg: data, aad })
            .map_err(|e| WalletError::crypto(format!("AES-GCM encryption failed: {}", e)))
    }

    /// Encrypt using ChaCha20-Poly1305
    fn encrypt_chacha20(&self, key: &[u8; KEY_SIZE], nonce: &[u8], data: &[u8], aad: &[u8]) -> WalletResult<Vec<u8>> {
        let cipher = ChaCha20Poly1305::new(ChaChaKey::from_slice(key));
        cipher
            .encrypt(ChaChaNonce::from_slice(nonce), Payload { msg: data, aad })
            .map_err(|e| WalletError::crypto(format!("ChaCha20-Poly1305 encryption failed: {}", e)))
    }
}

impl Default for PassphraseCipher {
    fn default() -> Self {
        Self::new_default()
    }
}
