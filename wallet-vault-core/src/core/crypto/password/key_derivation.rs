use super::{PasswordAlgorithm, PasswordConfig};
use crate::shared::constants::KEY_SIZE;
use crate::shared::error::WalletError;
use crate::shared::WalletResult;
use argon2::Argon2;
use pbkdf2::pbkdf2;
use zeroize::Zeroizing;

/// Derive a symmetric cipher key from a passphrase and salt.
///
/// The returned key is wiped when dropped.
pub fn derive_key(
    passphrase: &[u8],
    salt: &[u8],
    config: &PasswordConfig,
) -> WalletResult<Zeroizing<[u8; KEY_SIZE]>> {
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    match config.algorithm {
        PasswordAlgorithm::Argon2id => {
            let argon2 = Argon2::new(
                argon2::Algorithm::Argon2id,
                argon2::Version::V0x13,
                argon2::Params::new(
                    config.memory_cost,
                    config.iterations,
                    config.parallelism,
                    Some(KEY_SIZE),
                )?,
            );
            argon2.hash_password_into(passphrase, salt, &mut *key)?;
        }
        PasswordAlgorithm::PBKDF2 => {
            pbkdf2::<hmac::Hmac<sha2::Sha256>>(passphrase, salt, config.iterations, &mut *key)
                .map_err(|e| WalletError::crypto(format!("PBKDF2 error: {:?}", e)))?;
        }
    }
    Ok(key)
}
