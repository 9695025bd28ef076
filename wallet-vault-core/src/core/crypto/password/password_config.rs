use super::PasswordAlgorithm;
use crate::shared::constants::*;
use serde::{Deserialize, Serialize};

/// Key-derivation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    pub algorithm: PasswordAlgorithm,
    /// Argon2 passes, or PBKDF2 rounds
    pub iterations: u32,
    /// Argon2 memory in KiB (unused by PBKDF2)
    pub memory_cost: u32,
    /// Argon2 lanes (unused by PBKDF2)
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            algorithm: PasswordAlgorithm::Argon2id,
            iterations: KDF_TIME_COST,
            memory_cost: KDF_MEMORY_COST_KIB, // 64MB
            parallelism: KDF_PARALLELISM,
        }
    }
}

/// KDF description as written into an encrypted blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    pub algorithm: String,
    pub iterations: u32,
    pub memory_cost: u32,
    pub parallelism: u32,
}

impl PasswordConfig {
    /// Cheap Argon2id parameters so unit tests do not spend 64 MiB per seal
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            algorithm: PasswordAlgorithm::Argon2id,
            iterations: 1,
            memory_cost: 256,
            parallelism: 1,
        }
    }

    pub fn to_params(&self) -> KdfParams {
        KdfParams {
            algorithm: self.algorithm.tag().to_string(),
            iterations: self.iterations,
            memory_cost: self.memory_cost,
            parallelism: self.parallelism,
        }
    }

    /// `None` when the blob names a KDF this build does not know
    pub fn from_params(params: &KdfParams) -> Option<Self> {
        Some(Self {
            algorithm: PasswordAlgorithm::from_tag(&params.algorithm)?,
            iterations: params.iterations,
            memory_cost: params.memory_cost,
            parallelism: params.parallelism,
        })
    }

    /// Reject work factors nobody would have written, before spending them
    pub fn within_bounds(&self) -> bool {
        match self.algorithm {
            PasswordAlgorithm::Argon2id => {
                (1..=KDF_MAX_TIME_COST).contains(&self.iterations)
                    && (1..=KDF_MAX_PARALLELISM).contains(&self.parallelism)
                    && self.memory_cost >= 8 * self.parallelism
                    && self.memory_cost <= KDF_MAX_MEMORY_COST_KIB
            }
            PasswordAlgorithm::PBKDF2 => (1..=PBKDF2_MAX_ITERATIONS).contains(&self.iterations),
        }
    }
}
