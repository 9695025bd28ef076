/// Key-derivation functions used to turn a passphrase into a cipher key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordAlgorithm {
    Argon2id,
    PBKDF2,
}

impl PasswordAlgorithm {
    pub fn tag(&self) -> &'static str {
        match self {
            PasswordAlgorithm::Argon2id => "argon2id",
            PasswordAlgorithm::PBKDF2 => "pbkdf2-sha256",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "argon2id" => Some(PasswordAlgorithm::Argon2id),
            "pbkdf2-sha256" => Some(PasswordAlgorithm::PBKDF2),
            _ => None,
        }
    }
}
