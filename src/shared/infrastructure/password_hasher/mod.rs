use crate::modules::accounts::core::password::PasswordHash;

/// Pluggable password hashing. The algorithm is the implementation's business.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> PasswordHash;
    fn verify(&self, password: &str, hash: &PasswordHash) -> bool;
}

pub mod sha256;
