// Salted SHA-256 password hasher.
//
// Encoding: "sha256$<salt>$<digest>", salt and digest in standard base64 without
// padding, digest = SHA-256(salt || password).

use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::modules::accounts::core::password::PasswordHash;
use crate::shared::infrastructure::password_hasher::PasswordHasher;

const SCHEME: &str = "sha256";
const SALT_BYTES: usize = 16;

#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    fn digest(salt: &[u8], password: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(password.as_bytes());
        hasher.finalize().into()
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, password: &str) -> PasswordHash {
        let mut salt = [0u8; SALT_BYTES];
        OsRng.fill_bytes(&mut salt);
        let digest = Self::digest(&salt, password);
        PasswordHash::new(format!(
            "{SCHEME}${}${}",
            STANDARD_NO_PAD.encode(salt),
            STANDARD_NO_PAD.encode(digest)
        ))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> bool {
        let mut parts = hash.as_str().split('$');
        let (Some(SCHEME), Some(salt), Some(digest), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        let (Ok(salt), Ok(expected)) = (
            STANDARD_NO_PAD.decode(salt),
            STANDARD_NO_PAD.decode(digest),
        ) else {
            return false;
        };
        Self::digest(&salt, password)
            .as_slice()
            .ct_eq(expected.as_slice())
            .into()
    }
}

#[cfg(test)]
mod sha256_password_hasher_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> Sha256PasswordHasher {
        Sha256PasswordHasher::new()
    }

    #[rstest]
    fn it_should_verify_the_hashed_password(hasher: Sha256PasswordHasher) {
        let hash = hasher.hash("123123");
        assert!(hash.as_str().starts_with("sha256$"));
        assert!(hasher.verify("123123", &hash));
    }

    #[rstest]
    fn it_should_reject_a_different_password(hasher: Sha256PasswordHasher) {
        let hash = hasher.hash("123123");
        assert!(!hasher.verify("notequal", &hash));
    }

    #[rstest]
    fn it_should_salt_every_hash(hasher: Sha256PasswordHasher) {
        assert_ne!(hasher.hash("123123"), hasher.hash("123123"));
    }

    #[rstest]
    #[case("")]
    #[case("sha256$only-salt")]
    #[case("md5$c2FsdA$ZGlnZXN0")]
    #[case("sha256$!!!$ZGlnZXN0")]
    #[case("sha256$c2FsdA$ZGlnZXN0$extra")]
    fn it_should_reject_malformed_hashes(hasher: Sha256PasswordHasher, #[case] encoded: &str) {
        assert!(!hasher.verify("123123", &PasswordHash::new(encoded)));
    }
}
