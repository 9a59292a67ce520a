// Anti-forgery tokens.
//
// A token is 32 random bytes from the OS RNG, URL-safe base64 without padding.
// Matching is constant time and never fails loudly: a missing expected or
// presented token is simply a mismatch.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use rand::rngs::OsRng;
use subtle::ConstantTimeEq;

const TOKEN_BYTES: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XsrfToken(String);

impl XsrfToken {
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn tokens_match(presented: Option<&str>, expected: Option<&XsrfToken>) -> bool {
    match (presented, expected) {
        (Some(presented), Some(expected)) if !presented.is_empty() => presented
            .as_bytes()
            .ct_eq(expected.as_str().as_bytes())
            .into(),
        _ => false,
    }
}
