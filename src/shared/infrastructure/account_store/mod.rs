use async_trait::async_trait;
use thiserror::Error;

use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::core::email::NormalizedEmail;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountStoreError {
    #[error("account already exists: {0}")]
    AlreadyExists(NormalizedEmail),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Account persistence keyed by normalized email.
///
/// `create` is the uniqueness arbiter: implementations must guarantee that at
/// most one `create` per email succeeds, also when callers race.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn exists(&self, email: &NormalizedEmail) -> Result<bool, AccountStoreError>;
    async fn create(&self, account: Account) -> Result<(), AccountStoreError>;
    async fn find(&self, email: &NormalizedEmail) -> Result<Option<Account>, AccountStoreError>;
}

pub mod in_memory;
