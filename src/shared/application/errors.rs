use thiserror::Error;

use crate::shared::infrastructure::account_store::AccountStoreError;
use crate::shared::infrastructure::session_store::SessionStoreError;

/// Failures the use cases cannot turn into a user-facing outcome.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    AccountStore(#[from] AccountStoreError),

    #[error(transparent)]
    SessionStore(#[from] SessionStoreError),
}
