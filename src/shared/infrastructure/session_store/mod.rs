use async_trait::async_trait;
use thiserror::Error;

use crate::modules::accounts::core::session::SessionId;
use crate::modules::accounts::core::xsrf::XsrfToken;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Session-scoped state: the XSRF token expected from each session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Replaces whatever token the session held before.
    async fn put_xsrf_token(
        &self,
        session: &SessionId,
        token: XsrfToken,
    ) -> Result<(), SessionStoreError>;

    async fn xsrf_token(&self, session: &SessionId)
    -> Result<Option<XsrfToken>, SessionStoreError>;
}

pub mod in_memory;
