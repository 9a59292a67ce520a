use crate::modules::accounts::core::session::SessionId;
use crate::modules::accounts::core::xsrf::{XsrfToken, tokens_match};
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::session_store::SessionStore;
use std::sync::Arc;

/// Issues XSRF tokens on page renders and checks them on submissions.
pub struct XsrfTokenHandler<TSessionStore>
where
    TSessionStore: SessionStore + 'static,
{
    session_store: Arc<TSessionStore>,
}

impl<TSessionStore> XsrfTokenHandler<TSessionStore>
where
    TSessionStore: SessionStore + 'static,
{
    pub fn new(session_store: Arc<TSessionStore>) -> Self {
        Self { session_store }
    }

    pub async fn issue(&self, session: &SessionId) -> Result<XsrfToken, ApplicationError> {
        let token = XsrfToken::generate();
        self.session_store
            .put_xsrf_token(session, token.clone())
            .await?;
        Ok(token)
    }

    pub async fn verify(
        &self,
        session: &SessionId,
        presented: Option<&str>,
    ) -> Result<bool, ApplicationError> {
        let expected = self.session_store.xsrf_token(session).await?;
        let valid = tokens_match(presented, expected.as_ref());
        if !valid {
            tracing::warn!(session = session.as_str(), "xsrf token rejected");
        }
        Ok(valid)
    }
}
