use crate::modules::accounts::core::email::normalize_email;
use crate::modules::accounts::core::password::PasswordHash;
use crate::modules::accounts::core::route::Route;
use crate::modules::accounts::core::session::SessionId;
use crate::modules::accounts::use_cases::login::command::Login;
use crate::modules::accounts::use_cases::login::decision::{LoginFailure, LoginOutcome};
use crate::modules::accounts::use_cases::xsrf_token::handler::XsrfTokenHandler;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::account_store::AccountStore;
use crate::shared::infrastructure::password_hasher::PasswordHasher;
use crate::shared::infrastructure::session_store::SessionStore;
use std::sync::Arc;

/// Checks login credentials for a session and names where to go next.
///
/// Only the credentials are checked: nothing is recorded against the session
/// on success, so the caller is not "logged in" afterwards in any stateful
/// sense.
pub struct LoginHandler<TAccountStore, TSessionStore>
where
    TAccountStore: AccountStore + 'static,
    TSessionStore: SessionStore + 'static,
{
    account_store: Arc<TAccountStore>,
    xsrf: Arc<XsrfTokenHandler<TSessionStore>>,
    hasher: Arc<dyn PasswordHasher>,
    // Verified against when the email is unknown, so both failure paths hash.
    dummy_hash: PasswordHash,
}

impl<TAccountStore, TSessionStore> LoginHandler<TAccountStore, TSessionStore>
where
    TAccountStore: AccountStore + 'static,
    TSessionStore: SessionStore + 'static,
{
    pub fn new(
        account_store: Arc<TAccountStore>,
        xsrf: Arc<XsrfTokenHandler<TSessionStore>>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let dummy_hash = hasher.hash("");
        Self {
            account_store,
            xsrf,
            hasher,
            dummy_hash,
        }
    }

    pub async fn handle(
        &self,
        session: &SessionId,
        command: Login,
    ) -> Result<LoginOutcome, ApplicationError> {
        if !self
            .xsrf
            .verify(session, command.xsrf_token.as_deref())
            .await?
        {
            return Ok(LoginOutcome::Failure {
                reason: LoginFailure::InvalidToken,
            });
        }

        let email = normalize_email(&command.email);
        let authenticated = match self.account_store.find(&email).await? {
            Some(account) => self.hasher.verify(&command.password, &account.password_hash),
            None => {
                self.hasher.verify(&command.password, &self.dummy_hash);
                false
            }
        };

        if !authenticated {
            tracing::debug!(email = email.as_str(), "login rejected");
            return Ok(LoginOutcome::Failure {
                reason: LoginFailure::InvalidCredentials,
            });
        }

        tracing::info!(email = email.as_str(), "account logged in");
        Ok(LoginOutcome::Success {
            redirect_target: Route::Home,
        })
    }
}
