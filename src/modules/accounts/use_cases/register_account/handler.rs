use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::core::route::Route;
use crate::modules::accounts::core::session::SessionId;
use crate::modules::accounts::use_cases::register_account::command::RegisterAccount;
use crate::modules::accounts::use_cases::register_account::decide::decide_register;
use crate::modules::accounts::use_cases::register_account::decision::{
    Decision, RegistrationFailure, RegistrationOutcome,
};
use crate::modules::accounts::use_cases::xsrf_token::handler::XsrfTokenHandler;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::account_store::{AccountStore, AccountStoreError};
use crate::shared::infrastructure::password_hasher::PasswordHasher;
use crate::shared::infrastructure::session_store::SessionStore;
use chrono::Utc;
use std::sync::Arc;

pub struct RegisterAccountHandler<TAccountStore, TSessionStore>
where
    TAccountStore: AccountStore + 'static,
    TSessionStore: SessionStore + 'static,
{
    account_store: Arc<TAccountStore>,
    xsrf: Arc<XsrfTokenHandler<TSessionStore>>,
    hasher: Arc<dyn PasswordHasher>,
}

impl<TAccountStore, TSessionStore> RegisterAccountHandler<TAccountStore, TSessionStore>
where
    TAccountStore: AccountStore + 'static,
    TSessionStore: SessionStore + 'static,
{
    pub fn new(
        account_store: Arc<TAccountStore>,
        xsrf: Arc<XsrfTokenHandler<TSessionStore>>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            account_store,
            xsrf,
            hasher,
        }
    }

    pub async fn handle(
        &self,
        session: &SessionId,
        command: RegisterAccount,
    ) -> Result<RegistrationOutcome, ApplicationError> {
        let token_valid = self
            .xsrf
            .verify(session, command.xsrf_token.as_deref())
            .await?;

        let (email, password) = match decide_register(command, token_valid) {
            Decision::Accepted { email, password } => (email, password),
            Decision::Rejected { reason } => return Ok(Self::rejected(reason)),
        };

        // `create` stays authoritative; this only skips hashing for known emails.
        if self.account_store.exists(&email).await? {
            return Ok(Self::rejected(RegistrationFailure::EmailTaken));
        }

        let account = Account {
            email,
            password_hash: self.hasher.hash(&password),
            created_at: Utc::now(),
        };
        let email = account.email.clone();
        match self.account_store.create(account).await {
            Ok(()) => {
                tracing::info!(email = email.as_str(), "account registered");
                Ok(RegistrationOutcome::Success {
                    redirect_target: Route::Home,
                })
            }
            Err(AccountStoreError::AlreadyExists(_)) => {
                Ok(Self::rejected(RegistrationFailure::EmailTaken))
            }
            Err(e) => Err(ApplicationError::AccountStore(e)),
        }
    }

    fn rejected(reason: RegistrationFailure) -> RegistrationOutcome {
        tracing::debug!(reason = reason.code(), "registration rejected");
        RegistrationOutcome::Failure { reason }
    }
}
