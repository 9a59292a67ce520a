use crate::modules::accounts::core::route::Route;
use crate::modules::accounts::use_cases::login::handler::LoginHandler;
use crate::modules::accounts::use_cases::register_account::handler::RegisterAccountHandler;
use crate::modules::accounts::use_cases::xsrf_token::handler::XsrfTokenHandler;
use crate::shared::infrastructure::account_store::in_memory::InMemoryAccountStore;
use crate::shared::infrastructure::password_hasher::PasswordHasher;
use crate::shared::infrastructure::password_hasher::sha256::Sha256PasswordHasher;
use crate::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
use crate::shell::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub xsrf: Arc<XsrfTokenHandler<InMemorySessionStore>>,
    pub register_handler:
        Arc<RegisterAccountHandler<InMemoryAccountStore, InMemorySessionStore>>,
    pub login_handler: Arc<LoginHandler<InMemoryAccountStore, InMemorySessionStore>>,
    pub account_store: Arc<InMemoryAccountStore>,
    pub home_url: Arc<str>,
}

impl AppState {
    pub fn new(
        account_store: Arc<InMemoryAccountStore>,
        session_store: Arc<InMemorySessionStore>,
        hasher: Arc<dyn PasswordHasher>,
        home_url: &str,
    ) -> Self {
        let xsrf = Arc::new(XsrfTokenHandler::new(session_store));
        let register_handler = Arc::new(RegisterAccountHandler::new(
            account_store.clone(),
            xsrf.clone(),
            hasher.clone(),
        ));
        let login_handler = Arc::new(LoginHandler::new(
            account_store.clone(),
            xsrf.clone(),
            hasher,
        ));
        Self {
            xsrf,
            register_handler,
            login_handler,
            account_store,
            home_url: Arc::from(home_url),
        }
    }

    /// In-memory deps for now.
    pub fn in_memory(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(InMemoryAccountStore::new()),
            Arc::new(InMemorySessionStore::with_limits(
                config.session_ttl(),
                config.max_sessions,
            )),
            Arc::new(Sha256PasswordHasher::new()),
            &config.home_url,
        )
    }

    pub fn url_for(&self, route: Route) -> &str {
        match route {
            Route::Home => &self.home_url,
        }
    }
}
