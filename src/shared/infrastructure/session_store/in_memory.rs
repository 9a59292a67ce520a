use crate::modules::accounts::core::session::SessionId;
use crate::modules::accounts::core::xsrf::XsrfToken;
use crate::shared::infrastructure::session_store::{SessionStore, SessionStoreError};
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

pub const DEFAULT_SESSION_TTL_SECS: i64 = 2 * 60 * 60;
pub const DEFAULT_MAX_SESSIONS: usize = 100_000;

struct IssuedToken {
    token: XsrfToken,
    issued_at: DateTime<Utc>,
}

/// Expected tokens per session. Entries older than `ttl` are treated as
/// absent and purged on the next insert; past `max_sessions` the oldest
/// session is dropped.
pub struct InMemorySessionStore {
    tokens: RwLock<HashMap<SessionId, IssuedToken>>,
    ttl: TimeDelta,
    max_sessions: usize,
    offline: bool,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_limits(
            TimeDelta::seconds(DEFAULT_SESSION_TTL_SECS),
            DEFAULT_MAX_SESSIONS,
        )
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(ttl: TimeDelta, max_sessions: usize) -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
            ttl,
            max_sessions: max_sessions.max(1),
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }

    fn check_online(&self) -> Result<(), SessionStoreError> {
        if self.offline {
            return Err(SessionStoreError::Backend("Session store offline".into()));
        }
        Ok(())
    }

    fn is_expired(&self, entry: &IssuedToken, now: DateTime<Utc>) -> bool {
        now - entry.issued_at >= self.ttl
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put_xsrf_token(
        &self,
        session: &SessionId,
        token: XsrfToken,
    ) -> Result<(), SessionStoreError> {
        self.check_online()?;
        let now = Utc::now();
        let mut tokens = self.tokens.write().await;
        tokens.retain(|_, entry| !self.is_expired(entry, now));

        if !tokens.contains_key(session) && tokens.len() >= self.max_sessions {
            let oldest = tokens
                .iter()
                .min_by_key(|(_, entry)| entry.issued_at)
                .map(|(id, _)| id.clone());
            if let Some(oldest) = oldest {
                tracing::debug!(session = oldest.as_str(), "session store full, evicting");
                tokens.remove(&oldest);
            }
        }

        tokens.insert(
            session.clone(),
            IssuedToken {
                token,
                issued_at: now,
            },
        );
        Ok(())
    }

    async fn xsrf_token(
        &self,
        session: &SessionId,
    ) -> Result<Option<XsrfToken>, SessionStoreError> {
        self.check_online()?;
        let now = Utc::now();
        Ok(self
            .tokens
            .read()
            .await
            .get(session)
            .filter(|entry| !self.is_expired(entry, now))
            .map(|entry| entry.token.clone()))
    }
}
