use anyhow::Context;
use chrono::TimeDelta;
use std::str::FromStr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOME_URL: &str = "/";
const DEFAULT_SESSION_TTL_SECS: u32 = 2 * 60 * 60;
const DEFAULT_MAX_SESSIONS: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// URL the "home" route resolves to in redirects.
    pub home_url: String,
    /// Seconds an issued XSRF token stays valid for its session.
    pub session_ttl_secs: u32,
    pub max_sessions: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            home_url: DEFAULT_HOME_URL.to_string(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let port = parse_or(&lookup, "ACCOUNTS_PORT", defaults.port)?;
        let session_ttl_secs =
            parse_or(&lookup, "ACCOUNTS_SESSION_TTL_SECS", defaults.session_ttl_secs)?;
        let max_sessions = parse_or(&lookup, "ACCOUNTS_MAX_SESSIONS", defaults.max_sessions)?;
        if session_ttl_secs == 0 || max_sessions == 0 {
            anyhow::bail!("ACCOUNTS_SESSION_TTL_SECS and ACCOUNTS_MAX_SESSIONS must be positive");
        }
        Ok(Self {
            host: lookup("ACCOUNTS_HOST").unwrap_or(defaults.host),
            port,
            home_url: lookup("ACCOUNTS_HOME_URL").unwrap_or(defaults.home_url),
            session_ttl_secs,
            max_sessions,
        })
    }

    pub fn session_ttl(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.session_ttl_secs))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} is not a valid value: {raw:?}")),
        None => Ok(default),
    }
}
