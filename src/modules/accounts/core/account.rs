use chrono::{DateTime, Utc};

use crate::modules::accounts::core::email::NormalizedEmail;
use crate::modules::accounts::core::password::PasswordHash;

/// A registered account. Created once, never mutated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub email: NormalizedEmail,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}
