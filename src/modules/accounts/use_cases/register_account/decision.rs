use crate::modules::accounts::core::email::NormalizedEmail;
use crate::modules::accounts::core::route::Route;

/// Why a registration was turned down. All of these are ordinary outcomes.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum RegistrationFailure {
    #[error("xsrf token missing or invalid")]
    InvalidToken,

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("email address is already registered")]
    EmailTaken,
}

impl RegistrationFailure {
    pub fn code(self) -> &'static str {
        match self {
            RegistrationFailure::InvalidToken => "invalid_token",
            RegistrationFailure::InvalidEmail => "invalid_email",
            RegistrationFailure::PasswordMismatch => "password_mismatch",
            RegistrationFailure::EmailTaken => "email_taken",
        }
    }
}

pub enum Decision {
    Accepted {
        email: NormalizedEmail,
        password: String,
    },
    Rejected {
        reason: RegistrationFailure,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Success { redirect_target: Route },
    Failure { reason: RegistrationFailure },
}
