use crate::modules::accounts::core::route::Route;

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum LoginFailure {
    #[error("xsrf token missing or invalid")]
    InvalidToken,

    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("email or password is incorrect")]
    InvalidCredentials,
}

impl LoginFailure {
    pub fn code(self) -> &'static str {
        match self {
            LoginFailure::InvalidToken => "invalid_token",
            LoginFailure::InvalidCredentials => "invalid_credentials",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success { redirect_target: Route },
    Failure { reason: LoginFailure },
}
