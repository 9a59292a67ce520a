use crate::modules::accounts::core::email::{is_valid_email, normalize_email};
use crate::modules::accounts::core::password::passwords_match;
use crate::modules::accounts::use_cases::register_account::{
    command::RegisterAccount,
    decision::{Decision, RegistrationFailure},
};

/// Runs the checks that need no storage, in order: token, email, passwords.
pub fn decide_register(command: RegisterAccount, token_valid: bool) -> Decision {
    if !token_valid {
        return Decision::Rejected {
            reason: RegistrationFailure::InvalidToken,
        };
    }
    if !is_valid_email(&command.email) {
        return Decision::Rejected {
            reason: RegistrationFailure::InvalidEmail,
        };
    }
    if !passwords_match(&command.password, &command.password2) {
        return Decision::Rejected {
            reason: RegistrationFailure::PasswordMismatch,
        };
    }
    Decision::Accepted {
        email: normalize_email(&command.email),
        password: command.password,
    }
}
