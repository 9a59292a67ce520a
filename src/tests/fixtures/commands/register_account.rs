// Shared test fixture for the RegisterAccount command.

use crate::modules::accounts::use_cases::register_account::command::RegisterAccount;

pub const VALID_EMAIL: &str = "vasya@vasya.com";
pub const INVALID_EMAIL: &str = "bad_email";
pub const PASSWORD: &str = "123123";

pub struct RegisterAccountBuilder {
    inner: RegisterAccount,
}

impl Default for RegisterAccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterAccountBuilder {
    /// Valid email and matching passwords, but no XSRF token.
    pub fn new() -> Self {
        Self {
            inner: RegisterAccount {
                email: VALID_EMAIL.to_string(),
                password: PASSWORD.to_string(),
                password2: PASSWORD.to_string(),
                xsrf_token: None,
            },
        }
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = v.into();
        self
    }

    pub fn password2(mut self, v: impl Into<String>) -> Self {
        self.inner.password2 = v.into();
        self
    }

    pub fn xsrf_token(mut self, v: impl Into<String>) -> Self {
        self.inner.xsrf_token = Some(v.into());
        self
    }

    pub fn build(self) -> RegisterAccount {
        self.inner
    }
}

#[cfg(test)]
mod register_account_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = RegisterAccountBuilder::default().build();
        assert_eq!(built, RegisterAccountBuilder::new().build());
        assert_eq!(built.email, VALID_EMAIL);
        assert_eq!(built.xsrf_token, None);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RegisterAccountBuilder::new()
            .email("e@example.com")
            .password("p1")
            .password2("p2")
            .xsrf_token("t")
            .build();

        assert_eq!(custom.email, "e@example.com");
        assert_eq!(custom.password, "p1");
        assert_eq!(custom.password2, "p2");
        assert_eq!(custom.xsrf_token.as_deref(), Some("t"));
    }
}
