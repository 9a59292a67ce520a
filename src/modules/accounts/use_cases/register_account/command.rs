use std::fmt;

/// A registration submission as received from the browser.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterAccount {
    pub email: String,
    pub password: String,
    pub password2: String,
    pub xsrf_token: Option<String>,
}

impl fmt::Debug for RegisterAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterAccount")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("password2", &"<redacted>")
            .field("xsrf_token", &self.xsrf_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
