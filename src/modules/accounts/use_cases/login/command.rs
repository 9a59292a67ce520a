use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Login {
    pub email: String,
    pub password: String,
    pub xsrf_token: Option<String>,
}

impl fmt::Debug for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Login")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("xsrf_token", &self.xsrf_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
