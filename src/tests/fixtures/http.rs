// HTTP test helpers: app state wiring and a "browser" that loads a page the
// way a user would, keeping the session cookie and the hidden XSRF field.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::shared::infrastructure::account_store::in_memory::InMemoryAccountStore;
use crate::shared::infrastructure::password_hasher::sha256::Sha256PasswordHasher;
use crate::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryAccountStore::new()),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(Sha256PasswordHasher::new()),
        "/",
    )
}

pub fn make_offline_account_store_state() -> AppState {
    let mut account_store = InMemoryAccountStore::new();
    account_store.toggle_offline();
    AppState::new(
        Arc::new(account_store),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(Sha256PasswordHasher::new()),
        "/",
    )
}

/// What a browser keeps after loading a form page.
pub struct PageVisit {
    /// `session_id=<id>`, ready for a `Cookie` header.
    pub cookie: String,
    pub token: String,
}

impl PageVisit {
    pub fn form(&self, email: &str, password: &str, password2: &str) -> String {
        form_body(&[
            ("email", email),
            ("password", password),
            ("password2", password2),
            ("_xsrf", self.token.as_str()),
        ])
    }
}

pub async fn visit_page(app: Router, path: &str) -> PageVisit {
    let response = app
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    let token = html
        .split(r#"name="_xsrf" value=""#)
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .expect("page has no xsrf field")
        .to_string();

    PageVisit { cookie, token }
}

pub fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(raw: &str) -> String {
    raw.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                (b as char).to_string()
            }
            b => format!("%{b:02X}"),
        })
        .collect()
}
