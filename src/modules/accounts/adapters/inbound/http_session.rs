// Browser-facing plumbing shared by the register and login pages.
//
// - The session is carried by the `session_id` cookie; GET pages create it.
// - The XSRF token comes from the `_xsrf` form field, or the `X-Xsrftoken` header.
// - AJAX callers are recognised by `X-Requested-With: XMLHttpRequest`.

use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::accounts::core::session::SessionId;
use crate::shell::state::AppState;

pub const SESSION_COOKIE: &str = "session_id";
pub const XSRF_FIELD: &str = "_xsrf";
pub const XSRF_HEADER: &str = "x-xsrftoken";
const REQUESTED_WITH_HEADER: &str = "x-requested-with";

pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| SessionId::parse(value))
}

pub fn session_cookie(session: &SessionId) -> String {
    format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        session.as_str()
    )
}

pub fn is_ajax(headers: &HeaderMap) -> bool {
    headers
        .get(REQUESTED_WITH_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("XMLHttpRequest"))
}

/// Prefers the form field; falls back to the header. Empty values count as absent.
pub fn presented_token(form_field: Option<String>, headers: &HeaderMap) -> Option<String> {
    form_field.filter(|t| !t.is_empty()).or_else(|| {
        headers
            .get(XSRF_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    })
}

#[derive(Serialize)]
struct TokenBody<'a> {
    xsrf: &'a str,
}

/// JSON body for AJAX submissions.
#[derive(Debug, Serialize)]
pub struct AjaxOutcome<'a> {
    pub result: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl<'a> AjaxOutcome<'a> {
    pub fn success(redirect_url: &'a str) -> Self {
        Self {
            result: true,
            redirect_url: Some(redirect_url),
            error: None,
        }
    }

    pub fn failure(error: &'static str) -> Self {
        Self {
            result: false,
            redirect_url: None,
            error: Some(error),
        }
    }
}

/// Issues a fresh token for the caller's session (creating the session if
/// needed) and answers with JSON for AJAX callers or with `render_form`.
pub async fn issue_page(
    state: &AppState,
    headers: &HeaderMap,
    render_form: fn(&str, Option<&str>) -> String,
) -> Response {
    let (session, is_new) = match session_from_headers(headers) {
        Some(session) => (session, false),
        None => (SessionId::generate(), true),
    };

    let token = match state.xsrf.issue(&session).await {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "failed to issue xsrf token");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut response = if is_ajax(headers) {
        Json(TokenBody {
            xsrf: token.as_str(),
        })
        .into_response()
    } else {
        Html(render_form(token.as_str(), None)).into_response()
    };

    if is_new {
        match HeaderValue::from_str(&session_cookie(&session)) {
            Ok(cookie) => {
                response.headers_mut().insert(header::SET_COOKIE, cookie);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to encode session cookie");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    }
    response
}

pub fn redirect_found(url: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, url.to_string())]).into_response()
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}
