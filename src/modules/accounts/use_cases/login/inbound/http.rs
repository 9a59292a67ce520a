use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::accounts::adapters::inbound::http_session::{
    AjaxOutcome, XSRF_FIELD, escape_html, is_ajax, issue_page, presented_token, redirect_found,
    session_from_headers,
};
use crate::modules::accounts::use_cases::login::command::Login;
use crate::modules::accounts::use_cases::login::decision::{LoginFailure, LoginOutcome};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(rename = "_xsrf")]
    pub xsrf: Option<String>,
}

pub fn render_login_form(token: &str, error: Option<&str>) -> String {
    let error = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape_html(e)))
        .unwrap_or_default();
    format!(
        r#"<form method="post" action="/login">{error}<input type="hidden" name="{XSRF_FIELD}" value="{token}"><input type="email" name="email"><input type="password" name="password"><button type="submit">Log in</button></form>"#,
        token = escape_html(token),
    )
}

pub async fn page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    issue_page(&state, &headers, render_login_form).await
}

pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Form<LoginForm>, FormRejection>,
) -> Response {
    let Form(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let Some(session) = session_from_headers(&headers) else {
        return StatusCode::FORBIDDEN.into_response();
    };
    let Some(token) = presented_token(body.xsrf, &headers) else {
        return StatusCode::FORBIDDEN.into_response();
    };

    let command = Login {
        email: body.email,
        password: body.password,
        xsrf_token: Some(token.clone()),
    };

    match state.login_handler.handle(&session, command).await {
        Ok(LoginOutcome::Success { redirect_target }) => {
            let url = state.url_for(redirect_target);
            if is_ajax(&headers) {
                Json(AjaxOutcome::success(url)).into_response()
            } else {
                redirect_found(url)
            }
        }
        Ok(LoginOutcome::Failure {
            reason: LoginFailure::InvalidToken,
        }) => StatusCode::FORBIDDEN.into_response(),
        Ok(LoginOutcome::Failure { reason }) => {
            if is_ajax(&headers) {
                Json(AjaxOutcome::failure(reason.code())).into_response()
            } else {
                let form = render_login_form(&token, Some(&reason.to_string()));
                (StatusCode::OK, Html(form)).into_response()
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "login failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
