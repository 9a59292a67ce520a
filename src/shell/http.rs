use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::accounts::use_cases::login::inbound::http as login_http;
use crate::modules::accounts::use_cases::register_account::inbound::http as register_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route(
            "/register",
            get(register_http::page).post(register_http::submit),
        )
        .route("/login", get(login_http::page).post(login_http::submit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> &'static str {
    "home"
}
