use crate::modules::accounts::core::email::normalize_email;
use crate::modules::accounts::core::route::Route;
use crate::modules::accounts::core::session::SessionId;
use crate::modules::accounts::use_cases::register_account::decision::{
    RegistrationFailure, RegistrationOutcome,
};
use crate::shared::infrastructure::account_store::AccountStore;
use crate::shell::http::router;
use crate::tests::fixtures::commands::register_account::{
    INVALID_EMAIL, RegisterAccountBuilder, VALID_EMAIL,
};
use crate::tests::fixtures::http::{make_test_state, visit_page};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

#[tokio::test]
async fn registers_a_new_account_and_redirects_home() {
    let state = make_test_state();
    let session = SessionId::generate();
    let token = state.xsrf.issue(&session).await.unwrap();

    let outcome = state
        .register_handler
        .handle(
            &session,
            RegisterAccountBuilder::new()
                .xsrf_token(token.as_str())
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(
        outcome,
        RegistrationOutcome::Success {
            redirect_target: Route::Home
        }
    );
    assert!(
        state
            .account_store
            .exists(&normalize_email(VALID_EMAIL))
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn rejects_a_bad_email_and_leaves_the_store_unchanged() {
    let state = make_test_state();
    let session = SessionId::generate();
    let token = state.xsrf.issue(&session).await.unwrap();

    let outcome = state
        .register_handler
        .handle(
            &session,
            RegisterAccountBuilder::new()
                .email(INVALID_EMAIL)
                .xsrf_token(token.as_str())
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(
        outcome,
        RegistrationOutcome::Failure {
            reason: RegistrationFailure::InvalidEmail
        }
    );
    assert!(state.account_store.is_empty().await);
}

#[tokio::test]
async fn registering_the_same_email_twice_keeps_one_account() {
    let state = make_test_state();

    let mut outcomes = Vec::new();
    for _ in 0..2 {
        // Fresh session and token each time, as after clearing cookies.
        let session = SessionId::generate();
        let token = state.xsrf.issue(&session).await.unwrap();
        let outcome = state
            .register_handler
            .handle(
                &session,
                RegisterAccountBuilder::new()
                    .xsrf_token(token.as_str())
                    .build(),
            )
            .await
            .unwrap();
        outcomes.push(outcome);
    }

    assert_eq!(
        outcomes,
        vec![
            RegistrationOutcome::Success {
                redirect_target: Route::Home
            },
            RegistrationOutcome::Failure {
                reason: RegistrationFailure::EmailTaken
            },
        ]
    );
    assert_eq!(state.account_store.len().await, 1);
}

#[tokio::test]
async fn browser_registration_then_login_over_http() {
    let state = make_test_state();

    let register = visit_page(router(state.clone()), "/register").await;
    let response = router(state.clone())
        .oneshot(
            Request::post("/register")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .header(header::COOKIE, register.cookie.as_str())
                .body(Body::from(register.form(VALID_EMAIL, "123123", "123123")))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let login = visit_page(router(state.clone()), "/login").await;
    let body = format!(
        "email=vasya%40vasya.com&password=123123&_xsrf={}",
        login.token
    );
    let response = router(state)
        .oneshot(
            Request::post("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .header(header::COOKIE, login.cookie.as_str())
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
}
