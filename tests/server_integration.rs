//! Router-level integration tests.
//!
//! The backend API is pointed at an unroutable local port, so anything that
//! would reach it fails fast; everything else is exercised for real.

use std::sync::Arc;

use axum::http::{HeaderValue, StatusCode, header};
use axum_test::TestServer;
use carechat::api::ApiClient;
use carechat::config::{ApiConfig, AppConfig, ServerConfig, SessionConfig};
use carechat::server::build_router;
use carechat::session::SessionStore;
use carechat::AppState;

fn test_state() -> AppState {
    let config = AppConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        api: ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        },
        session: SessionConfig {
            cookie_name: "chat_session".to_string(),
            timeout_minutes: 30,
        },
    };

    AppState {
        sessions: SessionStore::new(),
        api: Arc::new(ApiClient::new(&config.api).expect("client builds")),
        config: Arc::new(config),
    }
}

fn cookie(value: &'static str) -> HeaderValue {
    HeaderValue::from_static(value)
}

#[tokio::test]
async fn test_healthz() {
    let server = TestServer::new(build_router(test_state())).unwrap();

    let response = server.get("/healthz").await;
    response.assert_status_ok();
    response.assert_text("ok");
}

#[tokio::test]
async fn test_chat_page_redirects_when_not_signed_in() {
    let server = TestServer::new(build_router(test_state())).unwrap();

    let response = server.get("/").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/auth"
    );

    // A session cookie is minted on first contact
    let set_cookie = response.headers().get(header::SET_COOKIE).unwrap();
    assert!(set_cookie.to_str().unwrap().starts_with("chat_session="));
}

#[tokio::test]
async fn test_auth_page_renders() {
    let server = TestServer::new(build_router(test_state())).unwrap();

    let response = server.get("/auth").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Friendly Assistant"));
    assert!(body.contains("Sign in"));
    assert!(body.contains("/auth/login"));
}

#[tokio::test]
async fn test_chat_page_renders_conversation_when_signed_in() {
    let state = test_state();
    let session = state.sessions.create_with_id("sess-chat");
    session.login("tok_abc");
    session.add_user_message("Book me a checkup");
    session.add_assistant_message("On it!", None);

    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .get("/")
        .add_header(header::COOKIE, cookie("chat_session=sess-chat"))
        .await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Friendly Assistant"));
    assert!(body.contains("Book me a checkup"));
    assert!(body.contains("On it!"));
    assert!(body.contains("Logout"));
}

#[tokio::test]
async fn test_logout_clears_flags_and_redirects() {
    let state = test_state();
    let session = state.sessions.create_with_id("sess-logout");
    session.login("tok_abc");
    assert!(session.is_logged_in());

    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .post("/logout")
        .add_header(header::COOKIE, cookie("chat_session=sess-logout"))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/auth"
    );

    assert!(!session.is_logged_in());
    assert!(session.token().is_none());
}

#[tokio::test]
async fn test_logout_succeeds_without_prior_flags() {
    let state = test_state();
    let _session = state.sessions.create_with_id("sess-fresh");

    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .post("/logout")
        .add_header(header::COOKIE, cookie("chat_session=sess-fresh"))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_api_chat_requires_login() {
    let server = TestServer::new(build_router(test_state())).unwrap();

    let response = server
        .post("/api/chat")
        .form(&[("message", "hello")])
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_api_chat_maps_backend_failure_to_bad_gateway() {
    let state = test_state();
    let session = state.sessions.create_with_id("sess-backend");
    session.login("tok_abc");

    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .post("/api/chat")
        .add_header(header::COOKIE, cookie("chat_session=sess-backend"))
        .form(&[("message", "hello")])
        .await;
    response.assert_status(StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_unknown_route_renders_not_found_page() {
    let server = TestServer::new(build_router(test_state())).unwrap();

    let response = server.get("/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("404"));
}
