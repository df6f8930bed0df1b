//! Axum routes and handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use leptos::prelude::*;
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::session::{Session, SessionStore};
use crate::ui::app::{AuthPage, ChatPage, NotFoundPage};
use crate::ui::chat::ChatMessage;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let api = Arc::new(ApiClient::new(&config.api)?);
    let sessions = SessionStore::new();

    // Periodic cleanup of inactive sessions
    let cleanup_store = sessions.clone();
    let timeout = Duration::from_secs(config.session.timeout_minutes * 60);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(timeout);
        loop {
            interval.tick().await;
            let removed = cleanup_store.cleanup_expired_with_timeout(timeout);
            if removed > 0 {
                info!(name: "session.cleanup", removed, "Expired sessions removed");
            }
        }
    });

    let state = AppState {
        sessions,
        api,
        config: Arc::clone(&config),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(chat_page))
        .route("/auth", get(auth_page))
        // Actions
        .route("/auth/login", post(auth_login))
        .route("/logout", post(logout))
        .route("/api/chat", post(api_chat))
        // Probes and assets
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve the client's session from the cookie jar, creating both the
/// session and the cookie on first contact.
fn client_session(state: &AppState, jar: CookieJar) -> (Session, CookieJar) {
    let cookie_name = state.config.session.cookie_name.clone();

    if let Some(cookie) = jar.get(&cookie_name) {
        let session = state.sessions.get_or_create(cookie.value());
        return (session, jar);
    }

    let session = state.sessions.create();
    let mut cookie = Cookie::new(cookie_name, session.id().to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    (session, jar.add(cookie))
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - chat page, or a redirect to `/auth` when not signed in.
async fn chat_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (session, jar) = client_session(&state, jar);

    if !session.is_logged_in() {
        return (jar, Redirect::to("/auth")).into_response();
    }

    let html = view! { <ChatPage messages=session.messages() /> }.to_html();
    (jar, Html(html)).into_response()
}

/// GET /auth - authentication page.
async fn auth_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (_session, jar) = client_session(&state, jar);
    let html = view! { <AuthPage /> }.to_html();
    (jar, Html(html)).into_response()
}

/// Fallback handler for unknown routes.
async fn not_found() -> impl IntoResponse {
    let html = view! { <NotFoundPage /> }.to_html();
    (StatusCode::NOT_FOUND, Html(html))
}

/// GET /healthz - liveness probe.
async fn healthz() -> &'static str {
    "ok"
}

// ─────────────────────────────────────────────────────────────────────────────
// Action Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Login form body.
#[derive(Debug, Deserialize)]
struct LoginForm {
    email: String,
    password: String,
}

/// POST /auth/login - authenticate against the backend.
async fn auth_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let (session, jar) = client_session(&state, jar);

    match state.api.login(&form.email, &form.password).await {
        Ok(token) => {
            session.login(token);
            info!(
                name: "auth.login",
                session_id = %session.id(),
                "Login succeeded"
            );
            (jar, Redirect::to("/")).into_response()
        }
        Err(e) => {
            tracing::warn!(
                name: "auth.login.failed",
                error = %e,
                "Login failed"
            );
            let message = "Login failed. Check your credentials and try again.".to_string();
            let html = view! { <AuthPage error=message /> }.to_html();
            (StatusCode::UNAUTHORIZED, jar, Html(html)).into_response()
        }
    }
}

/// POST /logout - clear the session flags and return to the auth page.
///
/// Removes both `isLoggedIn` and `token` regardless of their prior values,
/// then redirects. There is no confirmation step.
async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, (StatusCode, String)> {
    let (session, jar) = client_session(&state, jar);

    session
        .logout()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    info!(
        name: "auth.logout",
        session_id = %session.id(),
        "Session flags cleared"
    );

    Ok((jar, Redirect::to("/auth")).into_response())
}

/// Chat form body.
#[derive(Debug, Deserialize)]
struct ChatForm {
    message: String,
}

/// POST /api/chat - exchange one turn with the backend.
///
/// Returns the user bubble and the assistant bubble as an HTML fragment,
/// appended into `#messages` by HTMX.
async fn api_chat(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ChatForm>,
) -> Result<Response, (StatusCode, String)> {
    let (session, jar) = client_session(&state, jar);

    let Some(token) = session.token() else {
        return Err((StatusCode::UNAUTHORIZED, "Not signed in".to_string()));
    };

    info!(
        name: "chat.message",
        session_id = %session.id(),
        "User message received"
    );

    session.add_user_message(form.message.clone());

    let conversation = session.conversation();
    let reply = state
        .api
        .send_message(&token, &form.message, conversation.as_deref())
        .await
        .map_err(|e| {
            tracing::error!(
                name: "chat.backend.failed",
                error = %e,
                "Backend chat request failed"
            );
            (StatusCode::BAD_GATEWAY, e.to_string())
        })?;

    session.set_conversation(reply.conversation_id.clone());
    session.add_assistant_message(reply.response.clone(), reply.appointment_data.clone());

    let html = view! {
        <ChatMessage message=form.message is_user=true />
        <ChatMessage
            message=reply.response
            is_user=false
            appointment_data=reply.appointment_data
        />
    }
    .to_html();

    Ok((jar, Html(html)).into_response())
}
