//! Carechat
//!
//! A server-rendered chat client for a health-assistant service. Renders a
//! chat interface whose assistant messages can carry appointment booking
//! results from an external scheduling backend.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server serving SSR pages and HTMX fragments
//! - **UI**: Leptos SSR components + HTMX, HTML-first and inspectable
//! - **Sessions**: In-memory per-client flag store and conversation history
//! - **Backend**: External chat/appointment API reached over HTTP
//!
//! # Modules
//!
//! - [`api`]: HTTP client for the backend chat/appointment API
//! - [`appointment`]: Appointment payload types and outcome selection
//! - [`chat`]: Chat message data model
//! - [`session`]: Session flags and conversation management
//! - [`server`]: Axum routes and handlers
//! - [`ui`]: Leptos SSR components

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::match_same_arms)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]

pub mod api;
pub mod appointment;
pub mod chat;
pub mod config;
pub mod server;
pub mod session;
pub mod ui;

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::session::SessionStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Session store for flags and conversation history.
    pub sessions: SessionStore,
    /// Client for the backend chat/appointment API.
    pub api: Arc<ApiClient>,
    /// Global configuration.
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("sessions", &self.sessions.len())
            .field("api", &self.api.base_url().as_str())
            .finish()
    }
}
