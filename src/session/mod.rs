//! Session and conversation management.
//!
//! This module provides in-memory session storage for managing per-client
//! state across requests. Sessions are identified by UUID and carry two
//! things: a string key-value flag store (authentication flags such as
//! `isLoggedIn` and `token`) and the conversation history.
//!
//! # Architecture
//!
//! - [`Session`]: Represents a single client session
//! - [`SessionStore`]: Thread-safe store for all active sessions
//!
//! # Example
//!
//! ```rust
//! use carechat::session::SessionStore;
//!
//! let store = SessionStore::new();
//! let session = store.create();
//!
//! session.login("tok_abc123");
//! assert!(session.is_logged_in());
//!
//! session.logout().unwrap();
//! assert!(!session.is_logged_in());
//! assert!(session.token().is_none());
//! ```

mod store;

pub use store::{Session, SessionError, SessionStore};
