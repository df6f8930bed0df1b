//! Per-client session state and session storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::appointment::AppointmentData;
use crate::chat::Message;

/// Flag key marking an authenticated session.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Flag key holding the backend access token.
pub const TOKEN_KEY: &str = "token";

/// Default session timeout (30 minutes).
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Error raised by fallible session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The flag store lock was poisoned by a panicking writer.
    #[error("session storage is unavailable")]
    Poisoned,
}

/// A single client session.
///
/// Sessions hold the authentication flags and the conversation history,
/// and provide methods for mutating both.
#[derive(Debug)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    /// Unique session identifier.
    id: String,
    /// String key-value flag store.
    flags: RwLock<HashMap<String, String>>,
    /// Conversation messages.
    messages: RwLock<Vec<Message>>,
    /// Backend conversation ID, once the first reply arrives.
    conversation: RwLock<Option<String>>,
    /// Session creation time.
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    /// Last activity time.
    last_activity: RwLock<DateTime<Utc>>,
}

impl Clone for Session {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Session {
    /// Create a new session with the given ID.
    fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            inner: Arc::new(SessionInner {
                id,
                flags: RwLock::new(HashMap::new()),
                messages: RwLock::new(Vec::new()),
                conversation: RwLock::new(None),
                created_at: now,
                last_activity: RwLock::new(now),
            }),
        }
    }

    /// Get the session ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Store a flag value under the given key.
    pub fn set_item(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut guard = self.inner.flags.write().unwrap();
        guard.insert(key.into(), value.into());
        drop(guard);
        self.touch();
    }

    /// Get a flag value by key.
    #[must_use]
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.inner.flags.read().unwrap().get(key).cloned()
    }

    /// Remove a flag by key. Removing an absent key is a no-op.
    pub fn remove_item(&self, key: &str) {
        let mut guard = self.inner.flags.write().unwrap();
        guard.remove(key);
        drop(guard);
        self.touch();
    }

    /// Mark the session as authenticated with the given backend token.
    pub fn login(&self, token: impl Into<String>) {
        self.set_item(LOGGED_IN_KEY, "true");
        self.set_item(TOKEN_KEY, token);
    }

    /// Whether the session is currently authenticated.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.get_item(LOGGED_IN_KEY).is_some()
    }

    /// Get the backend access token, if authenticated.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.get_item(TOKEN_KEY)
    }

    /// Clear the authentication flags.
    ///
    /// Removes both `isLoggedIn` and `token` regardless of whether they
    /// were set. Both removals happen under a single write lock.
    pub fn logout(&self) -> Result<(), SessionError> {
        let mut guard = self
            .inner
            .flags
            .write()
            .map_err(|_| SessionError::Poisoned)?;
        guard.remove(LOGGED_IN_KEY);
        guard.remove(TOKEN_KEY);
        drop(guard);
        self.touch();
        Ok(())
    }

    /// Add a user message to the conversation.
    pub fn add_user_message(&self, text: impl Into<String>) {
        self.add_message(Message::user(text));
    }

    /// Add an assistant message, optionally carrying an appointment payload.
    pub fn add_assistant_message(
        &self,
        text: impl Into<String>,
        appointment_data: Option<AppointmentData>,
    ) {
        self.add_message(Message::assistant(text, appointment_data));
    }

    fn add_message(&self, msg: Message) {
        let mut guard = self.inner.messages.write().unwrap();
        guard.push(msg);
        drop(guard);
        self.touch();
    }

    /// Get a snapshot of the conversation messages.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.inner.messages.read().unwrap().clone()
    }

    /// Number of messages in the conversation.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.inner.messages.read().unwrap().len()
    }

    /// Get the backend conversation ID, if one has been assigned.
    #[must_use]
    pub fn conversation(&self) -> Option<String> {
        self.inner.conversation.read().unwrap().clone()
    }

    /// Record the backend conversation ID.
    pub fn set_conversation(&self, id: impl Into<String>) {
        let mut guard = self.inner.conversation.write().unwrap();
        *guard = Some(id.into());
    }

    /// Update the last-activity timestamp.
    fn touch(&self) {
        let mut guard = self.inner.last_activity.write().unwrap();
        *guard = Utc::now();
    }

    /// Whether the session has been inactive longer than the timeout.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        let last = *self.inner.last_activity.read().unwrap();
        let elapsed = Utc::now().signed_duration_since(last);
        elapsed > chrono::Duration::from_std(timeout).unwrap_or(chrono::TimeDelta::MAX)
    }
}

/// Thread-safe store of all active sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

#[derive(Debug)]
struct SessionStoreInner {
    sessions: RwLock<HashMap<String, Session>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a new session store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                sessions: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Create a new session and return it.
    #[must_use]
    pub fn create(&self) -> Session {
        let id = Uuid::new_v4().to_string();
        self.create_with_id(id)
    }

    /// Create a new session with a specific ID.
    #[must_use]
    pub fn create_with_id(&self, id: impl Into<String>) -> Session {
        let id = id.into();
        let session = Session::new(id.clone());
        let mut guard = self.inner.sessions.write().unwrap();
        guard.insert(id, session.clone());
        session
    }

    /// Get a session by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Session> {
        let guard = self.inner.sessions.read().unwrap();
        guard.get(id).cloned()
    }

    /// Get a session by ID, creating it if it doesn't exist.
    #[must_use]
    pub fn get_or_create(&self, id: &str) -> Session {
        // Try read-only first
        {
            let guard = self.inner.sessions.read().unwrap();
            if let Some(session) = guard.get(id) {
                return session.clone();
            }
        }

        // Create if not exists
        self.create_with_id(id)
    }

    /// Remove a session by ID.
    pub fn remove(&self, id: &str) -> Option<Session> {
        let mut guard = self.inner.sessions.write().unwrap();
        guard.remove(id)
    }

    /// Get the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.sessions.read().unwrap().len()
    }

    /// Check if there are no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove sessions that have been inactive longer than the timeout.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.inner.sessions.write().unwrap();
        let before = guard.len();
        guard.retain(|_, session| !session.is_expired_with_timeout(timeout));
        before - guard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_lifecycle() {
        let session = Session::new("test-123".to_string());

        assert_eq!(session.id(), "test-123");
        assert!(!session.is_logged_in());

        session.login("tok_abc");
        assert!(session.is_logged_in());
        assert_eq!(session.get_item(LOGGED_IN_KEY).as_deref(), Some("true"));
        assert_eq!(session.token().as_deref(), Some("tok_abc"));

        session.logout().unwrap();
        assert!(!session.is_logged_in());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_logout_with_absent_keys() {
        let session = Session::new("test".to_string());

        // Neither key was ever set; logout must still succeed.
        assert!(session.logout().is_ok());
        assert!(!session.is_logged_in());

        // Only one of the two keys present.
        session.set_item(TOKEN_KEY, "tok");
        session.logout().unwrap();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_remove_item() {
        let session = Session::new("test".to_string());

        session.set_item("theme", "dark");
        assert_eq!(session.get_item("theme").as_deref(), Some("dark"));

        session.remove_item("theme");
        assert!(session.get_item("theme").is_none());

        // Removing again is a no-op
        session.remove_item("theme");
    }

    #[test]
    fn test_conversation_history() {
        let session = Session::new("test".to_string());
        assert_eq!(session.message_count(), 0);

        session.add_user_message("Hello");
        session.add_assistant_message("Hi! How can I help?", None);
        assert_eq!(session.message_count(), 2);

        let messages = session.messages();
        assert!(messages[0].is_user);
        assert!(!messages[1].is_user);
        assert_eq!(messages[0].text, "Hello");
    }

    #[test]
    fn test_session_store() {
        let store = SessionStore::new();

        assert!(store.is_empty());

        let session = store.create();
        assert_eq!(store.len(), 1);

        let retrieved = store.get(session.id()).unwrap();
        assert_eq!(retrieved.id(), session.id());

        store.remove(session.id());
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_or_create() {
        let store = SessionStore::new();

        let first = store.get_or_create("abc");
        first.set_item("token", "tok");

        let second = store.get_or_create("abc");
        assert_eq!(second.get_item("token").as_deref(), Some("tok"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_cleanup_expired() {
        let store = SessionStore::new();
        let _session = store.create();

        // Nothing is expired with a generous timeout
        assert_eq!(store.cleanup_expired_with_timeout(DEFAULT_SESSION_TIMEOUT), 0);
        assert_eq!(store.len(), 1);

        // A zero timeout expires everything
        assert_eq!(store.cleanup_expired_with_timeout(Duration::ZERO), 1);
        assert!(store.is_empty());
    }
}
