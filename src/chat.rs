//! Chat message data model.

use serde::{Deserialize, Serialize};

use crate::appointment::AppointmentData;

/// A single turn of conversation.
///
/// Messages are created once per turn and never mutated afterwards; the UI
/// components are pure functions of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message text.
    pub text: String,
    /// Whether the message was written by the user (vs the assistant).
    pub is_user: bool,
    /// Whether this message stands in for a reply still in flight.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_loading: bool,
    /// Structured appointment payload attached by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_data: Option<AppointmentData>,
}

impl Message {
    /// A message written by the user.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
            is_loading: false,
            appointment_data: None,
        }
    }

    /// An assistant reply, optionally carrying an appointment payload.
    #[must_use]
    pub fn assistant(text: impl Into<String>, appointment_data: Option<AppointmentData>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
            is_loading: false,
            appointment_data,
        }
    }

    /// An assistant placeholder shown while a reply is in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            text: String::new(),
            is_user: false,
            is_loading: true,
            appointment_data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let user = Message::user("Book me an appointment");
        assert!(user.is_user);
        assert!(!user.is_loading);
        assert!(user.appointment_data.is_none());

        let loading = Message::loading();
        assert!(!loading.is_user);
        assert!(loading.is_loading);
        assert!(loading.text.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let msg = Message::assistant("Done!", None);
        let json = serde_json::to_string(&msg).unwrap();

        // Defaulted fields are omitted from the wire form
        assert!(!json.contains("is_loading"));
        assert!(!json.contains("appointment_data"));

        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
