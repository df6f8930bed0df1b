//! HTTP client for the backend chat/appointment API.
//!
//! The backend owns authentication, conversations, and the appointment
//! scheduling logic; this client only speaks its JSON surface.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::appointment::AppointmentData;
use crate::config::ApiConfig;

/// Backend API error type.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },
}

/// Result type alias for backend API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_id: Option<&'a str>,
}

/// Assistant reply from the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    /// Assistant response text.
    pub response: String,
    /// Conversation ID for follow-up turns.
    pub conversation_id: String,
    /// Structured scheduling result, when the turn touched an appointment.
    #[serde(default)]
    pub appointment_data: Option<AppointmentData>,
}

/// HTTP client for the backend.
///
/// # Example
///
/// ```rust,no_run
/// use carechat::api::ApiClient;
/// use carechat::config::ApiConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(&ApiConfig {
///     base_url: "http://localhost:8000".to_string(),
///     timeout_secs: 30,
/// })?;
///
/// let token = client.login("ada@example.com", "hunter2").await?;
/// let reply = client.send_message(&token, "Hello!", None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a new client for the configured backend.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { base_url, http })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Authenticate and return the access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let response = self
            .http
            .post(self.url("/api/v1/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let login: LoginResponse = Self::handle_response(response).await?;
        Ok(login.access_token)
    }

    /// Send a chat message and return the assistant reply.
    pub async fn send_message(
        &self,
        token: &str,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply> {
        let response = self
            .http
            .post(self.url("/api/v1/chat"))
            .bearer_auth(token)
            .json(&ChatRequest {
                message,
                conversation_id,
            })
            .send()
            .await?;

        Self::handle_response(response).await
    }

    fn url(&self, path: &str) -> Url {
        self.base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            Err(ApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_reply_deserializes_payload() {
        let json = r#"{
            "response": "You're booked!",
            "conversation_id": "c-1",
            "appointment_data": {"success": true, "appointment_id": 42}
        }"#;

        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.response, "You're booked!");
        let data = reply.appointment_data.unwrap();
        assert_eq!(data.appointment_id, Some(42));
    }

    #[test]
    fn test_chat_reply_without_payload() {
        let json = r#"{"response": "Hi!", "conversation_id": "c-2"}"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert!(reply.appointment_data.is_none());
    }
}
