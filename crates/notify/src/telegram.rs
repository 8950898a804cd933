//! Telegram Bot API delivery.
//!
//! [`TelegramDelivery`] wraps a `reqwest` client to call the Bot API
//! `sendMessage` method. Delivery is single-attempt with a fixed request
//! timeout; the caller records failures rather than retrying.

use std::time::Duration;

/// Bot API host. Overridable for tests.
const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// HTTP request timeout for a delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for Telegram delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The Bot API answered but reported `ok: false`.
    #[error("Telegram API error: {0}")]
    Api(String),
}

// ---------------------------------------------------------------------------
// TelegramDelivery
// ---------------------------------------------------------------------------

/// Sends booking notifications through the Telegram Bot API.
pub struct TelegramDelivery {
    client: reqwest::Client,
    base_url: String,
}

impl TelegramDelivery {
    /// Create a new delivery service with a pre-configured HTTP client.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url: TELEGRAM_API_BASE.to_string(),
        }
    }

    /// Create a delivery service pointed at a different API host.
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut delivery = Self::new();
        delivery.base_url = base_url.into();
        delivery
    }

    /// Send one HTML-formatted message to a chat.
    pub async fn send(
        &self,
        bot_token: &str,
        chat_id: &str,
        text: &str,
    ) -> Result<(), TelegramError> {
        let url = format!("{}/bot{bot_token}/sendMessage", self.base_url);

        let response = self
            .client
            .post(&url)
            .form(&[("chat_id", chat_id), ("text", text), ("parse_mode", "HTML")])
            .send()
            .await?;

        let status = response.status();
        let body: serde_json::Value = response.json().await?;

        if body.get("ok").and_then(|v| v.as_bool()) == Some(true) {
            tracing::info!(chat_id, "Telegram notification sent");
            return Ok(());
        }

        let description = body
            .get("description")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {status}"));
        Err(TelegramError::Api(description))
    }
}

impl Default for TelegramDelivery {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
