//! Two-channel notification fan-out with partial-failure semantics.

use serde::{Deserialize, Serialize};

use crate::email::{EmailConfig, EmailDelivery};
use crate::message::{self, OrderSummary};
use crate::telegram::TelegramDelivery;

// ---------------------------------------------------------------------------
// Settings / outcome types
// ---------------------------------------------------------------------------

/// Per-request delivery settings supplied by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeliverySettings {
    pub telegram_enabled: bool,
    pub telegram_chat_id: Option<String>,
    pub email_enabled: bool,
    pub notification_email: Option<String>,
}

/// Per-channel outcome plus accumulated error strings.
///
/// A disabled channel stays `false` with no error; a failed or
/// misconfigured channel stays `false` with an error recorded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchOutcome {
    pub telegram_sent: bool,
    pub email_sent: bool,
    pub errors: Vec<String>,
}

/// Process-level notification credentials, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct NotifyConfig {
    /// Telegram bot token (`TELEGRAM_BOT_TOKEN`).
    pub bot_token: Option<String>,
    /// SMTP credentials; `None` when email is not configured.
    pub email: Option<EmailConfig>,
}

impl NotifyConfig {
    /// Load notification credentials from environment variables.
    pub fn from_env() -> Self {
        Self {
            bot_token: std::env::var("TELEGRAM_BOT_TOKEN").ok(),
            email: EmailConfig::from_env(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Fans a formatted booking summary out to Telegram and email.
pub struct Dispatcher {
    config: NotifyConfig,
    telegram: TelegramDelivery,
}

impl Dispatcher {
    /// Create a dispatcher with the given credentials.
    pub fn new(config: NotifyConfig) -> Self {
        Self {
            config,
            telegram: TelegramDelivery::new(),
        }
    }

    /// Attempt both enabled channels independently.
    ///
    /// Nothing here returns `Err`: missing credentials and delivery
    /// failures are recorded in the outcome so one channel can never
    /// block the other, and the caller always gets a 200-shaped result.
    pub async fn dispatch(
        &self,
        order: &OrderSummary,
        settings: &DeliverySettings,
    ) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();

        if settings.telegram_enabled {
            match (&self.config.bot_token, &settings.telegram_chat_id) {
                (Some(bot_token), Some(chat_id)) => {
                    let text = message::telegram_text(order);
                    match self.telegram.send(bot_token, chat_id, &text).await {
                        Ok(()) => outcome.telegram_sent = true,
                        Err(e) => {
                            tracing::warn!(error = %e, "Telegram delivery failed");
                            outcome
                                .errors
                                .push("Failed to send Telegram notification".to_string());
                        }
                    }
                }
                _ => {
                    outcome
                        .errors
                        .push("Telegram credentials not configured".to_string());
                }
            }
        }

        if settings.email_enabled {
            match (&self.config.email, &settings.notification_email) {
                (Some(email_config), Some(to_email)) => {
                    let delivery = EmailDelivery::new(email_config.clone());
                    let subject = message::email_subject(order);
                    let html = message::email_html(order);
                    match delivery.deliver(to_email, &subject, &html).await {
                        Ok(()) => outcome.email_sent = true,
                        Err(e) => {
                            tracing::warn!(error = %e, "Email delivery failed");
                            outcome
                                .errors
                                .push("Failed to send email notification".to_string());
                        }
                    }
                }
                _ => {
                    outcome
                        .errors
                        .push("Email credentials not configured".to_string());
                }
            }
        }

        outcome
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> OrderSummary {
        serde_json::from_value(serde_json::json!({ "client_name": "Anna" })).unwrap()
    }

    #[tokio::test]
    async fn both_channels_disabled_is_a_clean_noop() {
        let dispatcher = Dispatcher::new(NotifyConfig::default());
        let outcome = dispatcher.dispatch(&order(), &DeliverySettings::default()).await;

        assert!(!outcome.telegram_sent);
        assert!(!outcome.email_sent);
        assert!(outcome.errors.is_empty());
    }

    #[tokio::test]
    async fn telegram_without_token_records_an_error() {
        let dispatcher = Dispatcher::new(NotifyConfig::default());
        let settings = DeliverySettings {
            telegram_enabled: true,
            telegram_chat_id: Some("12345".to_string()),
            ..Default::default()
        };
        let outcome = dispatcher.dispatch(&order(), &settings).await;

        assert!(!outcome.telegram_sent);
        assert_eq!(
            outcome.errors,
            vec!["Telegram credentials not configured".to_string()]
        );
    }

    #[tokio::test]
    async fn telegram_without_chat_id_records_an_error() {
        let config = NotifyConfig {
            bot_token: Some("123:abc".to_string()),
            email: None,
        };
        let dispatcher = Dispatcher::new(config);
        let settings = DeliverySettings {
            telegram_enabled: true,
            ..Default::default()
        };
        let outcome = dispatcher.dispatch(&order(), &settings).await;

        assert!(!outcome.telegram_sent);
        assert_eq!(
            outcome.errors,
            vec!["Telegram credentials not configured".to_string()]
        );
    }

    #[tokio::test]
    async fn email_without_smtp_config_records_an_error() {
        let dispatcher = Dispatcher::new(NotifyConfig::default());
        let settings = DeliverySettings {
            email_enabled: true,
            notification_email: Some("admin@example.com".to_string()),
            ..Default::default()
        };
        let outcome = dispatcher.dispatch(&order(), &settings).await;

        assert!(!outcome.email_sent);
        assert_eq!(
            outcome.errors,
            vec!["Email credentials not configured".to_string()]
        );
    }

    #[tokio::test]
    async fn channel_errors_accumulate_independently() {
        let dispatcher = Dispatcher::new(NotifyConfig::default());
        let settings = DeliverySettings {
            telegram_enabled: true,
            email_enabled: true,
            ..Default::default()
        };
        let outcome = dispatcher.dispatch(&order(), &settings).await;

        assert!(!outcome.telegram_sent);
        assert!(!outcome.email_sent);
        assert_eq!(outcome.errors.len(), 2);
    }
}
