//! Outbound order notifications: Telegram bot messages and email.
//!
//! The [`dispatch::Dispatcher`] fans one formatted order summary out to
//! both channels independently; a failing channel is recorded in the
//! outcome, never raised, so one broken provider cannot block the other.

pub mod dispatch;
pub mod email;
pub mod message;
pub mod telegram;

pub use dispatch::{DeliverySettings, DispatchOutcome, Dispatcher, NotifyConfig};
pub use email::{EmailConfig, EmailDelivery, EmailError};
pub use message::OrderSummary;
pub use telegram::{TelegramDelivery, TelegramError};
