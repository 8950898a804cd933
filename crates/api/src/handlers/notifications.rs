//! Handler for outbound booking notifications.
//!
//! The only endpoint with partial-failure semantics: each enabled
//! channel is attempted independently and the response is always 200
//! with per-channel outcomes.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use zootaxi_core::error::CoreError;
use zootaxi_notify::{DeliverySettings, OrderSummary};

use crate::error::{AppError, AppJson, AppResult};
use crate::state::AppState;

/// Body of `POST /notifications`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NotifyRequest {
    /// The order to announce; must be a non-empty object.
    pub order: Option<serde_json::Value>,
    /// Per-request delivery settings.
    pub settings: Option<DeliverySettings>,
}

// ---------------------------------------------------------------------------
// POST /notifications
// ---------------------------------------------------------------------------

/// Fan a formatted order summary out to the enabled channels.
pub async fn send_notifications(
    State(state): State<AppState>,
    AppJson(input): AppJson<NotifyRequest>,
) -> AppResult<impl IntoResponse> {
    let order_value = match input.order {
        Some(value) if value.as_object().is_some_and(|o| !o.is_empty()) => value,
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Order data required".to_string(),
            )))
        }
    };

    let order: OrderSummary = serde_json::from_value(order_value)
        .map_err(|e| AppError::Core(CoreError::Validation(format!("Invalid order payload: {e}"))))?;

    let settings = input.settings.unwrap_or_default();
    let outcome = state.dispatcher.dispatch(&order, &settings).await;

    tracing::info!(
        telegram_sent = outcome.telegram_sent,
        email_sent = outcome.email_sent,
        errors = outcome.errors.len(),
        "Notification dispatch finished"
    );

    Ok(Json(outcome))
}
