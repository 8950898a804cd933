//! Handlers for visit analytics: append-only tracking plus read-side
//! aggregates for the admin dashboard.

use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use zootaxi_db::models::analytics::NewVisit;
use zootaxi_db::repositories::AnalyticsRepo;

use crate::error::{AppJson, AppResult};
use crate::state::AppState;

/// Fallback when a client identity header is absent.
const UNKNOWN: &str = "unknown";

/// Body of `POST /analytics`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecordVisitBody {
    /// Page path being visited (defaults to `/`).
    pub path: Option<String>,
    /// Document referrer, if any.
    pub referrer: Option<String>,
}

/// First hop of the `X-Forwarded-For` chain, if present.
fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
}

// ---------------------------------------------------------------------------
// POST /analytics
// ---------------------------------------------------------------------------

/// Record one visit with a server-assigned timestamp.
pub async fn record_visit(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(body): AppJson<RecordVisitBody>,
) -> AppResult<impl IntoResponse> {
    let visit = NewVisit {
        visitor_ip: forwarded_ip(&headers).unwrap_or_else(|| UNKNOWN.to_string()),
        user_agent: headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(UNKNOWN)
            .to_string(),
        page_path: body.path.unwrap_or_else(|| "/".to_string()),
        referrer: body.referrer.unwrap_or_default(),
    };

    AnalyticsRepo::record(&state.pool, &visit).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Visit tracked",
    })))
}

// ---------------------------------------------------------------------------
// GET /analytics
// ---------------------------------------------------------------------------

/// Aggregate visit statistics: totals, uniques, trailing windows, top
/// pages, and a 30-day daily breakdown.
pub async fn visit_summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = AnalyticsRepo::summarize(&state.pool).await?;
    Ok(Json(summary))
}
