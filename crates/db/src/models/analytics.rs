//! Visit analytics models: the append-only log row and the read-side
//! aggregate shapes.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A single visit to record. All fields are already defaulted by the
/// handler (`unknown` IP/agent, `/` path, empty referrer).
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub visitor_ip: String,
    pub user_agent: String,
    pub page_path: String,
    pub referrer: String,
}

/// Visit count for one page path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageCount {
    pub path: String,
    pub count: i64,
}

/// Visit count for one calendar date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}

/// Aggregate statistics over the visit log.
#[derive(Debug, Clone, Serialize)]
pub struct VisitSummary {
    pub total_visits: i64,
    pub unique_visitors: i64,
    pub visits_today: i64,
    pub visits_week: i64,
    pub top_pages: Vec<PageCount>,
    pub daily_stats: Vec<DailyCount>,
}
