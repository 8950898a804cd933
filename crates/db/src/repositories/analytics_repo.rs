//! Repository for the append-only `analytics` visit log.

use sqlx::PgPool;

use crate::models::analytics::{DailyCount, NewVisit, PageCount, VisitSummary};

/// Number of top pages returned by the summary.
const TOP_PAGES_LIMIT: i64 = 10;

/// Provides the append and aggregate operations over visit data.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Append one visit with a server-assigned timestamp.
    pub async fn record(pool: &PgPool, visit: &NewVisit) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO analytics (visitor_ip, user_agent, page_path, referrer, visited_at)
             VALUES ($1, $2, $3, $4, now())",
        )
        .bind(&visit.visitor_ip)
        .bind(&visit.user_agent)
        .bind(&visit.page_path)
        .bind(&visit.referrer)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Compute the aggregate statistics for the admin dashboard.
    pub async fn summarize(pool: &PgPool) -> Result<VisitSummary, sqlx::Error> {
        let total_visits: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM analytics")
            .fetch_one(pool)
            .await?;

        let unique_visitors: i64 =
            sqlx::query_scalar("SELECT COUNT(DISTINCT visitor_ip) FROM analytics")
                .fetch_one(pool)
                .await?;

        let visits_today: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM analytics WHERE visited_at >= now() - INTERVAL '24 hours'",
        )
        .fetch_one(pool)
        .await?;

        let visits_week: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM analytics WHERE visited_at >= now() - INTERVAL '7 days'",
        )
        .fetch_one(pool)
        .await?;

        let top_pages = sqlx::query_as::<_, PageCount>(
            "SELECT page_path AS path, COUNT(*) AS count
             FROM analytics
             GROUP BY page_path
             ORDER BY count DESC, page_path ASC
             LIMIT $1",
        )
        .bind(TOP_PAGES_LIMIT)
        .fetch_all(pool)
        .await?;

        let daily_stats = sqlx::query_as::<_, DailyCount>(
            "SELECT visited_at::date AS date, COUNT(*) AS count
             FROM analytics
             WHERE visited_at >= now() - INTERVAL '30 days'
             GROUP BY visited_at::date
             ORDER BY date DESC",
        )
        .fetch_all(pool)
        .await?;

        Ok(VisitSummary {
            total_visits,
            unique_visitors,
            visits_today,
            visits_week,
            top_pages,
            daily_stats,
        })
    }
}
