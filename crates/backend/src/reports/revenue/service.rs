use anyhow::Result;
use sea_orm::DatabaseConnection;

use super::repository;
use super::repository::DailyRevenueRow;

/// The most recent `limit` revenue dates, re-ordered oldest-first. The
/// query limits on descending date, so the reverse happens here — callers
/// always receive a chronological series.
pub async fn daily_ascending(db: &DatabaseConnection, limit: u64) -> Result<Vec<DailyRevenueRow>> {
    let mut rows = repository::daily(db, limit).await?;
    rows.reverse();
    Ok(rows)
}
