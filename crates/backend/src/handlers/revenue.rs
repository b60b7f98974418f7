use axum::{extract::Query, Json};

use contracts::reports::revenue::{DailyRevenue, MonthlyRevenue};

use super::LimitParams;
use crate::reports::revenue::{repository, service};
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

/// A year of daily revenue by default.
const DAILY_DEFAULT: u64 = 365;

pub async fn daily(
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<DailyRevenue>>, ApiError> {
    let limit = super::parse_limit(params.limit.as_deref(), DAILY_DEFAULT);
    let rows = service::daily_ascending(get_connection(), limit).await?;

    let series: Vec<DailyRevenue> = rows
        .into_iter()
        .map(|r| DailyRevenue {
            date: r.date,
            revenue: r.revenue,
        })
        .collect();

    Ok(Json(series))
}

pub async fn monthly() -> Result<Json<Vec<MonthlyRevenue>>, ApiError> {
    let rows = repository::monthly(get_connection()).await?;

    let series: Vec<MonthlyRevenue> = rows
        .into_iter()
        .map(|r| MonthlyRevenue {
            month: r.month,
            revenue: r.revenue,
        })
        .collect();

    Ok(Json(series))
}
