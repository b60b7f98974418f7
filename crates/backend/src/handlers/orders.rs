use axum::{extract::Query, Json};

use contracts::reports::orders::{OrderAnalytics, RecentOrder};

use super::LimitParams;
use crate::reports::orders::repository;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

/// Dashboard recents default; the full listing page passes its own limit.
const RECENT_DEFAULT: u64 = 10;
/// Analytics scope default: effectively "all orders" for the sample data.
const ANALYTICS_DEFAULT: u64 = 10_000;

pub async fn recent(
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<RecentOrder>>, ApiError> {
    let limit = super::parse_limit(params.limit.as_deref(), RECENT_DEFAULT);
    let rows = repository::recent(get_connection(), limit).await?;

    let orders: Vec<RecentOrder> = rows
        .into_iter()
        .map(|r| RecentOrder {
            order_number: r.order_number,
            order_date: r.order_date,
            required_date: r.required_date,
            shipped_date: r.shipped_date,
            status: r.status,
            comments: r.comments,
            customer_name: r.customer_name,
            total: r.total,
        })
        .collect();

    Ok(Json(orders))
}

pub async fn analytics(
    Query(params): Query<LimitParams>,
) -> Result<Json<OrderAnalytics>, ApiError> {
    let limit = super::parse_limit(params.limit.as_deref(), ANALYTICS_DEFAULT);
    let row = repository::analytics(get_connection(), limit).await?;

    Ok(Json(OrderAnalytics {
        total_orders: row.total_orders,
        shipped_orders: row.shipped_orders,
        pending_orders: row.pending_orders,
        cancelled_orders: row.cancelled_orders,
        avg_fulfillment_time: row.avg_fulfillment_time,
    }))
}
