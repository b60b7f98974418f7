use axum::{extract::Query, Json};

use contracts::reports::products::{InventoryAnalysis, ProductLineSummary, ProductSummary};

use super::LimitParams;
use crate::reports::products::{repository, service};
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

/// Default recency window: wide enough to cover every order in the sample
/// data, so an unparameterized request ranks all-time popularity.
const CUTOFF_WINDOW_DEFAULT: u64 = 10_000;

pub async fn list(
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<ProductSummary>>, ApiError> {
    let limit = super::parse_limit(params.limit.as_deref(), CUTOFF_WINDOW_DEFAULT);
    let rows = service::list(get_connection(), limit).await?;

    let products: Vec<ProductSummary> = rows
        .into_iter()
        .map(|r| ProductSummary {
            product_code: r.product_code,
            product_name: r.product_name,
            product_line: r.product_line,
            quantity_in_stock: r.quantity_in_stock,
            buy_price: r.buy_price,
            msrp: r.msrp,
            order_count: r.order_count,
        })
        .collect();

    Ok(Json(products))
}

pub async fn product_lines() -> Result<Json<Vec<ProductLineSummary>>, ApiError> {
    let rows = repository::product_lines(get_connection()).await?;

    let lines: Vec<ProductLineSummary> = rows
        .into_iter()
        .map(|r| ProductLineSummary {
            product_line: r.product_line,
            product_count: r.product_count,
            total_stock: r.total_stock,
        })
        .collect();

    Ok(Json(lines))
}

pub async fn inventory_analysis() -> Result<Json<Vec<InventoryAnalysis>>, ApiError> {
    let rows = repository::inventory_analysis(get_connection()).await?;

    let analysis: Vec<InventoryAnalysis> = rows
        .into_iter()
        .map(|r| InventoryAnalysis {
            product_line: r.product_line,
            product_count: r.product_count,
            total_quantity: r.total_quantity,
            avg_quantity: r.avg_quantity,
            total_value: r.total_value,
        })
        .collect();

    Ok(Json(analysis))
}
