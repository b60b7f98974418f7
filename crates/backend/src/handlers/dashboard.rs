use axum::Json;

use contracts::reports::dashboard::{DashboardOverview, DashboardSummary};

use crate::reports::dashboard::service;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

pub async fn summary() -> Result<Json<DashboardSummary>, ApiError> {
    let summary = service::summary(get_connection()).await?;
    Ok(Json(summary))
}

pub async fn overview() -> Result<Json<DashboardOverview>, ApiError> {
    let overview = service::overview(get_connection()).await?;
    Ok(Json(overview))
}
