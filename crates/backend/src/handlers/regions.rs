use axum::Json;

use contracts::reports::regions::RegionSales;

use crate::reports::regions::repository;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

pub async fn sales_by_region() -> Result<Json<Vec<RegionSales>>, ApiError> {
    let rows = repository::sales_by_country(get_connection()).await?;

    let sales: Vec<RegionSales> = rows
        .into_iter()
        .map(|r| RegionSales {
            country: r.country,
            customers: r.customers,
            orders: r.orders,
            revenue: r.revenue,
        })
        .collect();

    Ok(Json(sales))
}
