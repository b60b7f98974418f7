use axum::Json;

use contracts::reports::offices::OfficeSummary;

use crate::reports::offices::repository;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

pub async fn list() -> Result<Json<Vec<OfficeSummary>>, ApiError> {
    let rows = repository::list(get_connection()).await?;

    let offices: Vec<OfficeSummary> = rows
        .into_iter()
        .map(|r| OfficeSummary {
            office_code: r.office_code,
            city: r.city,
            country: r.country,
            postal_code: r.postal_code,
            phone: r.phone,
            employee_count: r.employee_count,
            customer_count: r.customer_count,
        })
        .collect();

    Ok(Json(offices))
}
