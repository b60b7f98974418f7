use axum::Json;

use contracts::reports::employees::{EmployeePerformance, EmployeeSummary};

use crate::reports::employees::repository;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

pub async fn list() -> Result<Json<Vec<EmployeeSummary>>, ApiError> {
    let rows = repository::list(get_connection()).await?;

    let employees: Vec<EmployeeSummary> = rows
        .into_iter()
        .map(|r| EmployeeSummary {
            employee_number: r.employee_number,
            first_name: r.first_name,
            last_name: r.last_name,
            job_title: r.job_title,
            reports_to: r.reports_to,
            office_code: r.office_code,
            city: r.city,
            country: r.country,
            customers_managed: r.customers_managed,
        })
        .collect();

    Ok(Json(employees))
}

pub async fn performance() -> Result<Json<Vec<EmployeePerformance>>, ApiError> {
    let rows = repository::performance(get_connection(), None).await?;

    let performance: Vec<EmployeePerformance> = rows
        .into_iter()
        .map(|r| EmployeePerformance {
            employee_number: r.employee_number,
            name: r.name,
            job_title: r.job_title,
            customers_count: r.customers_count,
            orders_count: r.orders_count,
            total_revenue: r.total_revenue,
        })
        .collect();

    Ok(Json(performance))
}
