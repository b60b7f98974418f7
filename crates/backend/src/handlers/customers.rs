use axum::Json;

use contracts::reports::customers::{CustomerSummary, TopCustomer};

use crate::reports::customers::repository;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

pub async fn list() -> Result<Json<Vec<CustomerSummary>>, ApiError> {
    let rows = repository::list(get_connection()).await?;

    let customers: Vec<CustomerSummary> = rows
        .into_iter()
        .map(|r| CustomerSummary {
            customer_number: r.customer_number,
            customer_name: r.customer_name,
            city: r.city,
            country: r.country,
            order_count: r.order_count,
            total_payment: r.total_payment,
        })
        .collect();

    Ok(Json(customers))
}

pub async fn top() -> Result<Json<Vec<TopCustomer>>, ApiError> {
    let rows = repository::top_by_spend(get_connection()).await?;

    let customers: Vec<TopCustomer> = rows
        .into_iter()
        .map(|r| TopCustomer {
            customer_number: r.customer_number,
            customer_name: r.customer_name,
            country: r.country,
            total_spent: r.total_spent,
        })
        .collect();

    Ok(Json(customers))
}
