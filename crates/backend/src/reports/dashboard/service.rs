use anyhow::Result;
use contracts::reports::dashboard::{
    DashboardOverview, DashboardSummary, EmployeeRevenue, RegionRevenue, TopOffice,
};
use contracts::reports::products::ProductPerformance;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::reports::{employees, offices, products, regions};

/// Rows on the overview's product and employee boards.
const OVERVIEW_TOP: u64 = 10;

/// Headline counters for the dashboard cards.
pub async fn summary(db: &DatabaseConnection) -> Result<DashboardSummary> {
    Ok(DashboardSummary {
        total_customers: repository::count_customers(db).await?,
        total_orders: repository::count_orders(db).await?,
        total_revenue: repository::total_payment_revenue(db).await?,
        total_products: repository::count_products(db).await?,
    })
}

/// The composite overview: headline counts plus the ranked boards. Each
/// piece is an independent read; the request either assembles all of them
/// or fails as a whole.
pub async fn overview(db: &DatabaseConnection) -> Result<DashboardOverview> {
    let total_employees = repository::count_employees(db).await?;
    let total_offices = repository::count_offices(db).await?;
    let avg_order_value = repository::average_order_value(db).await?;

    let top_offices = offices::repository::top_by_revenue(db, offices::repository::TOP_CAP)
        .await?
        .into_iter()
        .map(|r| TopOffice {
            city: r.city,
            country: r.country,
            customers: r.customers,
            revenue: r.revenue,
        })
        .collect();

    let region_sales = regions::repository::sales_by_office_country(db)
        .await?
        .into_iter()
        .map(|r| RegionRevenue {
            region: r.region,
            customers: r.customers,
            orders: r.orders,
            revenue: r.revenue,
        })
        .collect();

    let product_performance = products::repository::top_by_revenue(db, OVERVIEW_TOP)
        .await?
        .into_iter()
        .map(|r| ProductPerformance {
            product_name: r.product_name,
            product_line: r.product_line,
            times_sold: r.times_sold,
            total_quantity: r.total_quantity,
            total_revenue: r.total_revenue,
        })
        .collect();

    let employee_performance = employees::repository::performance(db, Some(OVERVIEW_TOP))
        .await?
        .into_iter()
        .map(|r| EmployeeRevenue {
            name: r.name,
            job_title: r.job_title,
            customers: r.customers_count,
            orders: r.orders_count,
            revenue: r.total_revenue,
        })
        .collect();

    Ok(DashboardOverview {
        total_employees,
        total_offices,
        avg_order_value,
        top_offices,
        region_sales,
        product_performance,
        employee_performance,
    })
}
