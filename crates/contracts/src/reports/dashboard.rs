use serde::{Deserialize, Serialize};

use crate::reports::products::ProductPerformance;

/// Headline counters for the dashboard cards
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_customers: i64,
    pub total_orders: i64,
    /// Sum of all payment amounts; 0 when the payments table is empty
    pub total_revenue: f64,
    pub total_products: i64,
}

/// Composite payload for the overview page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub total_employees: i64,
    pub total_offices: i64,
    /// Mean of per-order totals, rounded to 2 places
    pub avg_order_value: f64,
    pub top_offices: Vec<TopOffice>,
    pub region_sales: Vec<RegionRevenue>,
    pub product_performance: Vec<ProductPerformance>,
    pub employee_performance: Vec<EmployeeRevenue>,
}

/// Office ranked by payment revenue attributed through its sales reps
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopOffice {
    pub city: String,
    pub country: String,
    pub customers: i64,
    pub revenue: f64,
}

/// Per-country sales rooted at offices (the overview's join path)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRevenue {
    pub region: String,
    pub customers: i64,
    pub orders: i64,
    pub revenue: f64,
}

/// Employee ranked by revenue for the overview table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRevenue {
    pub name: String,
    pub job_title: String,
    pub customers: i64,
    pub orders: i64,
    pub revenue: f64,
}
