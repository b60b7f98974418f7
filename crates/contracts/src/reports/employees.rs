use serde::{Deserialize, Serialize};

/// Employee with office location and assigned-customer count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub employee_number: i64,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub reports_to: Option<i64>,
    pub office_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub customers_managed: i64,
}

/// Sales-rep performance: customers, orders, and attributed payment revenue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePerformance {
    pub employee_number: i64,
    pub name: String,
    pub job_title: String,
    pub customers_count: i64,
    pub orders_count: i64,
    /// Each payment counted once, however many orders its customer placed
    pub total_revenue: f64,
}
