use serde::{Deserialize, Serialize};

/// Customer with order count and lifetime payment total
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub customer_number: i64,
    pub customer_name: String,
    pub city: String,
    pub country: String,
    /// Distinct orders placed by the customer
    pub order_count: i64,
    /// Sum of the customer's payment rows, independent of order count
    pub total_payment: f64,
}

/// Customer ranked by lifetime spend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomer {
    pub customer_number: i64,
    pub customer_name: String,
    pub country: String,
    pub total_spent: f64,
}
