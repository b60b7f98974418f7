use serde::{Deserialize, Serialize};

/// Order row with its customer and recomputed monetary total
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub order_number: i64,
    /// "YYYY-MM-DD"
    pub order_date: String,
    pub required_date: String,
    /// Null until the order ships
    pub shipped_date: Option<String>,
    pub status: String,
    pub comments: Option<String>,
    pub customer_name: String,
    /// Σ quantityOrdered × priceEach over the order's detail rows; 0 when none
    pub total: f64,
}

/// Status breakdown and fulfillment speed over the most recent orders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAnalytics {
    pub total_orders: i64,
    pub shipped_orders: i64,
    pub pending_orders: i64,
    pub cancelled_orders: i64,
    /// Mean days from order to shipment over shipped orders only;
    /// 0 when no order in scope has a shipped date
    pub avg_fulfillment_time: f64,
}
