use serde::{Deserialize, Serialize};

/// Product with its popularity within the recency window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub product_code: String,
    pub product_name: String,
    pub product_line: String,
    pub quantity_in_stock: i64,
    pub buy_price: f64,
    #[serde(rename = "MSRP")]
    pub msrp: f64,
    /// Distinct orders referencing the product within the cutoff window;
    /// 0 for products never ordered
    pub order_count: i64,
}

/// Product line with product count and total stock
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLineSummary {
    pub product_line: String,
    pub product_count: i64,
    pub total_stock: i64,
}

/// Per-line inventory valuation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAnalysis {
    pub product_line: String,
    pub product_count: i64,
    pub total_quantity: i64,
    pub avg_quantity: f64,
    /// Σ quantityInStock × buyPrice
    pub total_value: f64,
}

/// Product ranked by order-detail revenue (overview top-10 table)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPerformance {
    pub product_name: String,
    pub product_line: String,
    pub times_sold: i64,
    pub total_quantity: i64,
    pub total_revenue: f64,
}
