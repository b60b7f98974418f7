use serde::{Deserialize, Serialize};

/// Per-country sales rooted at customers (`/api/sales/by-region`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSales {
    pub country: String,
    pub customers: i64,
    pub orders: i64,
    pub revenue: f64,
}
