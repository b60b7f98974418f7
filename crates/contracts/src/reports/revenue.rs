use serde::{Deserialize, Serialize};

/// Payment revenue for one calendar date
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    /// "YYYY-MM-DD"
    pub date: String,
    pub revenue: f64,
}

/// Payment revenue for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    /// "YYYY-MM"
    pub month: String,
    pub revenue: f64,
}
