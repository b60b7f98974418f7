use serde::{Deserialize, Serialize};

/// Office with employee and customer counts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeSummary {
    pub office_code: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub phone: String,
    pub employee_count: i64,
    /// Distinct customers whose sales rep works at this office
    pub customer_count: i64,
}
