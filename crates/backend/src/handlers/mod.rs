//! HTTP handlers, one module per reporting area
//!
//! Handlers are stateless: parse the query string, run the aggregation,
//! map rows to `contracts` DTOs, wrap in `Json`. Failures propagate as
//! [`crate::shared::error::ApiError`].

use serde::Deserialize;

pub mod customers;
pub mod dashboard;
pub mod employees;
pub mod offices;
pub mod orders;
pub mod products;
pub mod regions;
pub mod revenue;

/// Optional `limit` query parameter, kept as a raw string so malformed
/// values degrade to the default instead of a 400.
#[derive(Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

/// Lenient `limit` parsing: missing, empty, or non-numeric values fall
/// back to the route's default. Never rejects.
pub(crate) fn parse_limit(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
