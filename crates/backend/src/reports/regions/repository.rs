use anyhow::Result;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};

#[derive(Debug, Clone, FromQueryResult)]
pub struct RegionSalesRow {
    pub country: String,
    pub customers: i64,
    pub orders: i64,
    pub revenue: f64,
}

/// Per-country sales rooted at the customer's own country
/// (`/api/sales/by-region`). Orders and payments are pre-grouped per
/// customer before being summed per country.
pub async fn sales_by_country(db: &DatabaseConnection) -> Result<Vec<RegionSalesRow>> {
    let sql = r#"
        SELECT c.country AS country,
               COUNT(DISTINCT c.customerNumber) AS customers,
               COALESCE(SUM(oc.order_count), 0) AS orders,
               COALESCE(SUM(pay.total_payment), 0.0) AS revenue
        FROM customers c
        LEFT JOIN (
            SELECT customerNumber, COUNT(*) AS order_count
            FROM orders
            GROUP BY customerNumber
        ) oc ON oc.customerNumber = c.customerNumber
        LEFT JOIN (
            SELECT customerNumber, SUM(amount) AS total_payment
            FROM payments
            GROUP BY customerNumber
        ) pay ON pay.customerNumber = c.customerNumber
        GROUP BY c.country
        ORDER BY revenue DESC
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let rows = RegionSalesRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct OfficeRegionRow {
    pub region: String,
    pub customers: i64,
    pub orders: i64,
    pub revenue: f64,
}

/// Per-country sales rooted at offices: customers reach a country through
/// their sales rep's office (the overview's join path). Agrees with
/// [`sales_by_country`] whenever every rep's office shares its customers'
/// country; customers served from abroad land under the office's country
/// here and under their own in the customer-rooted path.
pub async fn sales_by_office_country(db: &DatabaseConnection) -> Result<Vec<OfficeRegionRow>> {
    let sql = r#"
        SELECT o.country AS region,
               COUNT(DISTINCT c.customerNumber) AS customers,
               COALESCE(SUM(oc.order_count), 0) AS orders,
               COALESCE(SUM(pay.total_payment), 0.0) AS revenue
        FROM offices o
        LEFT JOIN employees e ON e.officeCode = o.officeCode
        LEFT JOIN customers c ON c.salesRepEmployeeNumber = e.employeeNumber
        LEFT JOIN (
            SELECT customerNumber, COUNT(*) AS order_count
            FROM orders
            GROUP BY customerNumber
        ) oc ON oc.customerNumber = c.customerNumber
        LEFT JOIN (
            SELECT customerNumber, SUM(amount) AS total_payment
            FROM payments
            GROUP BY customerNumber
        ) pay ON pay.customerNumber = c.customerNumber
        GROUP BY o.country
        ORDER BY revenue DESC
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let rows = OfficeRegionRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}
