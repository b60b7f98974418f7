use anyhow::Result;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};

/// Offices shown on the overview revenue board.
pub const TOP_CAP: u64 = 5;

#[derive(Debug, Clone, FromQueryResult)]
pub struct OfficeSummaryRow {
    pub office_code: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub phone: String,
    pub employee_count: i64,
    pub customer_count: i64,
}

/// Offices with employee and customer counts, ordered country then city.
/// Both counts are DISTINCT: the customers join multiplies employee rows,
/// so a plain COUNT(employeeNumber) would scale with customers.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<OfficeSummaryRow>> {
    let sql = r#"
        SELECT o.officeCode AS office_code,
               o.city AS city,
               o.country AS country,
               o.postalCode AS postal_code,
               o.phone AS phone,
               COUNT(DISTINCT e.employeeNumber) AS employee_count,
               COUNT(DISTINCT c.customerNumber) AS customer_count
        FROM offices o
        LEFT JOIN employees e ON e.officeCode = o.officeCode
        LEFT JOIN customers c ON c.salesRepEmployeeNumber = e.employeeNumber
        GROUP BY o.officeCode
        ORDER BY o.country, o.city
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let rows = OfficeSummaryRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct TopOfficeRow {
    pub city: String,
    pub country: String,
    pub customers: i64,
    pub revenue: f64,
}

/// Offices ranked by payment revenue attributed through their sales reps.
/// Payments are pre-grouped per customer; each customer belongs to exactly
/// one rep, so office totals cannot double.
pub async fn top_by_revenue(db: &DatabaseConnection, limit: u64) -> Result<Vec<TopOfficeRow>> {
    let sql = r#"
        SELECT o.city AS city,
               o.country AS country,
               COUNT(DISTINCT c.customerNumber) AS customers,
               COALESCE(SUM(pay.total_payment), 0.0) AS revenue
        FROM offices o
        LEFT JOIN employees e ON e.officeCode = o.officeCode
        LEFT JOIN customers c ON c.salesRepEmployeeNumber = e.employeeNumber
        LEFT JOIN (
            SELECT customerNumber, SUM(amount) AS total_payment
            FROM payments
            GROUP BY customerNumber
        ) pay ON pay.customerNumber = c.customerNumber
        GROUP BY o.officeCode
        ORDER BY revenue DESC
        LIMIT ?
    "#;

    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        [(limit as i64).into()],
    );

    let rows = TopOfficeRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}
