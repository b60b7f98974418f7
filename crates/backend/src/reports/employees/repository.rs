use anyhow::Result;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};

#[derive(Debug, Clone, FromQueryResult)]
pub struct EmployeeSummaryRow {
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

/// Employees with office location and assigned-customer counts, first name
/// ascending. The office join is many-to-one, so counting customer rows
/// directly cannot fan out.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<EmployeeSummaryRow>> {
    let sql = r#"
        SELECT e.employeeNumber AS employee_number,
               e.firstName AS first_name,
               e.lastName AS last_name,
               e.jobTitle AS job_title,
               e.reportsTo AS reports_to,
               o.officeCode AS office_code,
               o.city AS city,
               o.country AS country,
               COUNT(c.customerNumber) AS customers_managed
        FROM employees e
        LEFT JOIN offices o ON o.officeCode = e.officeCode
        LEFT JOIN customers c ON c.salesRepEmployeeNumber = e.employeeNumber
        GROUP BY e.employeeNumber
        ORDER BY e.firstName
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let rows = EmployeeSummaryRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct EmployeePerformanceRow {
    pub employee_number: i64,
    pub name: String,
    pub job_title: String,
    pub customers_count: i64,
    pub orders_count: i64,
    pub total_revenue: f64,
}

/// Per-employee performance, revenue descending. Order counts and payment
/// totals are grouped per customer before being summed per employee — a
/// flat employees×customers×orders×payments join would count each payment
/// once per order.
pub async fn performance(
    db: &DatabaseConnection,
    limit: Option<u64>,
) -> Result<Vec<EmployeePerformanceRow>> {
    let mut sql = r#"
        SELECT e.employeeNumber AS employee_number,
               e.firstName || ' ' || e.lastName AS name,
               e.jobTitle AS job_title,
               COUNT(DISTINCT c.customerNumber) AS customers_count,
               COALESCE(SUM(oc.order_count), 0) AS orders_count,
               COALESCE(SUM(pay.total_payment), 0.0) AS total_revenue
        FROM employees e
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
        GROUP BY e.employeeNumber
        ORDER BY total_revenue DESC
    "#
    .to_string();

    let mut values: Vec<sea_orm::Value> = Vec::new();
    if let Some(limit) = limit {
        sql.push_str(" LIMIT ?");
        values.push((limit as i64).into());
    }

    let stmt = Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql.as_str(), values);
    let rows = EmployeePerformanceRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}
