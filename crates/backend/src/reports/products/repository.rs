use anyhow::Result;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};

/// Fixed cap of the products listing.
pub const LISTING_CAP: u64 = 20;

/// Cutoff used when the orders table is empty: every order qualifies.
pub const EPOCH_CUTOFF: &str = "1900-01-01";

#[derive(Debug, FromQueryResult)]
struct OrderDateRow {
    order_date: String,
}

/// Date of the Nth most recent order. `limit` counts back from the newest
/// order; the returned date is the oldest of that window. With fewer than
/// `limit` orders the window covers them all.
pub async fn order_date_cutoff(db: &DatabaseConnection, limit: u64) -> Result<String> {
    let sql = r#"
        SELECT orderDate AS order_date
        FROM orders
        ORDER BY orderDate DESC
        LIMIT ?
    "#;

    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        [(limit as i64).into()],
    );

    let rows = OrderDateRow::find_by_statement(stmt).all(db).await?;
    Ok(rows
        .last()
        .map(|r| r.order_date.clone())
        .unwrap_or_else(|| EPOCH_CUTOFF.to_string()))
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct ProductSummaryRow {
    pub product_code: String,
    pub product_name: String,
    pub product_line: String,
    pub quantity_in_stock: i64,
    pub buy_price: f64,
    pub msrp: f64,
    pub order_count: i64,
}

/// Products ranked by distinct orders placed on/after the cutoff date.
/// The count references the date-filtered join side, so orders outside the
/// window contribute nothing; products never ordered stay listed with 0.
pub async fn list_with_order_counts(
    db: &DatabaseConnection,
    cutoff_date: &str,
) -> Result<Vec<ProductSummaryRow>> {
    let sql = r#"
        SELECT p.productCode AS product_code,
               p.productName AS product_name,
               p.productLine AS product_line,
               p.quantityInStock AS quantity_in_stock,
               p.buyPrice AS buy_price,
               p.MSRP AS msrp,
               COUNT(DISTINCT o.orderNumber) AS order_count
        FROM products p
        LEFT JOIN orderdetails od ON od.productCode = p.productCode
        LEFT JOIN orders o ON o.orderNumber = od.orderNumber AND o.orderDate >= ?
        GROUP BY p.productCode
        ORDER BY order_count DESC
        LIMIT ?
    "#;

    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        [cutoff_date.into(), (LISTING_CAP as i64).into()],
    );

    let rows = ProductSummaryRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct ProductLineRow {
    pub product_line: String,
    pub product_count: i64,
    pub total_stock: i64,
}

/// Product lines with product counts and stock totals. Lines with no
/// products stay listed with zeroes.
pub async fn product_lines(db: &DatabaseConnection) -> Result<Vec<ProductLineRow>> {
    let sql = r#"
        SELECT pl.productLine AS product_line,
               COUNT(p.productCode) AS product_count,
               COALESCE(SUM(p.quantityInStock), 0) AS total_stock
        FROM productlines pl
        LEFT JOIN products p ON p.productLine = pl.productLine
        GROUP BY pl.productLine
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let rows = ProductLineRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct InventoryAnalysisRow {
    pub product_line: String,
    pub product_count: i64,
    pub total_quantity: i64,
    pub avg_quantity: f64,
    pub total_value: f64,
}

/// Per-line inventory valuation, most valuable line first.
pub async fn inventory_analysis(db: &DatabaseConnection) -> Result<Vec<InventoryAnalysisRow>> {
    let sql = r#"
        SELECT p.productLine AS product_line,
               COUNT(p.productCode) AS product_count,
               SUM(p.quantityInStock) AS total_quantity,
               AVG(p.quantityInStock) AS avg_quantity,
               SUM(p.quantityInStock * p.buyPrice) AS total_value
        FROM products p
        GROUP BY p.productLine
        ORDER BY total_value DESC
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let rows = InventoryAnalysisRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct ProductPerformanceRow {
    pub product_name: String,
    pub product_line: String,
    pub times_sold: i64,
    pub total_quantity: i64,
    pub total_revenue: f64,
}

/// Products ranked by order-detail revenue (overview top-10 table).
pub async fn top_by_revenue(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<ProductPerformanceRow>> {
    let sql = r#"
        SELECT p.productName AS product_name,
               p.productLine AS product_line,
               COUNT(od.orderNumber) AS times_sold,
               COALESCE(SUM(od.quantityOrdered), 0) AS total_quantity,
               COALESCE(SUM(od.quantityOrdered * od.priceEach), 0.0) AS total_revenue
        FROM products p
        LEFT JOIN orderdetails od ON od.productCode = p.productCode
        GROUP BY p.productCode
        ORDER BY total_revenue DESC
        LIMIT ?
    "#;

    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        [(limit as i64).into()],
    );

    let rows = ProductPerformanceRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}
