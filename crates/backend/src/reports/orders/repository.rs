use anyhow::Result;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};

/// Order joined with its customer; the total is recomputed per order with a
/// correlated aggregate so the customer join cannot fan out detail rows.
#[derive(Debug, Clone, FromQueryResult)]
pub struct RecentOrderRow {
    pub order_number: i64,
    pub order_date: String,
    pub required_date: String,
    pub shipped_date: Option<String>,
    pub status: String,
    pub comments: Option<String>,
    pub customer_name: String,
    pub total: f64,
}

/// The `limit` most recent orders, newest first. Orders without detail rows
/// come back with total 0.
pub async fn recent(db: &DatabaseConnection, limit: u64) -> Result<Vec<RecentOrderRow>> {
    let sql = r#"
        SELECT o.orderNumber AS order_number,
               o.orderDate AS order_date,
               o.requiredDate AS required_date,
               o.shippedDate AS shipped_date,
               o.status AS status,
               o.comments AS comments,
               c.customerName AS customer_name,
               COALESCE((
                   SELECT SUM(od.quantityOrdered * od.priceEach)
                   FROM orderdetails od
                   WHERE od.orderNumber = o.orderNumber
               ), 0.0) AS total
        FROM orders o
        JOIN customers c ON o.customerNumber = c.customerNumber
        ORDER BY o.orderDate DESC
        LIMIT ?
    "#;

    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        [(limit as i64).into()],
    );

    let rows = RecentOrderRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct OrderAnalyticsRow {
    pub total_orders: i64,
    pub shipped_orders: i64,
    pub pending_orders: i64,
    pub cancelled_orders: i64,
    pub avg_fulfillment_time: f64,
}

/// Status breakdown over the `limit` most recent orders. The fulfillment
/// average only sees orders with a shipped date; when none shipped it is 0.
pub async fn analytics(db: &DatabaseConnection, limit: u64) -> Result<OrderAnalyticsRow> {
    let sql = r#"
        SELECT COUNT(*) AS total_orders,
               COALESCE(SUM(CASE WHEN o.status = 'Shipped' THEN 1 ELSE 0 END), 0) AS shipped_orders,
               COALESCE(SUM(CASE WHEN o.status = 'Pending' THEN 1 ELSE 0 END), 0) AS pending_orders,
               COALESCE(SUM(CASE WHEN o.status = 'Cancelled' THEN 1 ELSE 0 END), 0) AS cancelled_orders,
               COALESCE(ROUND(AVG(CASE WHEN o.shippedDate IS NOT NULL
                   THEN julianday(o.shippedDate) - julianday(o.orderDate)
               END), 2), 0.0) AS avg_fulfillment_time
        FROM (SELECT * FROM orders ORDER BY orderDate DESC LIMIT ?) o
    "#;

    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        [(limit as i64).into()],
    );

    let row = OrderAnalyticsRow::find_by_statement(stmt)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("analytics query returned no row"))?;
    Ok(row)
}
