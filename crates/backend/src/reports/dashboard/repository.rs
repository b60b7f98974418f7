use anyhow::Result;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

async fn scalar_count(db: &DatabaseConnection, sql: &str) -> Result<i64> {
    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let row = CountRow::find_by_statement(stmt)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("count query returned no row"))?;
    Ok(row.count)
}

pub async fn count_customers(db: &DatabaseConnection) -> Result<i64> {
    scalar_count(db, "SELECT COUNT(*) AS count FROM customers").await
}

pub async fn count_orders(db: &DatabaseConnection) -> Result<i64> {
    scalar_count(db, "SELECT COUNT(*) AS count FROM orders").await
}

pub async fn count_products(db: &DatabaseConnection) -> Result<i64> {
    scalar_count(db, "SELECT COUNT(*) AS count FROM products").await
}

pub async fn count_employees(db: &DatabaseConnection) -> Result<i64> {
    scalar_count(db, "SELECT COUNT(*) AS count FROM employees").await
}

pub async fn count_offices(db: &DatabaseConnection) -> Result<i64> {
    scalar_count(db, "SELECT COUNT(*) AS count FROM offices").await
}

#[derive(Debug, FromQueryResult)]
struct TotalRow {
    total: f64,
}

/// Sum of all payment amounts; 0 on an empty payments table.
pub async fn total_payment_revenue(db: &DatabaseConnection) -> Result<f64> {
    let sql = "SELECT COALESCE(SUM(amount), 0.0) AS total FROM payments";
    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let row = TotalRow::find_by_statement(stmt)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("revenue query returned no row"))?;
    Ok(row.total)
}

#[derive(Debug, FromQueryResult)]
struct AvgRow {
    avg_value: f64,
}

/// Mean of per-order totals, rounded to 2 places. The totals come from an
/// aggregated subquery — averaging flat orderdetail rows would weight
/// orders by their line count. Orders without details enter the mean as 0.
pub async fn average_order_value(db: &DatabaseConnection) -> Result<f64> {
    let sql = r#"
        SELECT COALESCE(ROUND(AVG(COALESCE(order_totals.total, 0.0)), 2), 0.0) AS avg_value
        FROM (
            SELECT o.orderNumber,
                   SUM(od.quantityOrdered * od.priceEach) AS total
            FROM orders o
            LEFT JOIN orderdetails od ON od.orderNumber = o.orderNumber
            GROUP BY o.orderNumber
        ) AS order_totals
    "#;
    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let row = AvgRow::find_by_statement(stmt)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("average query returned no row"))?;
    Ok(row.avg_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::testing::{exec, test_db};

    #[tokio::test]
    async fn counts_and_revenue_are_zero_on_empty_store() {
        let db = test_db().await;
        assert_eq!(count_customers(&db).await.unwrap(), 0);
        assert_eq!(count_orders(&db).await.unwrap(), 0);
        assert_eq!(count_products(&db).await.unwrap(), 0);
        assert_eq!(count_employees(&db).await.unwrap(), 0);
        assert_eq!(count_offices(&db).await.unwrap(), 0);
        // 0, never null or NaN, with no payment rows at all
        assert_eq!(total_payment_revenue(&db).await.unwrap(), 0.0);
        assert_eq!(average_order_value(&db).await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn average_order_value_is_mean_of_per_order_totals() {
        let db = test_db().await;
        exec(
            &db,
            "INSERT INTO customers (customerNumber, customerName, city, country)
             VALUES (103, 'Atelier graphique', 'Nantes', 'France')",
        )
        .await;
        exec(
            &db,
            "INSERT INTO productlines (productLine) VALUES ('Classic Cars')",
        )
        .await;
        exec(
            &db,
            "INSERT INTO products (productCode, productName, productLine, quantityInStock, buyPrice, MSRP)
             VALUES ('S10_1949', '1952 Alpine', 'Classic Cars', 73, 98.58, 214.30),
                    ('S10_1678', '1969 Harley', 'Classic Cars', 68, 48.81, 95.70)",
        )
        .await;
        // Order 10100: two lines totalling 100; order 10101: one line of 50;
        // order 10102: no lines, counts as 0
        exec(
            &db,
            "INSERT INTO orders (orderNumber, orderDate, requiredDate, status, customerNumber) VALUES
             (10100, '2004-01-01', '2004-02-01', 'Shipped', 103),
             (10101, '2004-01-02', '2004-02-01', 'Shipped', 103),
             (10102, '2004-01-03', '2004-02-01', 'Pending', 103)",
        )
        .await;
        exec(
            &db,
            "INSERT INTO orderdetails (orderNumber, productCode, quantityOrdered, priceEach, orderLineNumber) VALUES
             (10100, 'S10_1949', 4, 20.0, 1),
             (10101, 'S10_1949', 1, 50.0, 1)",
        )
        .await;
        exec(
            &db,
            "INSERT INTO orderdetails (orderNumber, productCode, quantityOrdered, priceEach, orderLineNumber)
             VALUES (10100, 'S10_1678', 2, 10.0, 2)",
        )
        .await;

        // (100 + 50 + 0) / 3
        assert_eq!(average_order_value(&db).await.unwrap(), 50.0);
    }

    #[tokio::test]
    async fn revenue_sums_every_payment_row() {
        let db = test_db().await;
        exec(
            &db,
            "INSERT INTO customers (customerNumber, customerName, city, country)
             VALUES (103, 'Atelier graphique', 'Nantes', 'France')",
        )
        .await;
        exec(
            &db,
            "INSERT INTO payments (customerNumber, checkNumber, paymentDate, amount) VALUES
             (103, 'A', '2004-10-19', 10.5), (103, 'B', '2004-11-19', 4.5)",
        )
        .await;

        assert_eq!(total_payment_revenue(&db).await.unwrap(), 15.0);
    }
}
