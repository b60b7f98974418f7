use anyhow::Result;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};

/// Fixed page size of the default listing. Not a pagination contract.
pub const LISTING_CAP: u64 = 20;
/// Size of the top-spenders board.
pub const TOP_CAP: u64 = 10;

#[derive(Debug, Clone, FromQueryResult)]
pub struct CustomerSummaryRow {
    pub customer_number: i64,
    pub customer_name: String,
    pub city: String,
    pub country: String,
    pub order_count: i64,
    pub total_payment: f64,
}

/// Customers with order counts and payment totals, name ascending.
///
/// Orders and payments are aggregated in separate grouped subqueries and
/// only then joined back to the customer row. A flat
/// customers×orders×payments join would repeat every payment once per
/// order before summing.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<CustomerSummaryRow>> {
    let sql = r#"
        SELECT c.customerNumber AS customer_number,
               c.customerName AS customer_name,
               c.city AS city,
               c.country AS country,
               COALESCE(o.order_count, 0) AS order_count,
               COALESCE(p.total_payment, 0.0) AS total_payment
        FROM customers c
        LEFT JOIN (
            SELECT customerNumber, COUNT(*) AS order_count
            FROM orders
            GROUP BY customerNumber
        ) o ON o.customerNumber = c.customerNumber
        LEFT JOIN (
            SELECT customerNumber, SUM(amount) AS total_payment
            FROM payments
            GROUP BY customerNumber
        ) p ON p.customerNumber = c.customerNumber
        ORDER BY c.customerName
        LIMIT ?
    "#;

    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        [(LISTING_CAP as i64).into()],
    );

    let rows = CustomerSummaryRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct TopCustomerRow {
    pub customer_number: i64,
    pub customer_name: String,
    pub country: String,
    pub total_spent: f64,
}

/// Top spenders by lifetime payment total, descending.
pub async fn top_by_spend(db: &DatabaseConnection) -> Result<Vec<TopCustomerRow>> {
    let sql = r#"
        SELECT c.customerNumber AS customer_number,
               c.customerName AS customer_name,
               c.country AS country,
               COALESCE(p.total_payment, 0.0) AS total_spent
        FROM customers c
        LEFT JOIN (
            SELECT customerNumber, SUM(amount) AS total_payment
            FROM payments
            GROUP BY customerNumber
        ) p ON p.customerNumber = c.customerNumber
        ORDER BY total_spent DESC
        LIMIT ?
    "#;

    let stmt =
        Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql, [(TOP_CAP as i64).into()]);

    let rows = TopCustomerRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::testing::{exec, test_db};

    async fn seed_fanout_fixture(db: &DatabaseConnection) {
        // 3 customers; Atelier has 2 orders (details 2×10 and 1×5) and a
        // single 45.00 payment. The payment must not double through the
        // order join.
        for (number, name) in [
            (103, "Atelier graphique"),
            (112, "Signal Gift Stores"),
            (114, "Australian Collectors"),
        ] {
            exec(
                db,
                &format!(
                    "INSERT INTO customers (customerNumber, customerName, city, country)
                     VALUES ({number}, '{name}', 'Nantes', 'France')"
                ),
            )
            .await;
        }
        exec(
            db,
            "INSERT INTO productlines (productLine) VALUES ('Classic Cars')",
        )
        .await;
        exec(
            db,
            "INSERT INTO products (productCode, productName, productLine, quantityInStock, buyPrice, MSRP)
             VALUES ('S10_1678', '1969 Harley', 'Classic Cars', 10, 48.81, 95.70)",
        )
        .await;
        exec(
            db,
            "INSERT INTO orders (orderNumber, orderDate, requiredDate, status, customerNumber)
             VALUES (10100, '2004-01-01', '2004-01-10', 'Shipped', 103)",
        )
        .await;
        exec(
            db,
            "INSERT INTO orders (orderNumber, orderDate, requiredDate, status, customerNumber)
             VALUES (10101, '2004-01-02', '2004-01-11', 'Shipped', 103)",
        )
        .await;
        exec(
            db,
            "INSERT INTO orderdetails (orderNumber, productCode, quantityOrdered, priceEach)
             VALUES (10100, 'S10_1678', 2, 10.0)",
        )
        .await;
        exec(
            db,
            "INSERT INTO orderdetails (orderNumber, productCode, quantityOrdered, priceEach)
             VALUES (10101, 'S10_1678', 1, 5.0)",
        )
        .await;
        exec(
            db,
            "INSERT INTO payments (customerNumber, checkNumber, paymentDate, amount)
             VALUES (103, 'HQ336336', '2004-10-19', 45.0)",
        )
        .await;
    }

    #[tokio::test]
    async fn payment_totals_do_not_fan_out_with_orders() {
        let db = test_db().await;
        seed_fanout_fixture(&db).await;

        let rows = list(&db).await.unwrap();
        assert_eq!(rows.len(), 3);

        let atelier = rows
            .iter()
            .find(|r| r.customer_number == 103)
            .expect("customer 103 listed");
        assert_eq!(atelier.order_count, 2);
        // 45, not 90: one payment row, two orders
        assert_eq!(atelier.total_payment, 45.0);
    }

    #[tokio::test]
    async fn customers_without_activity_list_zeroes() {
        let db = test_db().await;
        seed_fanout_fixture(&db).await;

        let rows = list(&db).await.unwrap();
        let idle = rows
            .iter()
            .find(|r| r.customer_number == 112)
            .expect("customer 112 listed");
        assert_eq!(idle.order_count, 0);
        assert_eq!(idle.total_payment, 0.0);
    }

    #[tokio::test]
    async fn listing_is_name_ascending() {
        let db = test_db().await;
        seed_fanout_fixture(&db).await;

        let rows = list(&db).await.unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.customer_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Atelier graphique",
                "Australian Collectors",
                "Signal Gift Stores"
            ]
        );
    }

    #[tokio::test]
    async fn top_spenders_rank_by_payment_total() {
        let db = test_db().await;
        seed_fanout_fixture(&db).await;
        exec(
            &db,
            "INSERT INTO payments (customerNumber, checkNumber, paymentDate, amount)
             VALUES (114, 'GG31455', '2004-05-20', 120.5)",
        )
        .await;

        let rows = top_by_spend(&db).await.unwrap();
        assert_eq!(rows[0].customer_number, 114);
        assert_eq!(rows[0].total_spent, 120.5);
        assert_eq!(rows[1].customer_number, 103);
        assert_eq!(rows[1].total_spent, 45.0);
        assert_eq!(rows[2].total_spent, 0.0);
    }
}
