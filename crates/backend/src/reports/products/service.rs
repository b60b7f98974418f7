use anyhow::Result;
use sea_orm::DatabaseConnection;

use super::repository;
use super::repository::ProductSummaryRow;

/// Recency-windowed product popularity: `limit` selects a date cutoff by
/// counting back from the most recent order, then products are ranked by
/// distinct orders within that window. The `limit` is a window selector,
/// not a row cap — the listing itself stays capped at
/// [`repository::LISTING_CAP`].
pub async fn list(db: &DatabaseConnection, limit: u64) -> Result<Vec<ProductSummaryRow>> {
    let cutoff = repository::order_date_cutoff(db, limit).await?;
    repository::list_with_order_counts(db, &cutoff).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::testing::{exec, test_db};

    #[tokio::test]
    async fn limit_windows_the_popularity_count() {
        let db = test_db().await;
        exec(
            &db,
            "INSERT INTO productlines (productLine) VALUES ('Classic Cars')",
        )
        .await;
        exec(
            &db,
            "INSERT INTO products (productCode, productName, productLine, quantityInStock, buyPrice, MSRP)
             VALUES ('S10_1949', '1952 Alpine', 'Classic Cars', 73, 98.58, 214.30)",
        )
        .await;
        exec(
            &db,
            "INSERT INTO customers (customerNumber, customerName, city, country)
             VALUES (103, 'Atelier graphique', 'Nantes', 'France')",
        )
        .await;
        for (number, date) in [(10100, "2004-01-01"), (10101, "2004-06-01")] {
            exec(
                &db,
                &format!(
                    "INSERT INTO orders (orderNumber, orderDate, requiredDate, status, customerNumber)
                     VALUES ({number}, '{date}', '2004-12-01', 'Shipped', 103)"
                ),
            )
            .await;
            exec(
                &db,
                &format!(
                    "INSERT INTO orderdetails (orderNumber, productCode, quantityOrdered, priceEach)
                     VALUES ({number}, 'S10_1949', 1, 100.0)"
                ),
            )
            .await;
        }

        // Window of 1: only the June order is inside
        let rows = list(&db, 1).await.unwrap();
        assert_eq!(rows[0].order_count, 1);

        // Window of 2 reaches back to January
        let rows = list(&db, 2).await.unwrap();
        assert_eq!(rows[0].order_count, 2);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let db = test_db().await;
        let rows = list(&db, 10000).await.unwrap();
        assert!(rows.is_empty());
    }
}
