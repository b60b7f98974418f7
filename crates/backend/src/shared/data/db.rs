use once_cell::sync::OnceCell;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// classicmodels schema. Every statement is idempotent so startup against
/// an existing database is a no-op.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS productlines (
        productLine TEXT PRIMARY KEY NOT NULL,
        textDescription TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        productCode TEXT PRIMARY KEY NOT NULL,
        productName TEXT NOT NULL,
        productLine TEXT NOT NULL REFERENCES productlines(productLine),
        productScale TEXT,
        productVendor TEXT,
        productDescription TEXT,
        quantityInStock INTEGER NOT NULL DEFAULT 0 CHECK (quantityInStock >= 0),
        buyPrice REAL NOT NULL,
        MSRP REAL NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS offices (
        officeCode TEXT PRIMARY KEY NOT NULL,
        city TEXT NOT NULL,
        phone TEXT NOT NULL,
        addressLine1 TEXT,
        addressLine2 TEXT,
        state TEXT,
        country TEXT NOT NULL,
        postalCode TEXT NOT NULL,
        territory TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        employeeNumber INTEGER PRIMARY KEY NOT NULL,
        lastName TEXT NOT NULL,
        firstName TEXT NOT NULL,
        extension TEXT,
        email TEXT,
        officeCode TEXT REFERENCES offices(officeCode),
        reportsTo INTEGER REFERENCES employees(employeeNumber),
        jobTitle TEXT NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        customerNumber INTEGER PRIMARY KEY NOT NULL,
        customerName TEXT NOT NULL,
        contactLastName TEXT,
        contactFirstName TEXT,
        phone TEXT,
        addressLine1 TEXT,
        addressLine2 TEXT,
        city TEXT NOT NULL,
        state TEXT,
        postalCode TEXT,
        country TEXT NOT NULL,
        salesRepEmployeeNumber INTEGER REFERENCES employees(employeeNumber),
        creditLimit REAL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        orderNumber INTEGER PRIMARY KEY NOT NULL,
        orderDate TEXT NOT NULL,
        requiredDate TEXT NOT NULL,
        shippedDate TEXT,
        status TEXT NOT NULL,
        comments TEXT,
        customerNumber INTEGER NOT NULL REFERENCES customers(customerNumber)
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orderdetails (
        orderNumber INTEGER NOT NULL REFERENCES orders(orderNumber),
        productCode TEXT NOT NULL REFERENCES products(productCode),
        quantityOrdered INTEGER NOT NULL,
        priceEach REAL NOT NULL,
        orderLineNumber INTEGER,
        PRIMARY KEY (orderNumber, productCode)
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS payments (
        customerNumber INTEGER NOT NULL REFERENCES customers(customerNumber),
        checkNumber TEXT NOT NULL,
        paymentDate TEXT NOT NULL,
        amount REAL NOT NULL,
        PRIMARY KEY (customerNumber, checkNumber)
    );
    "#,
];

pub async fn initialize_database(db_path: &str, max_connections: u32) -> anyhow::Result<()> {
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_path).is_absolute() {
        std::path::PathBuf::from(db_path)
    } else {
        std::env::current_dir()?.join(db_path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    let mut options = ConnectOptions::new(db_url);
    options.max_connections(max_connections);
    let conn = Database::connect(options).await?;

    ensure_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for ddl in SCHEMA {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            (*ddl).to_string(),
        ))
        .await?;
    }
    Ok(())
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Fresh in-memory database with the full schema. A single pooled
    /// connection keeps the same memory database alive for the test.
    pub async fn test_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:".to_string());
        options.max_connections(1);
        let conn = Database::connect(options).await.expect("in-memory sqlite");
        ensure_schema(&conn).await.expect("schema bootstrap");
        conn
    }

    pub async fn exec(db: &DatabaseConnection, sql: &str) {
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await
        .expect("fixture statement");
    }
}
