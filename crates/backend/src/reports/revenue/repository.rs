use anyhow::Result;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};

/// Months shown on the monthly revenue chart.
pub const MONTHLY_CAP: u64 = 12;

#[derive(Debug, Clone, FromQueryResult)]
pub struct DailyRevenueRow {
    pub date: String,
    pub revenue: f64,
}

/// Payment revenue per calendar date, most recent `limit` dates first.
/// Callers wanting chronological order reverse the result
/// (see [`super::service::daily_ascending`]).
pub async fn daily(db: &DatabaseConnection, limit: u64) -> Result<Vec<DailyRevenueRow>> {
    let sql = r#"
        SELECT date(p.paymentDate) AS date,
               SUM(p.amount) AS revenue
        FROM payments p
        GROUP BY date(p.paymentDate)
        ORDER BY date(p.paymentDate) DESC
        LIMIT ?
    "#;

    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        [(limit as i64).into()],
    );

    let rows = DailyRevenueRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct MonthlyRevenueRow {
    pub month: String,
    pub revenue: f64,
}

/// Payment revenue per calendar month, newest month first.
pub async fn monthly(db: &DatabaseConnection) -> Result<Vec<MonthlyRevenueRow>> {
    let sql = r#"
        SELECT strftime('%Y-%m', p.paymentDate) AS month,
               SUM(p.amount) AS revenue
        FROM payments p
        GROUP BY strftime('%Y-%m', p.paymentDate)
        ORDER BY month DESC
        LIMIT ?
    "#;

    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        [(MONTHLY_CAP as i64).into()],
    );

    let rows = MonthlyRevenueRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}
