//! Display statistics derived client-side from already-fetched rows
//!
//! These run over arrays the API has returned; they never re-query. Any
//! client rendering the dashboard must produce exactly these numbers, so
//! the math lives here rather than in each UI.

use std::collections::HashMap;

use chrono::NaiveDate;

/// First `n` items by `key`, descending. The sort is stable, so ties keep
/// their original order.
pub fn top_n<T: Clone>(items: &[T], n: usize, key: impl Fn(&T) -> f64) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        key(b)
            .partial_cmp(&key(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// `count / total × 100`; 0 when the total is 0. Rounding is left to the
/// display layer.
pub fn percentage_of_total(count: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        count / total * 100.0
    }
}

/// Revenue per order for the dashboard card, with the denominator
/// substituted by 1 when there are no orders.
pub fn average_order_value(total_revenue: f64, total_orders: i64) -> f64 {
    let denominator = if total_orders == 0 { 1 } else { total_orders };
    total_revenue / denominator as f64
}

/// Stock classification; derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Low,
    Medium,
    High,
}

pub fn stock_level(quantity_in_stock: i64) -> StockLevel {
    if quantity_in_stock <= 50 {
        StockLevel::Low
    } else if quantity_in_stock <= 100 {
        StockLevel::Medium
    } else {
        StockLevel::High
    }
}

/// MSRP band used by the price-distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBand {
    Budget,
    Mid,
    Premium,
}

pub fn price_band(msrp: f64) -> PriceBand {
    if msrp < 50.0 {
        PriceBand::Budget
    } else if msrp <= 100.0 {
        PriceBand::Mid
    } else {
        PriceBand::Premium
    }
}

/// Count items per string key (country and product-line distributions).
pub fn group_count<T>(items: &[T], key: impl Fn(&T) -> String) -> HashMap<String, usize> {
    let mut groups: HashMap<String, usize> = HashMap::new();
    for item in items {
        *groups.entry(key(item)).or_insert(0) += 1;
    }
    groups
}

/// Min/max/avg/total/count of a numeric field. Everything is 0 for an
/// empty slice. avg and total are rounded to 2 places like the client's
/// stat cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub total: f64,
    pub count: usize,
}

pub fn calculate_stats<T>(items: &[T], value: impl Fn(&T) -> f64) -> FieldStats {
    if items.is_empty() {
        return FieldStats {
            min: 0.0,
            max: 0.0,
            avg: 0.0,
            total: 0.0,
            count: 0,
        };
    }

    let values: Vec<f64> = items.iter().map(value).collect();
    let total: f64 = values.iter().sum();
    let avg = total / values.len() as f64;
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    FieldStats {
        min,
        max,
        avg: round2(avg),
        total: round2(total),
        count: values.len(),
    }
}

/// Calendar bucket for [`aggregate_by_period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Month,
}

/// Sum a value per calendar day or month. Keys are "YYYY-MM-DD" or
/// "YYYY-MM"; items whose date does not parse are skipped. The result is
/// ordered chronologically (ISO keys sort lexicographically).
pub fn aggregate_by_period<T>(
    items: &[T],
    date: impl Fn(&T) -> &str,
    value: impl Fn(&T) -> f64,
    period: Period,
) -> Vec<(String, f64)> {
    let mut buckets: std::collections::BTreeMap<String, f64> = std::collections::BTreeMap::new();
    for item in items {
        let Ok(parsed) = NaiveDate::parse_from_str(date(item), "%Y-%m-%d") else {
            continue;
        };
        let key = match period {
            Period::Day => parsed.format("%Y-%m-%d").to_string(),
            Period::Month => parsed.format("%Y-%m").to_string(),
        };
        *buckets.entry(key).or_insert(0.0) += value(item);
    }
    buckets.into_iter().collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_n_sorts_descending_and_truncates() {
        let items = vec![("a", 1.0), ("b", 5.0), ("c", 3.0), ("d", 4.0)];
        let top = top_n(&items, 2, |(_, v)| *v);
        assert_eq!(top, vec![("b", 5.0), ("d", 4.0)]);
    }

    #[test]
    fn top_n_keeps_original_order_on_ties() {
        let items = vec![("first", 2.0), ("second", 2.0), ("third", 2.0)];
        let top = top_n(&items, 2, |(_, v)| *v);
        assert_eq!(top, vec![("first", 2.0), ("second", 2.0)]);
    }

    #[test]
    fn top_n_with_n_larger_than_input() {
        let items = vec![("only", 1.0)];
        assert_eq!(top_n(&items, 10, |(_, v)| *v).len(), 1);
    }

    #[test]
    fn percentage_guards_zero_total() {
        assert_eq!(percentage_of_total(5.0, 0.0), 0.0);
        assert_eq!(percentage_of_total(25.0, 100.0), 25.0);
        assert_eq!(percentage_of_total(1.0, 3.0), 100.0 / 3.0);
    }

    #[test]
    fn average_order_value_substitutes_denominator() {
        assert_eq!(average_order_value(0.0, 0), 0.0);
        assert_eq!(average_order_value(150.0, 0), 150.0);
        assert_eq!(average_order_value(150.0, 3), 50.0);
    }

    #[test]
    fn stock_level_thresholds() {
        assert_eq!(stock_level(0), StockLevel::Low);
        assert_eq!(stock_level(50), StockLevel::Low);
        assert_eq!(stock_level(51), StockLevel::Medium);
        assert_eq!(stock_level(100), StockLevel::Medium);
        assert_eq!(stock_level(101), StockLevel::High);
    }

    #[test]
    fn price_band_thresholds() {
        assert_eq!(price_band(49.99), PriceBand::Budget);
        assert_eq!(price_band(50.0), PriceBand::Mid);
        assert_eq!(price_band(100.0), PriceBand::Mid);
        assert_eq!(price_band(100.01), PriceBand::Premium);
    }

    #[test]
    fn group_count_builds_distribution() {
        let rows = vec!["USA", "France", "USA", "USA"];
        let counts = group_count(&rows, |c| c.to_string());
        assert_eq!(counts["USA"], 3);
        assert_eq!(counts["France"], 1);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn calculate_stats_empty_is_all_zero() {
        let stats = calculate_stats::<f64>(&[], |v| *v);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.total, 0.0);
        assert_eq!(stats.avg, 0.0);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.0);
    }

    #[test]
    fn calculate_stats_rounds_to_cents() {
        let values = vec![1.0, 2.0, 2.5];
        let stats = calculate_stats(&values, |v| *v);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 2.5);
        assert_eq!(stats.total, 5.5);
        assert_eq!(stats.avg, 1.83);
    }

    #[test]
    fn aggregate_by_month_sums_chronologically() {
        let payments = vec![
            ("2004-11-15", 100.0),
            ("2004-10-01", 40.0),
            ("2004-11-02", 50.0),
            ("not-a-date", 999.0),
        ];
        let monthly = aggregate_by_period(&payments, |(d, _)| d, |(_, v)| *v, Period::Month);
        assert_eq!(
            monthly,
            vec![
                ("2004-10".to_string(), 40.0),
                ("2004-11".to_string(), 150.0),
            ]
        );
    }

    #[test]
    fn aggregate_by_day_keeps_distinct_dates() {
        let payments = vec![("2004-11-02", 10.0), ("2004-11-03", 20.0)];
        let daily = aggregate_by_period(&payments, |(d, _)| d, |(_, v)| *v, Period::Day);
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0], ("2004-11-02".to_string(), 10.0));
    }
}
