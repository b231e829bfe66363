//! Shared numeric helpers for the analyzers.
//!
//! Every helper has a defined value for empty input and for a zero
//! denominator, so analyzers never divide by zero.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::EmployeeRecord;

/// Rounds to `places` decimal places, ties to even.
///
/// Matches the banker's rounding `Decimal::round_dp` applies to amounts.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// `part / whole * 100`; 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Pearson correlation coefficient of two equally long series.
///
/// Returns 0 when there are fewer than two points, when the lengths differ,
/// or when either series has zero variance.
///
/// # Example
///
/// ```
/// use workforce_analytics::analysis::pearson;
///
/// assert!((pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]) - 1.0).abs() < 1e-12);
/// assert_eq!(pearson(&[1.0], &[5.0]), 0.0);
/// assert_eq!(pearson(&[1.0, 2.0], &[3.0, 3.0]), 0.0);
/// ```
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() < 2 || xs.len() != ys.len() {
        return 0.0;
    }

    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let (mut covariance, mut variance_x, mut variance_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    let denominator = (variance_x * variance_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    (covariance / denominator).clamp(-1.0, 1.0)
}

/// Median of a set of amounts; zero for an empty slice.
pub fn median_decimal(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let mut sorted = values.to_vec();
    sorted.sort();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / Decimal::from(2)
    } else {
        sorted[mid]
    }
}

/// Mean of a set of amounts; zero for an empty slice.
pub fn mean_decimal(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    values.iter().sum::<Decimal>() / Decimal::from(values.len())
}

/// Lossy conversion used when an amount enters a floating-point statistic.
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Groups employees by department name, keeping departments in order of first appearance.
pub fn group_by_department(employees: &[EmployeeRecord]) -> Vec<(&str, Vec<&EmployeeRecord>)> {
    group_by(employees, EmployeeRecord::department)
}

/// Groups employees by a string key, keeping keys in order of first appearance.
pub fn group_by<'a, F>(
    employees: &'a [EmployeeRecord],
    key: F,
) -> Vec<(&'a str, Vec<&'a EmployeeRecord>)>
where
    F: Fn(&'a EmployeeRecord) -> &'a str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&EmployeeRecord>)> = Vec::new();

    for employee in employees {
        let name = key(employee);
        match index.get(name) {
            Some(&position) => groups[position].1.push(employee),
            None => {
                index.insert(name, groups.len());
                groups.push((name, vec![employee]));
            }
        }
    }

    groups
}
