use std::str::FromStr;

use crate::{CpuQuantity, MemoryQuantity};

#[cfg(test)]
#[path = "./usage.tests.rs"]
mod usage_tests;

/// Percentage of `used` against the `hard` limit.\
/// Returns `None` when the limit is zero, a gauge cannot be drawn for it.
pub fn usage_percent(used: i64, hard: i64) -> Option<f64> {
    if hard == 0 {
        return None;
    }

    // multiply before dividing so round ratios come out exact
    Some(used as f64 * 100.0 / hard as f64)
}

/// One resource-quota line: a used / hard pair of raw quantity strings with
/// the derived usage percentage.
#[derive(Clone, Debug, PartialEq)]
pub struct QuotaUsage {
    pub resource: String,
    pub used: String,
    pub hard: String,
    pub percent: Option<f64>,
}

impl QuotaUsage {
    /// Builds usage for a quota resource, picking cpu, memory or plain count
    /// parsing by the resource name.\
    /// Unparseable quantities yield no percentage, never an error.
    pub fn new(resource: &str, used: &str, hard: &str) -> Self {
        Self {
            resource: resource.to_owned(),
            used: used.to_owned(),
            hard: hard.to_owned(),
            percent: parse_pair(resource, used, hard).and_then(|(used, hard)| usage_percent(used, hard)),
        }
    }
}

/// Parses both sides of a quota line into comparable base units.
fn parse_pair(resource: &str, used: &str, hard: &str) -> Option<(i64, i64)> {
    if resource.contains("cpu") {
        let used = CpuQuantity::from_str(used).ok()?;
        let hard = CpuQuantity::from_str(hard).ok()?;
        Some((used.value, hard.value))
    } else if resource.contains("memory") || resource.contains("storage") {
        let used = MemoryQuantity::from_str(used).ok()?;
        let hard = MemoryQuantity::from_str(hard).ok()?;
        Some((used.value, hard.value))
    } else {
        Some((used.parse().ok()?, hard.parse().ok()?))
    }
}
