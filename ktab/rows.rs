use std::cmp::Ordering;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use ktab_metrics::{CpuQuantity, MemoryQuantity};
use ktab_table::{CellValue, ColumnSpec};
use serde::Deserialize;

#[cfg(test)]
#[path = "./rows.tests.rs"]
mod rows_tests;

/// Resource summary already mapped from a backend list response.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ResourceRow {
    pub namespace: String,
    pub name: String,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub restarts: Option<u32>,

    #[serde(default)]
    pub cpu: Option<String>,

    #[serde(default)]
    pub memory: Option<String>,

    /// RFC 3339 creation timestamp; sorts correctly as text.
    #[serde(default)]
    pub created: Option<String>,
}

impl ResourceRow {
    /// Returns `true` if the free-text search pattern is found in the row
    /// name or namespace.
    pub fn contains(&self, pattern: &str) -> bool {
        self.name.contains(pattern) || self.namespace.contains(pattern)
    }
}

/// Snapshot of a resource list fetched from the backend.
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    pub kind: String,
    pub rows: Vec<ResourceRow>,
}

impl Snapshot {
    /// Reads a resource list snapshot from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let snapshot = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read snapshot file '{}'", path.display()))?;
        serde_yaml::from_str(&snapshot).with_context(|| format!("cannot parse snapshot file '{}'", path.display()))
    }
}

/// Declarative column table shared by all resource list pages.\
/// Quantity columns sort by parsed value, not by their display text.
pub fn column_specs() -> Vec<ColumnSpec<ResourceRow>> {
    vec![
        ColumnSpec::new("namespace", "NAMESPACE", |r: &ResourceRow| Some(r.namespace.clone().into())),
        ColumnSpec::new("name", "NAME", |r: &ResourceRow| Some(r.name.clone().into())).filterable(false),
        ColumnSpec::new("status", "STATUS", |r: &ResourceRow| r.status.clone().map(CellValue::from)),
        ColumnSpec::new("restarts", "RESTARTS", |r: &ResourceRow| r.restarts.map(CellValue::from))
            .filterable(false)
            .to_right(),
        ColumnSpec::new("cpu", "CPU", |r: &ResourceRow| r.cpu.clone().map(CellValue::from))
            .filterable(false)
            .to_right()
            .with_compare(|a, b| compare_cpu(a, b)),
        ColumnSpec::new("memory", "MEMORY", |r: &ResourceRow| r.memory.clone().map(CellValue::from))
            .filterable(false)
            .to_right()
            .with_compare(|a, b| compare_memory(a, b)),
        ColumnSpec::new("created", "CREATED", |r: &ResourceRow| r.created.clone().map(CellValue::from))
            .filterable(false),
    ]
}

fn compare_cpu(a: &ResourceRow, b: &ResourceRow) -> Ordering {
    parsed_cpu(a).cmp(&parsed_cpu(b))
}

fn compare_memory(a: &ResourceRow, b: &ResourceRow) -> Ordering {
    parsed_memory(a).cmp(&parsed_memory(b))
}

fn parsed_cpu(row: &ResourceRow) -> CpuQuantity {
    row.cpu
        .as_deref()
        .and_then(|value| CpuQuantity::from_str(value).ok())
        .unwrap_or_default()
}

fn parsed_memory(row: &ResourceRow) -> MemoryQuantity {
    row.memory
        .as_deref()
        .and_then(|value| MemoryQuantity::from_str(value).ok())
        .unwrap_or_default()
}
