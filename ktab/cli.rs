use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ktab_table::{SortOrder, SortState};

/// ktab renders filtered and sorted Kubernetes resource list snapshots.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the resource list snapshot file (YAML).
    #[arg()]
    pub snapshot: PathBuf,

    /// Column filter in the form `column=value1,value2` (repeatable).
    #[arg(long = "filter", short = 'f')]
    pub filters: Vec<String>,

    /// Sort specification in the form `column` or `column:desc`.
    #[arg(long, short)]
    pub sort: Option<String>,

    /// Free-text search applied to rows before column filters.
    #[arg(long)]
    pub search: Option<String>,

    /// Page number to display (1-based).
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Number of rows per page (overrides the configured default).
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Column to hide (repeatable).
    #[arg(long = "hide")]
    pub hidden: Vec<String>,

    /// Print distinct filter values with occurrence counts instead of the table.
    #[arg(long)]
    pub facets: bool,
}

impl Args {
    /// Parses `--filter` switches into per-column accepted-value sets.
    pub fn column_filters(&self) -> Result<Vec<(String, HashSet<String>)>> {
        self.filters
            .iter()
            .map(|filter| {
                let (column, values) = filter
                    .split_once('=')
                    .with_context(|| format!("invalid filter '{filter}', expected column=value1,value2"))?;
                let values = values
                    .split(',')
                    .filter(|v| !v.is_empty())
                    .map(str::to_owned)
                    .collect::<HashSet<_>>();

                Ok((column.to_owned(), values))
            })
            .collect()
    }

    /// Parses the `--sort` switch, falling back to the configured default.
    pub fn sort_state(&self, default: SortState) -> Result<SortState> {
        let Some(sort) = self.sort.as_deref() else {
            return Ok(default);
        };

        match sort.split_once(':') {
            Some((column, order)) => {
                let order = order
                    .parse::<SortOrder>()
                    .map_err(|error| anyhow::anyhow!("invalid sort '{sort}': {error}"))?;
                Ok(SortState::new(column, order))
            },
            None => Ok(SortState::new(sort, SortOrder::Ascending)),
        }
    }
}
