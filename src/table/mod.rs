//! Tabular model for the financial summary and the steps that shape it.
//!
//! - `parse`:     permissive HTML `<table>` reader producing [`RawTable`] grids
//! - `normalize`: picks the summary block, flattens its header and keys it by metric name
//! - `select`:    projects onto a fixed, ordered metric list
//! - `merge`:     joins the annual and quarterly views side by side

mod merge;
mod normalize;
mod parse;
mod select;

use std::collections::HashMap;

pub use merge::{ANNUAL_PREFIX, QUARTERLY_PREFIX, merge};
pub use normalize::{KEY_COLUMN, SUMMARY_TABLE_INDEX, normalize, normalize_table, normalize_with_key};
pub use parse::{RawTable, parse_tables};
pub use select::{DEFAULT_METRICS, Metric, select};

/// One metric's row: its name and one value per column (`None` = missing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub metric: String,
    pub values: Vec<Option<String>>,
}

/// A table keyed by metric name.
///
/// Rows keep insertion order, but metric names are unique and lookups should go through
/// [`FinTable::get`] rather than position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinTable {
    index_name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
    index: HashMap<String, usize>,
}

impl FinTable {
    /// An empty table with the given index label and column labels.
    pub fn new(index_name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            index_name: index_name.into(),
            columns,
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Appends a row, padding or truncating `values` to the column count.
    ///
    /// Returns `false` and leaves the table untouched if `metric` is already present.
    pub fn push_row(&mut self, metric: impl Into<String>, mut values: Vec<Option<String>>) -> bool {
        let metric = metric.into();
        if self.index.contains_key(&metric) {
            return false;
        }
        values.resize(self.columns.len(), None);
        self.index.insert(metric.clone(), self.rows.len());
        self.rows.push(Row { metric, values });
        true
    }

    /// Label of the key column (written as the first CSV header cell).
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Metric names in row order.
    pub fn metrics(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.metric.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, metric: &str) -> bool {
        self.index.contains_key(metric)
    }

    /// All values of `metric`, aligned with [`FinTable::columns`].
    pub fn get(&self, metric: &str) -> Option<&[Option<String>]> {
        self.index
            .get(metric)
            .map(|&i| self.rows[i].values.as_slice())
    }

    /// A single cell; `None` when the row, the column or the value is missing.
    pub fn value(&self, metric: &str, column: &str) -> Option<&str> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.get(metric)?.get(col)?.as_deref()
    }
}
