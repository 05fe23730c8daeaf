use super::{FinTable, RawTable, parse_tables};
use crate::core::FsError;

/// Header label of the column holding metric names.
pub const KEY_COLUMN: &str = "주요재무정보";

/// Position of the financial-summary block among the tables the data endpoint returns.
///
/// This is the endpoint's current markup, not something that can be checked locally;
/// earlier blocks are ignored.
pub const SUMMARY_TABLE_INDEX: usize = 1;

/// Parses a data-endpoint response and keys its summary table by [`KEY_COLUMN`].
///
/// # Errors
///
/// See [`normalize_with_key`].
pub fn normalize(raw_html: &str) -> Result<FinTable, FsError> {
    normalize_with_key(raw_html, KEY_COLUMN)
}

/// Like [`normalize`], keyed by the column labelled `key`.
///
/// # Errors
///
/// - [`FsError::TableCount`] if fewer than two tables are present.
/// - [`FsError::HeaderDepth`] if the summary header is deeper than two rows.
/// - [`FsError::MissingKeyColumn`] if no column is labelled `key`.
pub fn normalize_with_key(raw_html: &str, key: &str) -> Result<FinTable, FsError> {
    let tables = parse_tables(raw_html);
    let found = tables.len();
    let summary = tables
        .into_iter()
        .nth(SUMMARY_TABLE_INDEX)
        .ok_or(FsError::TableCount { found })?;
    normalize_table(&summary, key)
}

/// Flattens the header of one parsed table and keys its rows by the `key` column.
///
/// Precondition on the header: one level, or two levels where the outer one is decorative
/// (e.g. `연간` spanning the period columns) and is dropped. A table without header rows
/// has no labelled columns and therefore no key column.
///
/// Every body row yields one metric name (empty if its key cell is blank). When a name
/// repeats, the first row is kept.
///
/// # Errors
///
/// [`FsError::HeaderDepth`] or [`FsError::MissingKeyColumn`], as above.
pub fn normalize_table(raw: &RawTable, key: &str) -> Result<FinTable, FsError> {
    let labels = match raw.header.as_slice() {
        [] => return Err(FsError::MissingKeyColumn(key.to_string())),
        [single] => single,
        [_outer, inner] => inner,
        deeper => return Err(FsError::HeaderDepth { levels: deeper.len() }),
    };
    let labels: Vec<String> = labels
        .iter()
        .enumerate()
        .map(|(i, l)| l.clone().unwrap_or_else(|| format!("Unnamed: {i}")))
        .collect();

    let key_pos = labels
        .iter()
        .position(|l| l == key)
        .ok_or_else(|| FsError::MissingKeyColumn(key.to_string()))?;

    let columns = labels
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != key_pos)
        .map(|(_, l)| l.clone())
        .collect();
    let mut table = FinTable::new(key, columns);

    for row in &raw.body {
        let metric = row.get(key_pos).cloned().flatten().unwrap_or_default();
        let values = row
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != key_pos)
            .map(|(_, v)| v.clone())
            .collect();
        if table.contains(&metric) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%metric, "duplicate metric row skipped");
            continue;
        }
        table.push_row(metric, values);
    }

    Ok(table)
}
