use super::FinTable;

/// Column prefix for the annual view.
pub const ANNUAL_PREFIX: &str = "Y_";
/// Column prefix for the quarterly view.
pub const QUARTERLY_PREFIX: &str = "Q_";

/// Places the annual and quarterly tables side by side, aligned on metric name.
///
/// Annual columns (prefixed [`ANNUAL_PREFIX`]) come first, then quarterly ones (prefixed
/// [`QUARTERLY_PREFIX`]). Rows follow the annual table, followed by any metric only the
/// quarterly table has; a side that lacks a metric contributes missing values.
pub fn merge(annual: &FinTable, quarterly: &FinTable) -> FinTable {
    let columns = annual
        .columns()
        .iter()
        .map(|c| format!("{ANNUAL_PREFIX}{c}"))
        .chain(
            quarterly
                .columns()
                .iter()
                .map(|c| format!("{QUARTERLY_PREFIX}{c}")),
        )
        .collect();

    let index_name = if annual.index_name() == quarterly.index_name() {
        annual.index_name()
    } else {
        ""
    };
    let mut merged = FinTable::new(index_name, columns);

    let metrics = annual
        .metrics()
        .chain(quarterly.metrics().filter(|m| !annual.contains(m)));
    for metric in metrics {
        let mut values = side(annual, metric);
        values.extend(side(quarterly, metric));
        merged.push_row(metric, values);
    }
    merged
}

fn side(table: &FinTable, metric: &str) -> Vec<Option<String>> {
    table
        .get(metric)
        .map(<[_]>::to_vec)
        .unwrap_or_else(|| vec![None; table.columns().len()])
}
