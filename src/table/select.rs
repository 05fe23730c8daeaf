use std::fmt;

use super::FinTable;
use crate::core::FsError;

/// The metrics the summary report is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Revenue,
    OperatingProfit,
    NetIncome,
    OperatingMargin,
    /// Price/earnings ratio.
    Per,
    /// Price/book ratio.
    Pbr,
}

impl Metric {
    /// Every metric, in report order.
    pub const ALL: [Metric; 6] = [
        Metric::Revenue,
        Metric::OperatingProfit,
        Metric::NetIncome,
        Metric::OperatingMargin,
        Metric::Per,
        Metric::Pbr,
    ];

    /// Row label used by the portal.
    pub const fn label(self) -> &'static str {
        match self {
            Metric::Revenue => "매출액",
            Metric::OperatingProfit => "영업이익",
            Metric::NetIncome => "당기순이익",
            Metric::OperatingMargin => "영업이익률",
            Metric::Per => "PER(배)",
            Metric::Pbr => "PBR(배)",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Row labels of [`Metric::ALL`].
pub const DEFAULT_METRICS: [&str; 6] = [
    Metric::Revenue.label(),
    Metric::OperatingProfit.label(),
    Metric::NetIncome.label(),
    Metric::OperatingMargin.label(),
    Metric::Per.label(),
    Metric::Pbr.label(),
];

/// Projects `table` onto `metrics`, in the order given.
///
/// The result always has one row per requested metric: those absent from `table` get a
/// row of missing values. Columns are unchanged.
///
/// # Errors
///
/// Returns [`FsError::DuplicateMetric`] if `metrics` names the same metric twice, since the
/// result is keyed by metric name.
pub fn select<S: AsRef<str>>(table: &FinTable, metrics: &[S]) -> Result<FinTable, FsError> {
    let width = table.columns().len();
    let mut out = FinTable::new(table.index_name(), table.columns().to_vec());
    for metric in metrics {
        let metric = metric.as_ref();
        let values = table
            .get(metric)
            .map(<[_]>::to_vec)
            .unwrap_or_else(|| vec![None; width]);
        if !out.push_row(metric, values) {
            return Err(FsError::DuplicateMetric(metric.to_string()));
        }
    }
    Ok(out)
}
