use fin_summary::FsError;
use fin_summary::table::{DEFAULT_METRICS, FinTable, Metric, normalize, select};

use crate::common::fixture;

fn table(columns: &[&str], rows: &[(&str, &[Option<&str>])]) -> FinTable {
    let mut t = FinTable::new("주요재무정보", columns.iter().map(|c| c.to_string()).collect());
    for (metric, values) in rows {
        t.push_row(*metric, values.iter().map(|v| v.map(str::to_string)).collect());
    }
    t
}

#[test]
fn output_follows_requested_order_with_empty_rows_for_missing() {
    let source = table(&["2023"], &[("B", &[Some("2")]), ("A", &[Some("1")])]);
    let out = select(&source, &["A", "B", "C"]).unwrap();

    assert_eq!(out.metrics().collect::<Vec<_>>(), ["A", "B", "C"]);
    assert_eq!(out.get("A").unwrap(), [Some("1".to_string())]);
    assert_eq!(out.get("B").unwrap(), [Some("2".to_string())]);
    assert_eq!(out.get("C").unwrap(), [None::<String>]);
    assert_eq!(out.columns(), source.columns());
}

#[test]
fn rows_not_requested_are_dropped() {
    let source = table(&["y1", "y2"], &[("A", &[Some("1"), None]), ("Z", &[Some("9"), Some("9")])]);
    let out = select(&source, &["A"]).unwrap();
    assert_eq!(out.len(), 1);
    assert!(!out.contains("Z"));
    assert_eq!(out.get("A").unwrap(), [Some("1".to_string()), None]);
}

#[test]
fn repeated_request_is_rejected() {
    let source = table(&["y"], &[("A", &[Some("1")])]);
    match select(&source, &["A", "B", "A"]).unwrap_err() {
        FsError::DuplicateMetric(metric) => assert_eq!(metric, "A"),
        other => panic!("expected DuplicateMetric, got {other:?}"),
    }
}

#[test]
fn default_metrics_match_enum_labels() {
    let labels: Vec<&str> = Metric::ALL.iter().map(|m| m.label()).collect();
    assert_eq!(labels, DEFAULT_METRICS);
    assert_eq!(
        DEFAULT_METRICS,
        ["매출액", "영업이익", "당기순이익", "영업이익률", "PER(배)", "PBR(배)"]
    );
}

#[test]
fn quarterly_fixture_is_reordered_and_padded() {
    let quarterly = normalize(&fixture("summary_quarterly_005930.html")).unwrap();
    let out = select(&quarterly, &DEFAULT_METRICS).unwrap();

    assert_eq!(out.metrics().collect::<Vec<_>>(), DEFAULT_METRICS);
    assert_eq!(out.value("매출액", "2023/12(IFRS연결)"), Some("677799"));
    assert_eq!(out.get("PBR(배)").unwrap(), [None::<String>, None]);
}
