use fin_summary::table::{ANNUAL_PREFIX, FinTable, QUARTERLY_PREFIX, merge, select};

fn table(columns: &[&str], rows: &[(&str, &[Option<&str>])]) -> FinTable {
    let mut t = FinTable::new("주요재무정보", columns.iter().map(|c| c.to_string()).collect());
    for (metric, values) in rows {
        t.push_row(*metric, values.iter().map(|v| v.map(str::to_string)).collect());
    }
    t
}

#[test]
fn prefixes_columns_and_aligns_on_metric() {
    let metrics = ["Revenue", "OperatingProfit"];
    let annual = select(&table(&["2023"], &[("Revenue", &[Some("100")])]), &metrics).unwrap();
    let quarterly = select(
        &table(&["2023Q4"], &[("OperatingProfit", &[Some("10")])]),
        &metrics,
    )
    .unwrap();

    let merged = merge(&annual, &quarterly);

    assert_eq!(merged.columns(), ["Y_2023", "Q_2023Q4"]);
    assert_eq!(merged.metrics().collect::<Vec<_>>(), ["Revenue", "OperatingProfit"]);
    assert_eq!(merged.get("Revenue").unwrap(), [Some("100".to_string()), None]);
    assert_eq!(merged.get("OperatingProfit").unwrap(), [None, Some("10".to_string())]);
}

#[test]
fn same_period_label_stays_distinct_by_prefix() {
    let annual = table(&["2023/12"], &[("A", &[Some("1")])]);
    let quarterly = table(&["2023/12"], &[("A", &[Some("2")])]);
    let merged = merge(&annual, &quarterly);

    let y = format!("{ANNUAL_PREFIX}2023/12");
    let q = format!("{QUARTERLY_PREFIX}2023/12");
    assert_eq!(merged.value("A", &y), Some("1"));
    assert_eq!(merged.value("A", &q), Some("2"));
}

#[test]
fn keeps_rows_present_on_one_side_only() {
    let annual = table(&["y"], &[("A", &[Some("1")])]);
    let quarterly = table(&["q1", "q2"], &[("B", &[Some("2"), Some("3")])]);
    let merged = merge(&annual, &quarterly);

    assert_eq!(merged.metrics().collect::<Vec<_>>(), ["A", "B"]);
    assert_eq!(merged.get("A").unwrap(), [Some("1".to_string()), None, None]);
    assert_eq!(
        merged.get("B").unwrap(),
        [None, Some("2".to_string()), Some("3".to_string())]
    );
}

#[test]
fn merge_is_deterministic() {
    let annual = table(&["y1", "y2"], &[("A", &[Some("1"), None]), ("B", &[None, Some("2")])]);
    let quarterly = table(&["q1"], &[("B", &[Some("3")]), ("A", &[None])]);
    assert_eq!(merge(&annual, &quarterly), merge(&annual, &quarterly));
    assert_eq!(merge(&annual, &quarterly).index_name(), "주요재무정보");
}
