use std::fs;

use fin_summary::EntityCode;
use fin_summary::output::{output_path, write_csv};
use fin_summary::table::FinTable;

#[test]
fn writes_bom_header_and_empty_cells() {
    let mut table = FinTable::new("주요재무정보", vec!["Y_2023".into(), "Q_2023/12".into()]);
    table.push_row("매출액", vec![Some("100".into()), None]);
    table.push_row("PER(배)", vec![None, Some("8.5".into())]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("x.csv");
    write_csv(&table, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
    assert_eq!(
        String::from_utf8(bytes[3..].to_vec()).unwrap(),
        "주요재무정보,Y_2023,Q_2023/12\n매출액,100,\nPER(배),,8.5\n"
    );
}

#[test]
fn quotes_fields_containing_delimiters() {
    let mut table = FinTable::new("k", vec!["a,b".into()]);
    table.push_row("m", vec![Some("say \"hi\"".into())]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("q.csv");
    write_csv(&table, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "\u{feff}k,\"a,b\"\nm,\"say \"\"hi\"\"\"\n");
}

#[test]
fn output_path_uses_code_as_file_stem() {
    let code = EntityCode::new(" 095660 ").unwrap();
    let dir = std::path::Path::new("output");
    assert_eq!(output_path(dir, &code), dir.join("095660.csv"));
}

#[test]
fn empty_code_is_rejected() {
    assert!(EntityCode::new("   ").is_err());
}
