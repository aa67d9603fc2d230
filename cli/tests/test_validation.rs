use c5_cli::ui::parse_column;

#[test]
fn accepts_columns_within_range() {
    assert_eq!(parse_column("1", 9), Some(0));
    assert_eq!(parse_column("9", 9), Some(8));
    assert_eq!(parse_column("  5 ", 9), Some(4));
}

#[test]
fn rejects_columns_outside_range() {
    assert_eq!(parse_column("0", 9), None);
    assert_eq!(parse_column("10", 9), None);
    assert_eq!(parse_column("-1", 9), None);
}

#[test]
fn rejects_non_numeric_entries() {
    assert_eq!(parse_column("", 9), None);
    assert_eq!(parse_column("abc", 9), None);
    assert_eq!(parse_column("4.5", 9), None);
}
