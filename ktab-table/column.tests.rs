use std::cmp::Ordering;

use super::*;

struct TestRow {
    name: &'static str,
    restarts: Option<u32>,
}

fn name_column() -> ColumnSpec<TestRow> {
    ColumnSpec::new("name", "NAME", |r: &TestRow| Some(r.name.into()))
}

fn restarts_column() -> ColumnSpec<TestRow> {
    ColumnSpec::new("restarts", "RESTARTS", |r: &TestRow| r.restarts.map(CellValue::from))
}

#[test]
fn display_test() {
    assert_eq!("test", CellValue::Text("test".to_owned()).to_string());
    assert_eq!("5", CellValue::Number(5.0).to_string());
    assert_eq!("2.5", CellValue::Number(2.5).to_string());
}

#[test]
fn text_test() {
    let column = restarts_column();

    assert_eq!("7", column.text(&TestRow { name: "a", restarts: Some(7) }));
    assert_eq!("", column.text(&TestRow { name: "a", restarts: None }));
}

#[test]
fn compare_numbers_test() {
    let column = restarts_column();

    let two = TestRow { name: "a", restarts: Some(2) };
    let ten = TestRow { name: "b", restarts: Some(10) };

    // numeric comparison, not the lexicographic "10" < "2"
    assert_eq!(Ordering::Less, column.compare(&two, &ten));
    assert_eq!(Ordering::Greater, column.compare(&ten, &two));
    assert_eq!(Ordering::Equal, column.compare(&two, &two));
}

#[test]
fn compare_text_test() {
    let column = name_column();

    let a = TestRow { name: "alpha", restarts: None };
    let b = TestRow { name: "beta", restarts: None };

    assert_eq!(Ordering::Less, column.compare(&a, &b));

    // byte order is case-sensitive
    let upper = TestRow { name: "Zeta", restarts: None };
    assert_eq!(Ordering::Greater, column.compare(&a, &upper));
}

#[test]
fn compare_missing_value_test() {
    let column = restarts_column();

    let missing = TestRow { name: "a", restarts: None };
    let present = TestRow { name: "b", restarts: Some(1) };

    // missing values stringify to "" and sort first
    assert_eq!(Ordering::Less, column.compare(&missing, &present));
    assert_eq!(Ordering::Equal, column.compare(&missing, &missing));
}

#[test]
fn custom_compare_test() {
    let column = name_column().with_compare(|a: &TestRow, b: &TestRow| a.name.len().cmp(&b.name.len()));

    let short = TestRow { name: "zz", restarts: None };
    let long = TestRow { name: "aaaa", restarts: None };

    assert_eq!(Ordering::Less, column.compare(&short, &long));
}

#[test]
fn flags_test() {
    let column = name_column().sortable(false).filterable(false).to_right();

    assert!(!column.is_sortable());
    assert!(!column.is_filterable());
    assert!(column.is_right_aligned());
    assert_eq!("name", column.id());
    assert_eq!("NAME", column.label());
}
