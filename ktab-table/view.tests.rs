use std::collections::HashSet;

use crate::CellValue;

use super::*;

#[derive(Clone, Debug, PartialEq)]
struct TestRow {
    name: &'static str,
    namespace: &'static str,
    restarts: Option<u32>,
}

impl TestRow {
    fn new(name: &'static str, namespace: &'static str) -> Self {
        Self {
            name,
            namespace,
            restarts: None,
        }
    }

    fn with_restarts(name: &'static str, namespace: &'static str, restarts: u32) -> Self {
        Self {
            name,
            namespace,
            restarts: Some(restarts),
        }
    }
}

fn columns() -> Vec<ColumnSpec<TestRow>> {
    vec![
        ColumnSpec::new("namespace", "NAMESPACE", |r: &TestRow| Some(r.namespace.into())),
        ColumnSpec::new("name", "NAME", |r: &TestRow| Some(r.name.into())).filterable(false),
        ColumnSpec::new("restarts", "RESTARTS", |r: &TestRow| r.restarts.map(CellValue::from))
            .filterable(false)
            .to_right(),
    ]
}

fn table(rows: Vec<TestRow>) -> TableView<TestRow> {
    TableView::new(rows, columns(), SortState::new("name", SortOrder::Ascending))
}

fn set_of(values: &[&str]) -> HashSet<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn names(table: &TableView<TestRow>) -> Vec<&str> {
    table.iter().map(|r| r.name).collect()
}

#[test]
fn sort_and_filter_scenario_test() {
    let mut table = table(vec![
        TestRow::new("b", "x"),
        TestRow::new("a", "y"),
        TestRow::new("c", "x"),
    ]);

    assert_eq!(vec!["a", "b", "c"], names(&table));

    assert!(table.set_column_filter("namespace", Some(set_of(&["x"]))));
    assert_eq!(vec!["b", "c"], names(&table));
    assert!(table.has_active_filters());
}

#[test]
fn singleton_filter_test() {
    let mut table = table(vec![
        TestRow::new("a", "x"),
        TestRow::new("b", "y"),
        TestRow::new("c", "x"),
        TestRow::new("d", "z"),
    ]);

    table.set_column_filter("namespace", Some(set_of(&["y"])));

    assert_eq!(1, table.len());
    assert!(table.iter().all(|r| r.namespace == "y"));
}

#[test]
fn clear_filters_test() {
    let mut table = table(vec![
        TestRow::new("a", "x"),
        TestRow::new("b", "y"),
        TestRow::new("c", "x"),
    ]);

    table.set_column_filter("namespace", Some(set_of(&["x"])));
    table.sort_by("name", SortOrder::Descending);
    table.clear_filters();

    assert_eq!(table.full_len(), table.len());
    assert!(!table.has_active_filters());

    // sort state survives a filter reset
    assert_eq!("name", table.sort_state().key());
    assert_eq!(SortOrder::Descending, table.sort_state().order());
    assert_eq!(vec!["c", "b", "a"], names(&table));
}

#[test]
fn empty_set_excludes_nothing_test() {
    let mut table = table(vec![TestRow::new("a", "x"), TestRow::new("b", "y")]);

    // present key with an empty set is equivalent to an absent key
    table.set_column_filter("namespace", Some(HashSet::new()));

    assert_eq!(2, table.len());
    assert!(!table.has_active_filters());
}

#[test]
fn unknown_column_filter_is_noop_test() {
    let mut table = table(vec![TestRow::new("a", "x")]);

    assert!(!table.set_column_filter("missing", Some(set_of(&["v"]))));
    assert!(!table.set_column_filter("name", Some(set_of(&["a"])))); // not filterable
    assert_eq!(1, table.len());
    assert!(!table.has_active_filters());
}

#[test]
fn reverse_order_test() {
    let mut table = table(vec![
        TestRow::new("b", "x"),
        TestRow::new("d", "x"),
        TestRow::new("a", "x"),
        TestRow::new("c", "x"),
    ]);

    assert_eq!(vec!["a", "b", "c", "d"], names(&table));

    // no ties, so descending is the exact reverse
    table.sort_by("name", SortOrder::Descending);
    assert_eq!(vec!["d", "c", "b", "a"], names(&table));
}

#[test]
fn stable_sort_ties_test() {
    let mut table = table(vec![
        TestRow::with_restarts("a", "x", 5),
        TestRow::with_restarts("b", "x", 1),
        TestRow::with_restarts("c", "x", 5),
        TestRow::with_restarts("d", "x", 1),
    ]);

    // tied rows keep their original relative order
    table.sort_by("restarts", SortOrder::Ascending);
    assert_eq!(vec!["b", "d", "a", "c"], names(&table));

    // descending flips the comparator, not the array, so ties stay put
    table.sort_by("restarts", SortOrder::Descending);
    assert_eq!(vec!["a", "c", "b", "d"], names(&table));
}

#[test]
fn numeric_sort_test() {
    let mut table = table(vec![
        TestRow::with_restarts("a", "x", 10),
        TestRow::with_restarts("b", "x", 2),
        TestRow::with_restarts("c", "x", 1),
    ]);

    table.sort_by("restarts", SortOrder::Ascending);
    assert_eq!(vec!["c", "b", "a"], names(&table));
}

#[test]
fn toggle_sort_test() {
    let mut table = table(vec![TestRow::new("a", "x"), TestRow::new("b", "y")]);

    assert!(table.toggle_sort("name"));
    assert_eq!(SortOrder::Descending, table.sort_state().order());

    assert!(table.toggle_sort("namespace"));
    assert_eq!("namespace", table.sort_state().key());
    assert_eq!(SortOrder::Ascending, table.sort_state().order());

    assert!(!table.toggle_sort("missing"));
    assert_eq!("namespace", table.sort_state().key());
}

#[test]
fn sibling_exclusion_facets_test() {
    let mut table = TableView::new(
        vec![
            TestRow::with_restarts("a", "x", 1),
            TestRow::with_restarts("b", "y", 1),
            TestRow::with_restarts("c", "x", 2),
        ],
        vec![
            ColumnSpec::new("namespace", "NAMESPACE", |r: &TestRow| Some(r.namespace.into())),
            ColumnSpec::new("restarts", "RESTARTS", |r: &TestRow| r.restarts.map(CellValue::from)),
        ],
        SortState::new("namespace", SortOrder::Ascending),
    );

    // a column's own filter never narrows its own dropdown options
    table.set_column_filter("namespace", Some(set_of(&["x"])));
    assert_eq!(["x", "y"].as_slice(), table.facets().values("namespace").unwrap());
    assert_eq!(2, table.facets().count("namespace", "x"));
    assert_eq!(1, table.facets().count("namespace", "y"));

    // but a sibling's filter does narrow it
    assert_eq!(["1", "2"].as_slice(), table.facets().values("restarts").unwrap());
    assert_eq!(1, table.facets().count("restarts", "1"));

    table.set_column_filter("restarts", Some(set_of(&["1"])));
    assert_eq!(["x", "y"].as_slice(), table.facets().values("namespace").unwrap());
    assert_eq!(1, table.facets().count("namespace", "x"));
}

#[test]
fn page_clamp_test() {
    let table = table((0..7).map(|_| TestRow::new("a", "x")).collect());

    let mut pager = Pager::with_index(10, 5);
    assert_eq!(7, table.page(&mut pager).count());
    assert_eq!(0, pager.page_index());
}

#[test]
fn page_slice_test() {
    let mut rows = Vec::new();
    for name in ["a", "b", "c", "d", "e"] {
        rows.push(TestRow::new(name, "x"));
    }
    let table = table(rows);

    let mut pager = Pager::with_index(2, 1);
    let page = table.page(&mut pager).map(|r| r.name).collect::<Vec<_>>();
    assert_eq!(vec!["c", "d"], page);
}

#[test]
fn push_reapplies_filter_test() {
    let mut table = table(vec![TestRow::new("a", "x")]);
    table.set_column_filter("namespace", Some(set_of(&["x"])));

    table.push(TestRow::new("b", "y"));
    table.push(TestRow::new("c", "x"));

    assert_eq!(vec!["a", "c"], names(&table));
    assert_eq!(3, table.full_len());
}

#[test]
fn set_rows_test() {
    let mut table = table(vec![TestRow::new("a", "x")]);
    table.set_column_filter("namespace", Some(set_of(&["y"])));

    table.set_rows(vec![TestRow::new("b", "y"), TestRow::new("c", "x")]);

    assert_eq!(vec!["b"], names(&table));
    assert_eq!(Some(&TestRow::new("b", "y")), table.get(0));
    assert_eq!(None, table.get(1));
}
