use std::collections::HashSet;

use ktab_table::{SortOrder, SortState};
use rstest::rstest;

use crate::rows::{ResourceRow, column_specs};

use super::*;

fn row(namespace: &str, name: &str, status: &str, restarts: u32, cpu: &str, memory: &str) -> ResourceRow {
    ResourceRow {
        namespace: namespace.to_owned(),
        name: name.to_owned(),
        status: Some(status.to_owned()),
        restarts: Some(restarts),
        cpu: Some(cpu.to_owned()),
        memory: Some(memory.to_owned()),
        created: None,
    }
}

fn table() -> TableView<ResourceRow> {
    TableView::new(
        vec![
            row("kube-system", "dns", "Running", 0, "1", "1Gi"),
            row("default", "api", "Running", 1, "250m", "512Mi"),
        ],
        column_specs(),
        SortState::new("name", SortOrder::Ascending),
    )
}

fn visibility() -> ColumnVisibility {
    ColumnVisibility::from_hidden(["created"])
}

#[test]
fn render_page_test() {
    let table = table();
    let mut pager = Pager::new(10);

    assert_eq!(
        "NAMESPACE   NAME↑ STATUS  RESTARTS  CPU MEMORY\n\
         default     api   Running        1 250m  512Mi\n\
         kube-system dns   Running        0    1    1Gi\n\
         page 1/1 | 2 of 2 rows\n",
        render_page(&table, &visibility(), &mut pager)
    );
}

#[test]
fn render_filtered_page_test() {
    let mut table = table();
    table.set_column_filter("namespace", Some(HashSet::from(["default".to_owned()])));
    let mut pager = Pager::new(10);

    assert_eq!(
        "NAMESPACE NAME↑ STATUS  RESTARTS  CPU MEMORY\n\
         default   api   Running        1 250m  512Mi\n\
         page 1/1 | 1 of 2 rows | filtered\n",
        render_page(&table, &visibility(), &mut pager)
    );
}

#[test]
fn render_descending_marker_test() {
    let mut table = table();
    table.toggle_sort("restarts");
    table.toggle_sort("restarts");
    let mut pager = Pager::new(10);

    let output = render_page(&table, &visibility(), &mut pager);
    let header = output.lines().next().unwrap();

    assert_eq!("NAMESPACE   NAME STATUS  RESTARTS↓  CPU MEMORY", header);
}

#[rstest]
#[case(1, 10, "page 1/1 | 2 of 2 rows")]
#[case(1, 1, "page 1/2 | 2 of 2 rows")]
#[case(2, 1, "page 2/2 | 2 of 2 rows")]
#[case(9, 1, "page 2/2 | 2 of 2 rows")]
fn footer_test(#[case] page: usize, #[case] page_size: usize, #[case] expected: &str) {
    let table = table();
    let mut pager = Pager::with_index(page_size, page - 1);

    let output = render_page(&table, &visibility(), &mut pager);
    assert_eq!(expected, output.lines().last().unwrap());
}

#[test]
fn render_facets_test() {
    let table = table();

    assert_eq!(
        "NAMESPACE:\n  default (1)\n  kube-system (1)\nSTATUS:\n  Running (2)\n",
        render_facets(&table)
    );
}
