use ktab_table::{SortOrder, SortState, TableView};
use rstest::rstest;

use super::*;

const SNAPSHOT: &str = "
kind: pods
rows:
  - namespace: default
    name: api-7d9c
    status: Running
    restarts: 2
    cpu: 250m
    memory: 512Mi
    created: 2026-08-20T10:15:00Z
  - namespace: kube-system
    name: dns-b4f8
    status: Pending
";

fn rows() -> Vec<ResourceRow> {
    serde_yaml::from_str::<Snapshot>(SNAPSHOT).unwrap().rows
}

#[test]
fn deserialize_test() {
    let snapshot = serde_yaml::from_str::<Snapshot>(SNAPSHOT).unwrap();

    assert_eq!("pods", snapshot.kind);
    assert_eq!(2, snapshot.rows.len());
    assert_eq!("api-7d9c", snapshot.rows[0].name);
    assert_eq!(Some(2), snapshot.rows[0].restarts);

    // optional fields may be missing entirely
    assert_eq!(None, snapshot.rows[1].restarts);
    assert_eq!(None, snapshot.rows[1].cpu);
}

#[rstest]
#[case("api", true)]
#[case("kube", true)]
#[case("b4f8", true)]
#[case("payments", false)]
fn contains_test(#[case] pattern: &str, #[case] expected: bool) {
    assert_eq!(expected, rows().iter().any(|row| row.contains(pattern)));
}

#[test]
fn cpu_sorts_by_quantity_test() {
    let mut rows = Vec::new();
    for (name, cpu) in [("a", "1"), ("b", "250m"), ("c", "750m")] {
        rows.push(ResourceRow {
            namespace: "default".to_owned(),
            name: name.to_owned(),
            status: None,
            restarts: None,
            cpu: Some(cpu.to_owned()),
            memory: None,
            created: None,
        });
    }

    // "1" must sort above "750m" even though it is lexicographically smaller
    let table = TableView::new(rows, column_specs(), SortState::new("cpu", SortOrder::Ascending));
    let names = table.iter().map(|r| r.name.as_str()).collect::<Vec<_>>();

    assert_eq!(vec!["b", "c", "a"], names);
}

#[test]
fn memory_sorts_by_quantity_test() {
    let mut rows = Vec::new();
    for (name, memory) in [("a", "1Gi"), ("b", "900Mi"), ("c", "100Mi")] {
        rows.push(ResourceRow {
            namespace: "default".to_owned(),
            name: name.to_owned(),
            status: None,
            restarts: None,
            cpu: None,
            memory: Some(memory.to_owned()),
            created: None,
        });
    }

    let table = TableView::new(rows, column_specs(), SortState::new("memory", SortOrder::Ascending));
    let names = table.iter().map(|r| r.name.as_str()).collect::<Vec<_>>();

    assert_eq!(vec!["c", "b", "a"], names);
}
