use std::collections::HashSet;

use super::*;

fn set_of(values: &[&str]) -> HashSet<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

#[test]
fn accepts_test() {
    let mut filters = ColumnFilters::default();

    assert!(filters.accepts("namespace", "kube-system"));

    filters.set("namespace", Some(set_of(&["default"])));
    assert!(filters.accepts("namespace", "default"));
    assert!(!filters.accepts("namespace", "kube-system"));

    // other columns stay unconstrained
    assert!(filters.accepts("status", "Running"));
}

#[test]
fn empty_set_is_no_constraint_test() {
    let mut filters = ColumnFilters::default();
    filters.set("namespace", Some(HashSet::new()));

    // present key with an empty set behaves exactly like an absent key
    assert!(filters.accepts("namespace", "anything"));
    assert!(!filters.is_active());
}

#[test]
fn remove_test() {
    let mut filters = ColumnFilters::default();

    filters.set("namespace", Some(set_of(&["default"])));
    assert!(filters.get("namespace").is_some());

    filters.set("namespace", None);
    assert!(filters.get("namespace").is_none());
    assert!(filters.accepts("namespace", "kube-system"));
}

#[test]
fn is_active_test() {
    let mut filters = ColumnFilters::default();
    assert!(!filters.is_active());

    filters.set("status", Some(set_of(&["Running"])));
    assert!(filters.is_active());

    filters.clear();
    assert!(!filters.is_active());
    assert!(filters.accepts("status", "Pending"));
}
