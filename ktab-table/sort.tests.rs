use std::cmp::Ordering;

use super::*;

#[test]
fn apply_test() {
    assert_eq!(Ordering::Less, SortOrder::Ascending.apply(Ordering::Less));
    assert_eq!(Ordering::Greater, SortOrder::Descending.apply(Ordering::Less));

    // ties stay ties in both directions, keeping the sort stable
    assert_eq!(Ordering::Equal, SortOrder::Ascending.apply(Ordering::Equal));
    assert_eq!(Ordering::Equal, SortOrder::Descending.apply(Ordering::Equal));
}

#[test]
fn toggle_test() {
    let mut sort = SortState::new("name", SortOrder::Ascending);

    sort.toggle("name");
    assert_eq!("name", sort.key());
    assert_eq!(SortOrder::Descending, sort.order());

    sort.toggle("name");
    assert_eq!(SortOrder::Ascending, sort.order());

    // switching to another column always starts ascending
    sort.toggle("name");
    sort.toggle("namespace");
    assert_eq!("namespace", sort.key());
    assert_eq!(SortOrder::Ascending, sort.order());
}

#[test]
fn from_str_test() {
    assert_eq!(SortOrder::Ascending, "asc".parse().unwrap());
    assert_eq!(SortOrder::Descending, "desc".parse().unwrap());
    assert_eq!(SortOrder::Descending, "descending".parse().unwrap());
    assert!("up".parse::<SortOrder>().is_err());
}
