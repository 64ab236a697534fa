use super::*;

#[test]
fn clamp_test() {
    // out-of-range index is clamped to the last valid page, never an empty page
    let mut pager = Pager::with_index(10, 5);
    assert_eq!(0..7, pager.clamp(7));
    assert_eq!(0, pager.page_index());

    let mut pager = Pager::with_index(5, 3);
    assert_eq!(10..12, pager.clamp(12));
    assert_eq!(2, pager.page_index());
}

#[test]
fn clamp_empty_test() {
    let mut pager = Pager::with_index(10, 4);
    assert_eq!(0..0, pager.clamp(0));
    assert_eq!(0, pager.page_index());
}

#[test]
fn page_count_test() {
    let pager = Pager::new(10);

    assert_eq!(1, pager.page_count(0));
    assert_eq!(1, pager.page_count(7));
    assert_eq!(1, pager.page_count(10));
    assert_eq!(2, pager.page_count(11));
    assert_eq!(5, pager.page_count(42));
}

#[test]
fn zero_page_size_test() {
    // page size is forced to at least one
    let mut pager = Pager::new(0);
    assert_eq!(1, pager.page_size());
    assert_eq!(0..1, pager.clamp(3));
}

#[test]
fn in_range_test() {
    let mut pager = Pager::with_index(10, 1);
    assert_eq!(10..20, pager.clamp(25));
    assert_eq!(1, pager.page_index());
}
