use super::*;

#[test]
fn truncate_test() {
    assert_eq!("Hel", truncate("Hello", 3));
    assert_eq!("Hello", truncate("Hello", 5));
    assert_eq!("Hello", truncate("Hello", 20));
    assert_eq!("", truncate("Hello", 0));
}

#[test]
fn add_padding_test() {
    assert_eq!("abc  ", add_padding("abc", 5));
    assert_eq!("abc", add_padding("abcde", 3));
    assert_eq!("", add_padding("abc", 0));
}

#[test]
fn push_cell_test() {
    let mut row = String::new();
    row.push_cell("name", 6, false);
    row.push_cell("42", 4, true);

    assert_eq!("name    42", row);
}

#[test]
fn push_cell_truncates_test() {
    let mut row = String::new();
    row.push_cell("really-long-name", 6, false);

    assert_eq!("really", row);
}
