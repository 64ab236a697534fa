use super::*;

fn columns() -> Vec<ColumnSpec<u32>> {
    vec![
        ColumnSpec::new("namespace", "NAMESPACE", |_| None),
        ColumnSpec::new("name", "NAME", |_| None),
        ColumnSpec::new("status", "STATUS", |_| None),
    ]
}

#[test]
fn toggle_test() {
    let mut visibility = ColumnVisibility::default();
    assert!(visibility.is_visible("status"));

    assert!(!visibility.toggle("status"));
    assert!(!visibility.is_visible("status"));

    assert!(visibility.toggle("status"));
    assert!(visibility.is_visible("status"));
}

#[test]
fn visible_test() {
    let columns = columns();
    let mut visibility = ColumnVisibility::from_hidden(["namespace"]);
    visibility.hide("status");

    let visible = visibility.visible(&columns).map(|c| c.id()).collect::<Vec<_>>();
    assert_eq!(vec!["name"], visible);

    visibility.show("status");
    let visible = visibility.visible(&columns).map(|c| c.id()).collect::<Vec<_>>();
    assert_eq!(vec!["name", "status"], visible);
}
