use super::*;

#[test]
fn usage_percent_test() {
    assert_eq!(Some(50.0), usage_percent(5, 10));
    assert_eq!(Some(100.0), usage_percent(10, 10));
    assert_eq!(Some(150.0), usage_percent(15, 10));
    assert_eq!(None, usage_percent(5, 0));
}

#[test]
fn cpu_quota_test() {
    let usage = QuotaUsage::new("limits.cpu", "500m", "2");

    assert_eq!(Some(25.0), usage.percent);
    assert_eq!("500m", usage.used);
    assert_eq!("2", usage.hard);
}

#[test]
fn memory_quota_test() {
    let usage = QuotaUsage::new("requests.memory", "512Mi", "2Gi");
    assert_eq!(Some(25.0), usage.percent);

    let usage = QuotaUsage::new("requests.storage", "10Gi", "100Gi");
    assert_eq!(Some(10.0), usage.percent);
}

#[test]
fn count_quota_test() {
    let usage = QuotaUsage::new("pods", "7", "10");
    assert_eq!(Some(70.0), usage.percent);
}

#[test]
fn unparseable_quota_test() {
    let usage = QuotaUsage::new("pods", "n/a", "10");
    assert_eq!(None, usage.percent);

    let usage = QuotaUsage::new("limits.cpu", "500m", "0");
    assert_eq!(None, usage.percent);
}
