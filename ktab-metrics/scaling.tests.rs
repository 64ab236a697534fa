use super::*;

#[test]
fn parse_test() {
    let event =
        ScalingEvent::parse("New size: 4; reason: cpu resource utilization (percentage of request) above target").unwrap();

    assert_eq!(4, event.new_size);
    assert_eq!("cpu resource utilization (percentage of request) above target", event.reason);
}

#[test]
fn parse_without_reason_prefix_test() {
    let event = ScalingEvent::parse("New size: 2; All metrics below target").unwrap();

    assert_eq!(2, event.new_size);
    assert_eq!("All metrics below target", event.reason);
}

#[test]
fn parse_malformed_test() {
    assert_eq!(None, ScalingEvent::parse(""));
    assert_eq!(None, ScalingEvent::parse("Scaled up replica set to 4"));
    assert_eq!(None, ScalingEvent::parse("New size: four; reason: cpu"));
    assert_eq!(None, ScalingEvent::parse("New size: 4"));
    assert_eq!(None, ScalingEvent::parse("New size: 4; reason:"));
}

#[test]
fn direction_test() {
    let event = ScalingEvent::parse("New size: 4; reason: cpu above target").unwrap();

    assert_eq!(ScaleDirection::Up, event.direction(2));
    assert_eq!(ScaleDirection::Down, event.direction(6));
    assert_eq!(ScaleDirection::Unchanged, event.direction(4));
}
