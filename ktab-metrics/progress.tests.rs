use time::macros::datetime;

use super::*;

#[test]
fn estimate_test() {
    let started = datetime!(2026-08-25 10:00 UTC);
    let now = datetime!(2026-08-25 10:10 UTC);

    let progress = JobProgress::estimate(started, now, 2, 6);

    assert_eq!(Duration::minutes(10), progress.elapsed);
    assert_eq!(Some(Duration::minutes(20)), progress.eta);
}

#[test]
fn no_completions_yet_test() {
    let started = datetime!(2026-08-25 10:00 UTC);
    let now = datetime!(2026-08-25 10:05 UTC);

    assert_eq!(None, JobProgress::estimate(started, now, 0, 6).eta);
    assert_eq!(None, JobProgress::estimate(started, now, 0, 0).eta);
}

#[test]
fn finished_test() {
    let started = datetime!(2026-08-25 10:00 UTC);
    let now = datetime!(2026-08-25 10:30 UTC);

    let progress = JobProgress::estimate(started, now, 6, 6);
    assert_eq!(Some(Duration::ZERO), progress.eta);
}

#[test]
fn clock_skew_test() {
    let started = datetime!(2026-08-25 10:00 UTC);
    let now = datetime!(2026-08-25 09:59 UTC);

    // a start timestamp in the future must not produce a negative elapsed time
    assert_eq!(Duration::ZERO, JobProgress::estimate(started, now, 1, 2).elapsed);
}
