use time::{Duration, OffsetDateTime};

#[cfg(test)]
#[path = "./progress.tests.rs"]
mod progress_tests;

/// Execution progress of a batch job with a linear completion estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JobProgress {
    pub elapsed: Duration,
    pub eta: Option<Duration>,
}

impl JobProgress {
    /// Estimates the remaining run time from completions observed so far.\
    /// The estimate is linear (`elapsed / done * remaining`) and stays `None`
    /// until the first completion is observed.
    pub fn estimate(started_at: OffsetDateTime, now: OffsetDateTime, succeeded: u32, completions: u32) -> Self {
        let elapsed = (now - started_at).max(Duration::ZERO);

        let eta = if completions == 0 || succeeded == 0 {
            None
        } else if succeeded >= completions {
            Some(Duration::ZERO)
        } else {
            let remaining = completions - succeeded;
            Some(elapsed / i32::try_from(succeeded).unwrap_or(i32::MAX) * i32::try_from(remaining).unwrap_or(i32::MAX))
        };

        Self { elapsed, eta }
    }
}
