use std::cmp::Ordering;

#[cfg(test)]
#[path = "./scaling.tests.rs"]
mod scaling_tests;

/// Direction of a horizontal autoscaler size change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleDirection {
    Up,
    Down,
    Unchanged,
}

/// Scaling event parsed from a human-readable autoscaler event message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalingEvent {
    pub new_size: u32,
    pub reason: String,
}

impl ScalingEvent {
    /// Parses messages like
    /// `New size: 4; reason: cpu resource utilization (percentage of request) above target`.\
    /// A malformed message yields `None`, never a panic.
    pub fn parse(message: &str) -> Option<Self> {
        let rest = message.trim().strip_prefix("New size:")?;
        let (size, rest) = rest.split_once(';')?;
        let new_size = size.trim().parse().ok()?;

        let reason = rest.trim();
        let reason = reason.strip_prefix("reason:").map_or(reason, str::trim);
        if reason.is_empty() {
            return None;
        }

        Some(Self {
            new_size,
            reason: reason.to_owned(),
        })
    }

    /// Returns the scale direction relative to the previously observed size.
    pub fn direction(&self, previous_size: u32) -> ScaleDirection {
        match self.new_size.cmp(&previous_size) {
            Ordering::Greater => ScaleDirection::Up,
            Ordering::Less => ScaleDirection::Down,
            Ordering::Equal => ScaleDirection::Unchanged,
        }
    }
}
