use std::time::Duration;

use radius_entities as e;

use super::*;

impl From<e::position::PositionPolicy> for PositionPolicy {
    fn from(from: e::position::PositionPolicy) -> Self {
        Self {
            enable_high_accuracy: from.enable_high_accuracy,
            timeout_ms: from.timeout_millis(),
            maximum_age_ms: from.maximum_age_millis(),
        }
    }
}

impl From<PositionPolicy> for e::position::PositionPolicy {
    fn from(from: PositionPolicy) -> Self {
        let PositionPolicy {
            enable_high_accuracy,
            timeout_ms,
            maximum_age_ms,
        } = from;
        Self {
            enable_high_accuracy,
            timeout: Duration::from_millis(u64::from(timeout_ms)),
            maximum_age: Duration::from_millis(u64::from(maximum_age_ms)),
        }
    }
}
