use std::time::Duration;

/// Options for requesting the device position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionPolicy {
    pub enable_high_accuracy: bool,
    /// Maximum time to wait for a position.
    pub timeout: Duration,
    /// Maximum age of a cached position that is still acceptable.
    pub maximum_age: Duration,
}

impl PositionPolicy {
    pub fn timeout_millis(&self) -> u32 {
        saturating_millis(self.timeout)
    }

    pub fn maximum_age_millis(&self) -> u32 {
        saturating_millis(self.maximum_age)
    }
}

impl Default for PositionPolicy {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(30),
            maximum_age: Duration::from_secs(60),
        }
    }
}

fn saturating_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_in_millis() {
        let policy = PositionPolicy::default();
        assert!(policy.enable_high_accuracy);
        assert_eq!(policy.timeout_millis(), 30_000);
        assert_eq!(policy.maximum_age_millis(), 60_000);
    }

    #[test]
    fn saturate_huge_durations() {
        let policy = PositionPolicy {
            timeout: Duration::from_secs(u64::MAX),
            ..Default::default()
        };
        assert_eq!(policy.timeout_millis(), u32::MAX);
    }
}
