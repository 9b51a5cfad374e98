//! Reconnection policy

use crate::config::ReconnectConfig;
use std::time::Duration;

/// What to do after a subscription fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconnectPolicy {
    /// Resubscribe instead of stopping
    pub enabled: bool,
    /// Consecutive failures before giving up (0 = infinite)
    pub max_attempts: u32,
    /// Delay before the first resubscription
    pub initial_delay: Duration,
    /// Backoff ceiling
    pub max_delay: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}

impl ReconnectPolicy {
    /// Report the first failure and stop
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            max_attempts: 0,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
        }
    }

    /// Resubscribe with exponential backoff
    pub fn backoff(max_attempts: u32, initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            enabled: true,
            max_attempts,
            initial_delay,
            max_delay,
        }
    }

    /// Start tracking a run of failures
    pub fn tracker(&self) -> Backoff {
        Backoff {
            policy: self.clone(),
            failures: 0,
            delay: self.initial_delay,
        }
    }
}

impl From<&ReconnectConfig> for ReconnectPolicy {
    fn from(config: &ReconnectConfig) -> Self {
        Self {
            enabled: config.enabled,
            max_attempts: config.max_attempts,
            initial_delay: config.initial_delay(),
            max_delay: config.max_delay(),
        }
    }
}

/// Consecutive-failure counter with doubling delay
#[derive(Debug, Clone)]
pub struct Backoff {
    policy: ReconnectPolicy,
    failures: u32,
    delay: Duration,
}

impl Backoff {
    /// Record a failure; returns the delay before retrying, or `None` to stop
    pub fn on_failure(&mut self) -> Option<Duration> {
        self.failures += 1;

        if !self.policy.enabled {
            return None;
        }
        if self.policy.max_attempts > 0 && self.failures >= self.policy.max_attempts {
            return None;
        }

        let delay = self.delay;
        self.delay = (self.delay * 2).min(self.policy.max_delay);
        Some(delay)
    }

    /// Data arrived; start counting from zero again
    pub fn reset(&mut self) {
        self.failures = 0;
        self.delay = self.policy.initial_delay;
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_stops_on_first_failure() {
        let mut backoff = ReconnectPolicy::disabled().tracker();
        assert_eq!(backoff.on_failure(), None);
        assert_eq!(backoff.failures(), 1);
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let policy =
            ReconnectPolicy::backoff(0, Duration::from_millis(100), Duration::from_millis(350));
        let mut backoff = policy.tracker();

        assert_eq!(backoff.on_failure(), Some(Duration::from_millis(100)));
        assert_eq!(backoff.on_failure(), Some(Duration::from_millis(200)));
        assert_eq!(backoff.on_failure(), Some(Duration::from_millis(350)));
        assert_eq!(backoff.on_failure(), Some(Duration::from_millis(350)));
    }

    #[test]
    fn test_max_attempts_reached() {
        let policy = ReconnectPolicy::backoff(3, Duration::from_millis(1), Duration::from_secs(1));
        let mut backoff = policy.tracker();

        assert!(backoff.on_failure().is_some());
        assert!(backoff.on_failure().is_some());
        assert_eq!(backoff.on_failure(), None);
    }

    #[test]
    fn test_reset_restores_initial_delay() {
        let policy = ReconnectPolicy::backoff(3, Duration::from_millis(10), Duration::from_secs(1));
        let mut backoff = policy.tracker();

        backoff.on_failure();
        backoff.on_failure();
        backoff.reset();

        assert_eq!(backoff.failures(), 0);
        assert_eq!(backoff.on_failure(), Some(Duration::from_millis(10)));
    }

    #[test]
    fn test_from_config() {
        let config = ReconnectConfig {
            enabled: true,
            max_attempts: 7,
            initial_delay_ms: 20,
            max_delay_ms: 2000,
        };
        let policy = ReconnectPolicy::from(&config);
        assert_eq!(
            policy,
            ReconnectPolicy::backoff(7, Duration::from_millis(20), Duration::from_secs(2))
        );
    }
}
