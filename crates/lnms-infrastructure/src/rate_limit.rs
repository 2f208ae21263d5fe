//! Sliding-window rate limiter for tool calls
//!
//! Tracks the timestamps of recent acquisitions and refuses new ones
//! once the window is full. Cheap enough to sit in front of every tool
//! dispatch.

use crate::config::RateLimitConfig;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Sliding-window limiter shared across tool calls
pub struct SlidingWindowRateLimiter {
    max_requests: usize,
    window: Duration,
    timestamps: Mutex<VecDeque<Instant>>,
}

impl SlidingWindowRateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            timestamps: Mutex::new(VecDeque::with_capacity(max_requests)),
        }
    }

    /// Build a limiter from configuration, or `None` when disabled
    pub fn from_config(config: &RateLimitConfig) -> Option<Self> {
        config.enabled.then(|| {
            Self::new(
                config.max_requests,
                Duration::from_secs(config.window_secs),
            )
        })
    }

    /// Try to record a call now; `false` means the window is full
    pub fn try_acquire(&self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    fn try_acquire_at(&self, now: Instant) -> bool {
        let mut timestamps = match self.timestamps.lock() {
            Ok(guard) => guard,
            // a poisoned limiter should never block the server
            Err(poisoned) => poisoned.into_inner(),
        };

        while let Some(&oldest) = timestamps.front() {
            if now.duration_since(oldest) >= self.window {
                timestamps.pop_front();
            } else {
                break;
            }
        }

        if timestamps.len() >= self.max_requests {
            return false;
        }
        timestamps.push_back(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_limit() {
        let limiter = SlidingWindowRateLimiter::new(3, Duration::from_secs(60));
        let now = Instant::now();
        assert!(limiter.try_acquire_at(now));
        assert!(limiter.try_acquire_at(now));
        assert!(limiter.try_acquire_at(now));
        assert!(!limiter.try_acquire_at(now));
    }

    #[test]
    fn window_expiry_frees_slots() {
        let limiter = SlidingWindowRateLimiter::new(2, Duration::from_secs(10));
        let start = Instant::now();
        assert!(limiter.try_acquire_at(start));
        assert!(limiter.try_acquire_at(start));
        assert!(!limiter.try_acquire_at(start + Duration::from_secs(5)));
        assert!(limiter.try_acquire_at(start + Duration::from_secs(10)));
    }

    #[test]
    fn from_config_respects_enabled_flag() {
        let disabled = RateLimitConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(SlidingWindowRateLimiter::from_config(&disabled).is_none());

        let enabled = RateLimitConfig {
            enabled: true,
            max_requests: 5,
            window_secs: 1,
        };
        assert!(SlidingWindowRateLimiter::from_config(&enabled).is_some());
    }
}
