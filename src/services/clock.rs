//! Timestamp source for record creation and updates

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Source of record timestamps, in nanoseconds since the Unix epoch
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

/// Wall clock that never repeats or goes backwards.
///
/// Two reads in the same nanosecond, or a wall clock step backwards, still
/// yield a value strictly greater than the previous one.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicU64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        let wall = Utc::now()
            .timestamp_nanos_opt()
            .map(|nanos| nanos.max(0) as u64)
            .unwrap_or(u64::MAX);

        let mut last = self.last.load(Ordering::Acquire);
        loop {
            let next = wall.max(last.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_increasing() {
        let clock = SystemClock::new();
        let mut previous = clock.now();
        for _ in 0..10_000 {
            let current = clock.now();
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn test_close_to_wall_clock() {
        let clock = SystemClock::new();
        let wall = Utc::now().timestamp_nanos_opt().unwrap() as u64;
        let now = clock.now();
        assert!(now >= wall);
        // within one minute
        assert!(now - wall < 60_000_000_000);
    }
}
