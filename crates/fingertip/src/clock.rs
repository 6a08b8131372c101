//! Time sources for pacing gestures.
//!
//! Gestures never sleep directly; they ask a [`TimeSource`]. Production code
//! uses [`SystemClock`], tests use [`FakeClock`] which advances virtual time
//! instantly so paced gestures run deterministically and fast.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Suspension primitive used between gesture steps
pub trait TimeSource {
    /// Suspend for `duration`
    fn sleep(&self, duration: Duration);
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration);
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration);
    }
}

/// Wall-clock time source backed by `std::thread::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Fake clock for deterministic testing
#[derive(Debug, Default)]
pub struct FakeClock {
    /// Virtual nanoseconds elapsed
    elapsed_ns: AtomicU64,
    /// Number of `sleep` calls observed
    sleeps: AtomicU64,
}

impl FakeClock {
    /// Create a fake clock at time zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared fake clock
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Virtual time elapsed since creation or the last reset
    #[must_use]
    pub fn now(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns.load(Ordering::SeqCst))
    }

    /// Number of `sleep` calls observed
    #[must_use]
    pub fn sleep_count(&self) -> u64 {
        self.sleeps.load(Ordering::SeqCst)
    }

    /// Advance virtual time without counting a sleep
    pub fn fast_forward(&self, duration: Duration) {
        self.elapsed_ns
            .fetch_add(duration_to_nanos(duration), Ordering::SeqCst);
    }

    /// Reset virtual time and the sleep counter
    pub fn reset(&self) {
        self.elapsed_ns.store(0, Ordering::SeqCst);
        self.sleeps.store(0, Ordering::SeqCst);
    }
}

impl Clone for FakeClock {
    fn clone(&self) -> Self {
        Self {
            elapsed_ns: AtomicU64::new(self.elapsed_ns.load(Ordering::SeqCst)),
            sleeps: AtomicU64::new(self.sleeps.load(Ordering::SeqCst)),
        }
    }
}

impl TimeSource for FakeClock {
    fn sleep(&self, duration: Duration) {
        self.sleeps.fetch_add(1, Ordering::SeqCst);
        self.fast_forward(duration);
    }
}

fn duration_to_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    // =========================================================================
    // FakeClock
    // =========================================================================

    #[test]
    fn test_fake_clock_starts_at_zero() {
        let clock = FakeClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.sleep_count(), 0);
    }

    #[test]
    fn test_fake_sleep_advances_virtual_time() {
        let clock = FakeClock::new();
        let start = Instant::now();
        for _ in 0..100 {
            clock.sleep(Duration::from_millis(5));
        }
        assert_eq!(clock.now(), Duration::from_millis(500));
        assert_eq!(clock.sleep_count(), 100);
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_fast_forward_does_not_count_as_sleep() {
        let clock = FakeClock::new();
        clock.fast_forward(Duration::from_secs(60));
        assert_eq!(clock.now(), Duration::from_secs(60));
        assert_eq!(clock.sleep_count(), 0);
    }

    #[test]
    fn test_reset() {
        let clock = FakeClock::new();
        clock.sleep(Duration::from_millis(2));
        clock.reset();
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.sleep_count(), 0);
    }

    #[test]
    fn test_shared_clock_observes_sleeps_through_arc() {
        let clock = FakeClock::shared();
        let handle = Arc::clone(&clock);
        handle.sleep(Duration::from_micros(1500));
        assert_eq!(clock.now(), Duration::from_micros(1500));
    }

    #[test]
    fn test_clone_snapshots_state() {
        let clock = FakeClock::new();
        clock.sleep(Duration::from_millis(1));
        let copy = clock.clone();
        clock.sleep(Duration::from_millis(1));
        assert_eq!(copy.now(), Duration::from_millis(1));
        assert_eq!(copy.sleep_count(), 1);
    }

    // =========================================================================
    // SystemClock
    // =========================================================================

    #[test]
    fn test_system_clock_sleeps() {
        let start = Instant::now();
        SystemClock.sleep(Duration::from_millis(2));
        assert!(start.elapsed() >= Duration::from_millis(2));
    }
}
