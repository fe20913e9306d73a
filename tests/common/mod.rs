//! Shared test infrastructure for thread-load-tracker integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use thread_load_tracker::{LoadTracker, ReportSink, TimeDuration, TimeInstant};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_nanos(&self) -> u64 {
        self.0 * 1_000_000
    }

    fn saturating_add(self, other: Self) -> Self {
        TestDuration(self.0.saturating_add(other.0))
    }
}

/// Mock instant type for testing (milliseconds since an arbitrary origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Sink
// ============================================================================

/// Mock sink that records every report for testing
pub struct MockSink {
    reports: heapless::Vec<(TestInstant, f64), 64>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            reports: heapless::Vec::new(),
        }
    }

    pub fn reports(&self) -> &[(TestInstant, f64)] {
        &self.reports
    }

    pub fn instants(&self) -> heapless::Vec<u64, 64> {
        self.reports.iter().map(|(instant, _)| instant.0).collect()
    }

    pub fn loads(&self) -> heapless::Vec<f64, 64> {
        self.reports.iter().map(|(_, load)| *load).collect()
    }
}

impl ReportSink<TestInstant> for MockSink {
    fn on_report(&mut self, instant: TestInstant, load: f64) {
        self.reports
            .push((instant, load))
            .expect("mock sink capacity exceeded");
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Creates a tracker starting at `start` ms with a `interval` ms reporting interval
pub fn tracker_at(start: u64, interval: u64) -> LoadTracker<TestInstant, MockSink> {
    LoadTracker::new(TestInstant(start), MockSink::new(), TestDuration(interval))
}

/// Compare two loads with floating-point tolerance
pub fn loads_equal(a: f64, b: f64) -> bool {
    const EPSILON: f64 = 1e-9;
    (a - b).abs() < EPSILON
}

/// Checks the window invariants that must hold after every operation
pub fn assert_window_invariants(tracker: &LoadTracker<TestInstant, MockSink>) {
    let interval = tracker.reporting_interval().0;
    let time = tracker.time().0;
    let next = tracker.next_report_instant().0;

    assert!(time <= next, "time {} beyond next report {}", time, next);
    assert!(next - interval <= time, "time {} lags window ending {}", time, next);
    assert!(tracker.run_time_in_window().0 <= interval);
}
