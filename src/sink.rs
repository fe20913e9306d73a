//! Report delivery.
//!
//! Defines the [`ReportSink`] trait the tracker reports closed windows to, and
//! [`ReportBuffer`], a fixed-capacity sink for consumers that would rather poll
//! than be called back.

use crate::types::LoadReport;
use heapless::Vec;

/// Receives load reports from a [`LoadTracker`](crate::LoadTracker).
///
/// Called synchronously from inside the tracker operation that crossed the
/// reporting boundary, once per boundary and in increasing instant order.
/// Keep implementations short: they run inline on the scheduler's path.
pub trait ReportSink<I> {
    /// Called when the window ending at `instant` closes.
    ///
    /// `load` is the fraction of the window spent running tasks, in `0.0..=1.0`.
    fn on_report(&mut self, instant: I, load: f64);
}

impl<I, F> ReportSink<I> for F
where
    F: FnMut(I, f64),
{
    #[inline]
    fn on_report(&mut self, instant: I, load: f64) {
        self(instant, load)
    }
}

/// Sink that buffers up to `N` reports until the consumer drains them.
///
/// Once full, further reports are discarded and counted in [`dropped`](Self::dropped).
#[derive(Debug, Clone)]
pub struct ReportBuffer<I, const N: usize> {
    reports: Vec<LoadReport<I>, N>,
    dropped: u32,
}

impl<I, const N: usize> ReportBuffer<I, N> {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            reports: Vec::new(),
            dropped: 0,
        }
    }

    /// Returns the buffered reports, oldest first.
    pub fn reports(&self) -> &[LoadReport<I>] {
        &self.reports
    }

    /// Returns the most recent buffered report.
    pub fn latest(&self) -> Option<&LoadReport<I>> {
        self.reports.last()
    }

    /// Returns the number of buffered reports.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Returns true if no reports are buffered.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Returns the number of reports discarded because the buffer was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Discards all buffered reports and resets the drop counter.
    pub fn clear(&mut self) {
        self.reports.clear();
        self.dropped = 0;
    }

    /// Hands every buffered report to `f`, oldest first, and empties the buffer.
    ///
    /// The drop counter is left untouched.
    pub fn drain<F>(&mut self, mut f: F)
    where
        F: FnMut(LoadReport<I>),
    {
        for report in core::mem::take(&mut self.reports) {
            f(report);
        }
    }
}

impl<I, const N: usize> Default for ReportBuffer<I, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, const N: usize> ReportSink<I> for ReportBuffer<I, N> {
    fn on_report(&mut self, instant: I, load: f64) {
        if self.reports.push(LoadReport::new(instant, load)).is_err() {
            self.dropped = self.dropped.saturating_add(1);

            #[cfg(feature = "defmt")]
            defmt::warn!("report buffer full, {=u32} reports dropped", self.dropped);
        }
    }
}
