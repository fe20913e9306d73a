//! Thread load tracker with fixed-interval reporting.
//!
//! Provides [`LoadTracker`], which reconstructs how busy a thread is from
//! task start/end timestamps and pause/resume/idle notifications, and reports
//! the load of every closed window to a [`ReportSink`].

use crate::event::TrackerEvent;
use crate::sink::ReportSink;
use crate::time::{TimeDuration, TimeInstant};
use crate::types::{TaskState, ThreadState, TrackerError};

/// Measures the fraction of wall time a single thread spends running tasks.
///
/// Time is split into fixed, non-overlapping windows of `reporting_interval`,
/// tiled from construction (or the last [`reset`](Self::reset)). Whenever an
/// operation moves the tracker's clock across a window boundary, the load of
/// that window is handed to the sink. A single call that spans several windows
/// reports each of them, in order.
///
/// The tracker never reads a clock. All instants come from the caller and must
/// be monotonic: passing an instant earlier than [`time`](Self::time) panics.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `S` - Report sink implementation type
pub struct LoadTracker<I: TimeInstant, S: ReportSink<I>> {
    time: I,
    next_report: I,
    thread_state: ThreadState,
    last_state_change: I,
    reporting_interval: I::Duration,
    // Run time inside [next_report - reporting_interval, next_report]
    run_time_in_window: I::Duration,
    sink: S,
}

impl<I: TimeInstant, S: ReportSink<I>> LoadTracker<I, S> {
    /// Creates an active tracker whose first window closes at `now + reporting_interval`.
    ///
    /// # Panics
    /// If the interval is zero or the first boundary overflows the instant type.
    /// Use [`try_new`](Self::try_new) to handle these as errors.
    pub fn new(now: I, sink: S, reporting_interval: I::Duration) -> Self {
        match Self::try_new(now, sink, reporting_interval) {
            Ok(tracker) => tracker,
            Err(err) => panic!("invalid load tracker configuration: {}", err),
        }
    }

    /// Creates an active tracker, rejecting invalid configuration.
    pub fn try_new(now: I, sink: S, reporting_interval: I::Duration) -> Result<Self, TrackerError> {
        if reporting_interval.as_nanos() == 0 {
            return Err(TrackerError::NonPositiveInterval);
        }

        let next_report = now
            .checked_add(reporting_interval)
            .ok_or(TrackerError::InstantOverflow)?;

        Ok(Self {
            time: now,
            next_report,
            thread_state: ThreadState::Active,
            last_state_change: now,
            reporting_interval,
            run_time_in_window: I::Duration::ZERO,
            sink,
        })
    }

    /// Handles a tracker event by dispatching to the appropriate method.
    pub fn handle_event(&mut self, event: TrackerEvent<I>) {
        match event {
            TrackerEvent::Pause(now) => self.pause(now),
            TrackerEvent::Resume(now) => self.resume(now),
            TrackerEvent::Reset(now) => self.reset(now),
            TrackerEvent::TaskTime { start, end } => self.record_task_time(start, end),
            TrackerEvent::Idle(now) => self.record_idle(now),
        }
    }

    /// Advances to `now` as idle time, then marks the thread paused.
    ///
    /// Pausing an already paused thread only advances the clock.
    pub fn pause(&mut self, now: I) {
        self.advance(now, TaskState::Idle);
        self.set_thread_state(ThreadState::Paused, now);
    }

    /// Advances to `now` as idle time, then marks the thread active.
    pub fn resume(&mut self, now: I) {
        self.advance(now, TaskState::Idle);
        self.set_thread_state(ThreadState::Active, now);
    }

    /// Discards the current window and re-anchors the reporting grid at `now`.
    ///
    /// No report is emitted for the discarded window. The thread state is kept.
    ///
    /// # Panics
    /// If `now` is earlier than [`time`](Self::time).
    pub fn reset(&mut self, now: I) {
        assert!(now >= self.time, "reset: instant precedes tracker time");

        self.time = now;
        self.next_report = self.boundary_after(now);
        self.run_time_in_window = I::Duration::ZERO;

        #[cfg(feature = "defmt")]
        defmt::debug!("load tracker reset, thread {}", self.thread_state);
    }

    /// Records a task that ran from `start` to `end`.
    ///
    /// The gap since the last known instant is accounted as idle, the task
    /// itself as running. While paused the task only moves the clock.
    ///
    /// # Panics
    /// If `start` is earlier than [`time`](Self::time) or `end` is earlier than `start`.
    pub fn record_task_time(&mut self, start: I, end: I) {
        assert!(end >= start, "record_task_time: task ends before it starts");

        self.advance(start, TaskState::Idle);
        self.advance(end, TaskState::Running);
    }

    /// Advances to `now` as idle time.
    pub fn record_idle(&mut self, now: I) {
        self.advance(now, TaskState::Idle);
    }

    /// Returns the last instant the tracker knows about.
    pub fn time(&self) -> I {
        self.time
    }

    /// Returns the instant at which the current window closes.
    pub fn next_report_instant(&self) -> I {
        self.next_report
    }

    /// Returns the current thread state.
    pub fn thread_state(&self) -> ThreadState {
        self.thread_state
    }

    /// Returns true if the thread is currently paused.
    pub fn is_paused(&self) -> bool {
        self.thread_state == ThreadState::Paused
    }

    /// Returns the instant of the last pause or resume (construction if none).
    pub fn last_state_change(&self) -> I {
        self.last_state_change
    }

    /// Returns the window length.
    pub fn reporting_interval(&self) -> I::Duration {
        self.reporting_interval
    }

    /// Returns the run time accumulated in the current, not yet reported, window.
    pub fn run_time_in_window(&self) -> I::Duration {
        self.run_time_in_window
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the tracker and returns the sink. Pending run time is discarded.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn set_thread_state(&mut self, state: ThreadState, now: I) {
        #[cfg(feature = "defmt")]
        defmt::debug!("thread {} -> {}", self.thread_state, state);

        self.thread_state = state;
        self.last_state_change = now;
    }

    /// Moves `time` forward to `now`, reporting every window boundary crossed.
    fn advance(&mut self, now: I, task_state: TaskState) {
        assert!(now >= self.time, "load tracker time must not go backwards");

        let counts_as_load = self.thread_state.counts_as_load(task_state);

        #[cfg(feature = "defmt")]
        let mut crossed: u32 = 0;

        while self.time < now {
            // Stop at whichever comes first: the target or the window end
            let boundary = if now < self.next_report {
                now
            } else {
                self.next_report
            };

            if counts_as_load {
                let elapsed = boundary.duration_since(self.time);
                self.run_time_in_window = self.run_time_in_window.saturating_add(elapsed);
            }

            self.time = boundary;

            if self.time == self.next_report {
                // Window is closed before the sink sees it
                let instant = self.next_report;
                let load = self.load();
                self.run_time_in_window = I::Duration::ZERO;
                self.next_report = self.boundary_after(instant);

                #[cfg(feature = "defmt")]
                {
                    defmt::trace!("load report: {=f64}", load);
                    crossed += 1;
                }

                self.sink.on_report(instant, load);
            }
        }

        #[cfg(feature = "defmt")]
        {
            if crossed > 1 {
                defmt::debug!("catch-up crossed {=u32} reporting boundaries", crossed);
            }
        }
    }

    fn load(&self) -> f64 {
        self.run_time_in_window.as_nanos() as f64 / self.reporting_interval.as_nanos() as f64
    }

    fn boundary_after(&self, instant: I) -> I {
        match instant.checked_add(self.reporting_interval) {
            Some(boundary) => boundary,
            None => panic!("reporting boundary overflows the instant type"),
        }
    }
}
