//! Event-based control for load trackers.

use crate::time::TimeInstant;

/// Notifications a scheduler feeds into a [`LoadTracker`](crate::LoadTracker).
///
/// Useful when boundaries are collected on a hot path and replayed later with
/// [`LoadTracker::handle_event`](crate::LoadTracker::handle_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrackerEvent<I: TimeInstant> {
    /// Thread paused.
    Pause(I),
    /// Thread resumed.
    Resume(I),
    /// Accounting history discarded.
    Reset(I),
    /// Task ran from `start` to `end`.
    TaskTime {
        /// Task start.
        start: I,
        /// Task end.
        end: I,
    },
    /// Thread idle up to this instant.
    Idle(I),
}

impl<I: TimeInstant> TrackerEvent<I> {
    /// Returns the latest instant this event refers to.
    pub fn instant(&self) -> I {
        match *self {
            TrackerEvent::Pause(now)
            | TrackerEvent::Resume(now)
            | TrackerEvent::Reset(now)
            | TrackerEvent::Idle(now) => now,
            TrackerEvent::TaskTime { end, .. } => end,
        }
    }
}
