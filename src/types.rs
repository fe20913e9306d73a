//! Core types for load accounting.

/// Whether the tracked thread is currently eligible to run tasks at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThreadState {
    /// Thread runs tasks. Task time counts towards load.
    Active,

    /// Thread is suspended. Time still passes and windows are still reported,
    /// but nothing counts towards load.
    Paused,
}

/// The activity a stretch of time is being advanced over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskState {
    /// A task was executing.
    Running,

    /// No task was executing.
    Idle,
}

impl ThreadState {
    /// Returns true if time spent in `task` counts as load while in this state.
    #[inline]
    pub fn counts_as_load(self, task: TaskState) -> bool {
        match (self, task) {
            (ThreadState::Active, TaskState::Running) => true,
            (ThreadState::Active, TaskState::Idle) => false,
            (ThreadState::Paused, TaskState::Running) => false,
            (ThreadState::Paused, TaskState::Idle) => false,
        }
    }
}

/// A single closed reporting window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoadReport<I> {
    /// Boundary at which the window closed.
    pub instant: I,

    /// Fraction of the window spent running tasks, in `0.0..=1.0`.
    pub load: f64,
}

impl<I> LoadReport<I> {
    /// Creates a new report.
    #[inline]
    pub fn new(instant: I, load: f64) -> Self {
        Self { instant, load }
    }
}

/// Tracker configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrackerError {
    /// Reporting interval is zero.
    NonPositiveInterval,

    /// The first reporting boundary cannot be represented by the instant type.
    InstantOverflow,
}

impl core::fmt::Display for TrackerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TrackerError::NonPositiveInterval => {
                write!(f, "reporting interval must be greater than zero")
            }
            TrackerError::InstantOverflow => {
                write!(f, "first reporting boundary overflows the instant type")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TrackerError {}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::string::ToString;

    #[test]
    fn only_active_running_counts_as_load() {
        assert!(ThreadState::Active.counts_as_load(TaskState::Running));
        assert!(!ThreadState::Active.counts_as_load(TaskState::Idle));
        assert!(!ThreadState::Paused.counts_as_load(TaskState::Running));
        assert!(!ThreadState::Paused.counts_as_load(TaskState::Idle));
    }

    #[test]
    fn error_messages_format_correctly_for_display() {
        assert_eq!(
            TrackerError::NonPositiveInterval.to_string(),
            "reporting interval must be greater than zero"
        );
        assert_eq!(
            TrackerError::InstantOverflow.to_string(),
            "first reporting boundary overflows the instant type"
        );
    }
}
