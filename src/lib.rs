#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LoadTracker`**: Measures the share of wall time one thread spends running tasks
//! - **`ReportSink`**: Trait to implement for whatever consumes load reports (closures work too)
//! - **`ReportBuffer`**: Fixed-capacity sink that stores reports for later draining
//! - **`TimeInstant`** / **`TimeDuration`**: Traits to implement for your timing system
//! - **`ThreadState`** / **`TaskState`**: Whether the thread can run tasks, and what it was doing
//! - **`TrackerEvent`**: Notifications that can be queued and replayed into a tracker
//!
//! Load is reported as an `f64` in the range 0.0-1.0, once per reporting interval,
//! computed at the resolution of your duration type (up to nanoseconds).

pub mod time;
pub mod types;
pub mod sink;
pub mod tracker;
pub mod event;

pub use event::TrackerEvent;
pub use sink::{ReportBuffer, ReportSink};
pub use time::{TimeDuration, TimeInstant};
pub use tracker::LoadTracker;
pub use types::{LoadReport, TaskState, ThreadState, TrackerError};
