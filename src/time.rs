//! Time abstraction traits for platform-agnostic timing.
//!
//! The tracker never reads a clock. Every instant is handed in by the caller,
//! so any monotonic timer works once these traits are implemented for it.

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to nanoseconds.
    fn as_nanos(&self) -> u64;

    /// Saturating addition (returns the maximum representable value on overflow).
    fn saturating_add(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
///
/// Instants must be monotonic: the ordering given by `PartialOrd` is the order
/// in which they happened.
pub trait TimeInstant: Copy + PartialEq + PartialOrd {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}

impl TimeDuration for core::time::Duration {
    const ZERO: Self = core::time::Duration::ZERO;

    fn as_nanos(&self) -> u64 {
        // u64 nanoseconds cover more than 500 years
        u64::try_from(core::time::Duration::as_nanos(self)).unwrap_or(u64::MAX)
    }

    fn saturating_add(self, other: Self) -> Self {
        core::time::Duration::saturating_add(self, other)
    }
}

#[cfg(feature = "std")]
impl TimeInstant for std::time::Instant {
    type Duration = core::time::Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        std::time::Instant::duration_since(self, earlier)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        std::time::Instant::checked_add(&self, duration)
    }
}
