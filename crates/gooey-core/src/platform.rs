//! Platform abstraction traits for the frame runtime.
//!
//! These let the host decide how frames are requested and where frame
//! timestamps come from, without the runtime depending on a windowing system.

use web_time::Instant;

/// Asks the host to produce a new frame.
///
/// Invoked whenever a frame callback is registered on an idle runtime.
pub trait FrameScheduler {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for frame ticks.
pub trait Clock {
    /// Instant type produced by this clock implementation.
    type Instant: Copy;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of nanoseconds elapsed since `since`.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;
}

/// Wall clock backed by `web-time`, so it also works on wasm targets.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_nanos(&self, since: Instant) -> u64 {
        u64::try_from(since.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_never_runs_backwards() {
        let clock = SystemClock;
        let start = clock.now();
        let first = clock.elapsed_nanos(start);
        let second = clock.elapsed_nanos(start);
        assert!(second >= first);
    }
}
