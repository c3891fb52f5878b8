//! Platform abstraction traits for runtime services.
//!
//! These let the header runtime ask the host for frames and read time
//! without depending on a particular windowing or event-loop crate.

use web_time::Instant;

/// Schedules work for the runtime.
///
/// Implementations are responsible for arranging a frame after new frame
/// callbacks are registered. They must be safe to use from multiple threads.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64;

    /// Returns the number of nanoseconds elapsed since `since`.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;
}

/// Wall clock backed by `web_time`, usable on native and wasm targets.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_millis(&self, since: Instant) -> u64 {
        since.elapsed().as_millis() as u64
    }

    fn elapsed_nanos(&self, since: Instant) -> u64 {
        since.elapsed().as_nanos() as u64
    }
}
