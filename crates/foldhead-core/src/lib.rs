//! Single-threaded runtime pieces for Foldhead.
//!
//! - [`MutableState`]: an observable value with explicit subscriptions
//! - [`FrameClock`]: one-shot frame callbacks with cancellable registrations
//! - [`platform`]: host hooks for frame scheduling and wall-clock time

mod frame_clock;
pub mod platform;
mod state;

pub use frame_clock::{FrameCallbackId, FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, RuntimeScheduler, SystemClock};
pub use state::{MutableState, Subscription};

/// Nanoseconds in one 60Hz frame, used by hosts and tests that step time manually.
pub const FRAME_NANOS_60HZ: u64 = 16_666_667;
