//! Tween animation primitives for Foldhead.
//!
//! The types here are pure: they turn a frame timestamp into a value. Hooking
//! an animation to a [`FrameClock`](https://docs.rs/foldhead-core) is left to
//! the owner so that it decides who is allowed to write the animated value.

mod animation;
mod easing;

pub use animation::*;
pub use easing::*;
