//! Pure math/data for lengths and positions in Foldhead
//!
//! This crate holds the unit and geometry primitives shared by the gesture,
//! animation and header crates. Nothing here knows about pointer input or
//! frame timing.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Offset, Point};
    pub use crate::unit::Dp;
}
