//! Nested scroll protocol and the header's scroll arbitration.
//!
//! A scrollable child offers every delta to its [`NestedScrollConnection`]
//! before applying it. Whatever the connection returns as consumed is taken
//! off the delta; the child scrolls by the remainder.

use foldhead_core::MutableState;
use foldhead_ui_graphics::{Dp, Offset};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NestedScrollSource {
    /// Finger or mouse drag.
    UserInput,
    /// Programmatic or animated scroll.
    SideEffect,
}

pub trait NestedScrollConnection {
    /// Called before the child scrolls. Returns the part of `available` the
    /// parent consumes.
    fn on_pre_scroll(&self, available: Offset, source: NestedScrollSource) -> Offset {
        let _ = (available, source);
        Offset::ZERO
    }

    /// Called after the child scrolled by `consumed`, with `available` left over.
    fn on_post_scroll(
        &self,
        consumed: Offset,
        available: Offset,
        source: NestedScrollSource,
    ) -> Offset {
        let _ = (consumed, available, source);
        Offset::ZERO
    }
}

/// Where the header height currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderRegion {
    /// Above the default height.
    Overscrolled,
    /// Between collapsed (exclusive) and default (inclusive).
    Transitioning,
    /// At (or below) the collapsed height.
    Collapsed,
}

impl HeaderRegion {
    pub fn of(height: Dp, collapsed_height: Dp, default_height: Dp) -> Self {
        if height > default_height {
            HeaderRegion::Overscrolled
        } else if height > collapsed_height {
            HeaderRegion::Transitioning
        } else {
            HeaderRegion::Collapsed
        }
    }

    /// Whether the header takes the whole vertical delta in this region.
    pub fn claims_scroll(self) -> bool {
        !matches!(self, HeaderRegion::Collapsed)
    }
}

/// Decides, per scroll event, whether the header or the list gets the delta.
///
/// The height is read from shared state on every call; it is never cached,
/// because each claim can be followed by a height change.
#[derive(Clone, Debug)]
pub struct HeaderScrollArbiter {
    height: MutableState<Dp>,
    collapsed_height: Dp,
    default_height: Dp,
}

impl HeaderScrollArbiter {
    pub fn new(height: MutableState<Dp>, collapsed_height: Dp, default_height: Dp) -> Self {
        Self {
            height,
            collapsed_height,
            default_height,
        }
    }

    pub fn region(&self) -> HeaderRegion {
        HeaderRegion::of(self.height.get(), self.collapsed_height, self.default_height)
    }
}

impl NestedScrollConnection for HeaderScrollArbiter {
    fn on_pre_scroll(&self, available: Offset, _source: NestedScrollSource) -> Offset {
        let region = self.region();
        if region.claims_scroll() {
            log::trace!("header claims dy={} ({region:?})", available.y);
            Offset::vertical(available.y)
        } else {
            Offset::ZERO
        }
    }
}
