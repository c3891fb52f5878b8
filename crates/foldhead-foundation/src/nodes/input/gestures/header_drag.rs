//! Vertical drag tracking for the collapsing header.
//!
//! The tracker turns raw pointer samples into per-sample [`ScrollGesture`]s.
//! It keeps only the previous pressed position; gestures are handed to the
//! caller immediately and never buffered, so the newest sample always wins.

use crate::nodes::input::types::{PointerEvent, PointerEventKind};
use foldhead_ui_graphics::{Dp, Point};

/// Classification of one pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollGesture {
    /// Pulling down while the list sits at its top.
    pub is_overscrolling: bool,
    /// Finger moving up, which collapses the header.
    pub is_scrolling_up: bool,
    /// `current.y - previous.y` for this sample.
    pub delta_y: f32,
}

impl ScrollGesture {
    pub fn classify(delta_y: f32, is_at_top: bool) -> Self {
        Self {
            is_overscrolling: is_at_top && delta_y > 0.0,
            is_scrolling_up: delta_y < 0.0,
            delta_y,
        }
    }
}

/// Output of [`HeaderDragTracker::on_pointer_event`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragSignal {
    Scroll(ScrollGesture),
    /// The pointer was lifted or the gesture cancelled.
    Release {
        /// Header height at the moment of release.
        height: Dp,
    },
}

#[derive(Debug, Default, Clone)]
pub struct HeaderDragTracker {
    previous: Option<Point>,
}

impl HeaderDragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a pressed pointer is currently being tracked.
    pub fn is_tracking(&self) -> bool {
        self.previous.is_some()
    }

    /// Feeds one pointer sample.
    ///
    /// `is_at_top` is the list's current top-boundary state and `height` the
    /// current header height; both are read fresh by the caller per sample.
    pub fn on_pointer_event(
        &mut self,
        event: &PointerEvent,
        is_at_top: bool,
        height: Dp,
    ) -> Option<DragSignal> {
        match event.kind {
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.previous = None;
                Some(DragSignal::Release { height })
            }
            PointerEventKind::Down => {
                self.previous = Some(event.position);
                None
            }
            PointerEventKind::Move if !event.pressed => {
                self.previous = None;
                None
            }
            PointerEventKind::Move => {
                let previous = self.previous.replace(event.position)?;
                if previous == event.position {
                    return None;
                }
                let delta_y = (event.position - previous).y;
                let gesture = ScrollGesture::classify(delta_y, is_at_top);
                log::trace!(
                    "drag dy={delta_y} overscroll={} up={}",
                    gesture.is_overscrolling,
                    gesture.is_scrolling_up
                );
                Some(DragSignal::Scroll(gesture))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/header_drag_tests.rs"]
mod tests;
