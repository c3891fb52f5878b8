//! Robot testing harness for the collapsing header
//!
//! The robot wires a header, a list and a pointer dispatcher together the way
//! a host UI would, then lets a test drive them with pointer gestures and
//! synthetic frame time.
//!
//! # Example
//!
//! ```
//! use foldhead_testing::HeaderRobot;
//!
//! let mut robot = HeaderRobot::new();
//! robot.swipe(400.0, 200.0, 8);
//! robot.wait_for_idle();
//! assert_eq!(robot.height().0, 125.0);
//! ```

use foldhead_core::{FrameClock, FRAME_NANOS_60HZ};
use foldhead_foundation::{ListDragInput, ListScrollState, PointerDispatcher, PointerEvent};
use foldhead_ui::{CollapsingHeaderState, HeaderConfig, HeaderConfigError, TitleVisuals};
use foldhead_ui_graphics::{Dp, Point};

/// Upper bound on frames pumped by [`HeaderRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 600;

pub struct HeaderRobot {
    clock: FrameClock,
    header: CollapsingHeaderState,
    list: ListScrollState,
    dispatcher: PointerDispatcher,
    pointer: Point,
    frame_time_nanos: u64,
}

impl HeaderRobot {
    /// A default header over a 100-row list with 56dp rows in a 640dp viewport.
    pub fn new() -> Self {
        let clock = FrameClock::new();
        let header = CollapsingHeaderState::new(clock.clone());
        Self::assemble(clock, header, ListScrollState::new(100, 56.0, 640.0))
    }

    pub fn with_config(config: HeaderConfig, list: ListScrollState) -> Result<Self, HeaderConfigError> {
        let clock = FrameClock::new();
        let header = CollapsingHeaderState::with_config(clock.clone(), config)?;
        Ok(Self::assemble(clock, header, list))
    }

    fn assemble(clock: FrameClock, header: CollapsingHeaderState, list: ListScrollState) -> Self {
        let mut dispatcher = PointerDispatcher::new();
        header.attach(&mut dispatcher, list.clone());
        ListDragInput::new(list.clone(), header.scroll_arbiter()).attach(&mut dispatcher);
        Self {
            clock,
            header,
            list,
            dispatcher,
            pointer: Point::new(180.0, 400.0),
            frame_time_nanos: 0,
        }
    }

    pub fn header(&self) -> &CollapsingHeaderState {
        &self.header
    }

    pub fn list(&self) -> &ListScrollState {
        &self.list
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn height(&self) -> Dp {
        self.header.height()
    }

    pub fn progress(&self) -> f32 {
        self.header.progress()
    }

    pub fn visuals(&self) -> TitleVisuals {
        self.header.visuals()
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.pointer = Point::new(x, y);
        self.dispatch(PointerEvent::down(self.pointer));
    }

    /// Moves the held pointer to `y`, keeping its x.
    pub fn move_to(&mut self, y: f32) {
        self.pointer = Point::new(self.pointer.x, y);
        self.dispatch(PointerEvent::drag(self.pointer));
    }

    pub fn release(&mut self) {
        self.dispatch(PointerEvent::up(self.pointer));
    }

    pub fn cancel(&mut self) {
        self.dispatch(PointerEvent::cancel(self.pointer));
    }

    /// Moves the held pointer by `delta_y` in `steps` equal samples.
    pub fn drag_by(&mut self, delta_y: f32, steps: usize) {
        let steps = steps.max(1);
        let start = self.pointer.y;
        for step in 1..=steps {
            self.move_to(start + delta_y * step as f32 / steps as f32);
        }
    }

    /// Press at `from_y`, drag to `to_y` in `steps` samples, release.
    pub fn swipe(&mut self, from_y: f32, to_y: f32, steps: usize) {
        self.press(self.pointer.x, from_y);
        self.drag_by(to_y - from_y, steps);
        self.release();
    }

    /// Presents one 60Hz frame and returns the header height after it.
    pub fn advance_frame(&mut self) -> Dp {
        self.frame_time_nanos += FRAME_NANOS_60HZ;
        self.clock.drain_frame_callbacks(self.frame_time_nanos);
        self.height()
    }

    /// Presents frames until at least `millis` of frame time has passed.
    pub fn advance_time(&mut self, millis: u64) {
        let until = self.frame_time_nanos + millis * 1_000_000;
        while self.frame_time_nanos < until {
            self.advance_frame();
        }
    }

    /// Pumps frames until nothing is scheduled. Returns the heights seen.
    pub fn wait_for_idle(&mut self) -> Vec<Dp> {
        let mut heights = Vec::new();
        while self.clock.has_pending_callbacks() {
            if heights.len() >= MAX_IDLE_FRAMES {
                log::warn!("robot gave up waiting for idle after {MAX_IDLE_FRAMES} frames");
                break;
            }
            heights.push(self.advance_frame());
        }
        heights
    }

    fn dispatch(&self, event: PointerEvent) {
        log::trace!("robot {:?} at {:?}", event.kind, event.position);
        self.dispatcher.dispatch(&event);
    }
}

impl Default for HeaderRobot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_by_splits_into_equal_samples() {
        let mut robot = HeaderRobot::new();
        robot.press(10.0, 400.0);
        robot.drag_by(-100.0, 4);
        assert_eq!(robot.pointer(), Point::new(10.0, 300.0));
        assert_eq!(robot.height(), Dp(200.0));
    }

    #[test]
    fn advance_time_rounds_up_to_whole_frames() {
        let mut robot = HeaderRobot::new();
        robot.advance_time(100);
        assert_eq!(robot.frame_time_nanos(), 6 * FRAME_NANOS_60HZ);
    }

    #[test]
    fn idle_robot_pumps_no_frames() {
        let mut robot = HeaderRobot::new();
        assert!(robot.wait_for_idle().is_empty());
    }
}
