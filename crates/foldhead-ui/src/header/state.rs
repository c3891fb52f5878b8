//! The collapsing header controller.
//!
//! Everything runs on one event loop: pointer samples, scroll arbitration and
//! frame callbacks never overlap, so the controller uses `Rc`/`RefCell`
//! rather than locks. Height has exactly two writers, both routed through
//! [`HeightModel::set_height`]: the drag reaction and the snap tween. While a
//! snap is in flight only a newer release may touch the height.

use super::height_model::HeightModel;
use super::snap::SnapTarget;
use super::visuals::TitleVisuals;
use crate::config::{HeaderConfig, HeaderConfigError};
use foldhead_animation::{TweenAnimation, TweenFrame};
use foldhead_core::{FrameCallbackRegistration, FrameClock, MutableState, Subscription};
use foldhead_foundation::{
    DragSignal, HeaderDragTracker, HeaderScrollArbiter, ListScrollState, PointerDispatcher,
    PointerEvent, PointerEventPass, PointerHandlerId,
};
use foldhead_ui_graphics::Dp;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

#[derive(Clone)]
pub struct CollapsingHeaderState {
    model: HeightModel,
    config: HeaderConfig,
    clock: FrameClock,
    inner: Rc<RefCell<HeaderInner>>,
}

struct HeaderInner {
    tracker: HeaderDragTracker,
    snap: TweenAnimation<Dp>,
    registration: Option<FrameCallbackRegistration>,
}

impl CollapsingHeaderState {
    /// Creates a header with the default dimensions, resting expanded.
    pub fn new(clock: FrameClock) -> Self {
        Self::build(clock, HeaderConfig::default())
    }

    pub fn with_config(clock: FrameClock, config: HeaderConfig) -> Result<Self, HeaderConfigError> {
        config.validate()?;
        Ok(Self::build(clock, config))
    }

    fn build(clock: FrameClock, config: HeaderConfig) -> Self {
        let model = HeightModel::new(&config);
        let inner = HeaderInner {
            tracker: HeaderDragTracker::new(),
            snap: TweenAnimation::idle(model.height()),
            registration: None,
        };
        Self {
            model,
            config,
            clock,
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn height(&self) -> Dp {
        self.model.height()
    }

    pub fn progress(&self) -> f32 {
        self.model.progress()
    }

    pub fn visuals(&self) -> TitleVisuals {
        TitleVisuals::with_spec(self.progress(), &self.config.title)
    }

    pub fn height_state(&self) -> MutableState<Dp> {
        self.model.height_state()
    }

    pub fn progress_state(&self) -> MutableState<f32> {
        self.model.progress_state()
    }

    /// Pushes fresh title visuals to `observer` after every progress change.
    pub fn observe_visuals(&self, observer: impl Fn(TitleVisuals) + 'static) -> Subscription {
        let spec = self.config.title;
        self.progress_state()
            .subscribe(move |progress| observer(TitleVisuals::with_spec(*progress, &spec)))
    }

    /// Nested scroll connection to install on the list.
    pub fn scroll_arbiter(&self) -> HeaderScrollArbiter {
        HeaderScrollArbiter::new(
            self.height_state(),
            self.config.collapsed_height,
            self.config.default_height,
        )
    }

    pub fn is_snapping(&self) -> bool {
        self.inner.borrow().snap.is_running()
    }

    /// Height the in-flight snap is heading to, if any.
    pub fn snap_target(&self) -> Option<Dp> {
        let inner = self.inner.borrow();
        inner.snap.is_running().then(|| *inner.snap.target())
    }

    /// Feeds one pointer sample, as delivered on the `Initial` pass.
    ///
    /// Drag samples adjust the height right away; a release starts the snap.
    /// The list is only read, for its top-boundary state.
    pub fn on_pointer_event(&self, event: &PointerEvent, list: &ListScrollState) -> Option<DragSignal> {
        let (signal, snapping) = {
            let mut inner = self.inner.borrow_mut();
            let signal = inner
                .tracker
                .on_pointer_event(event, list.is_at_top(), self.height());
            (signal, inner.snap.is_running())
        };

        match signal {
            Some(DragSignal::Scroll(_)) if snapping => {
                log::trace!("drag ignored while snapping");
            }
            Some(DragSignal::Scroll(gesture)) => {
                self.model.apply_gesture(&gesture);
            }
            Some(DragSignal::Release { height }) => self.release_at(height),
            None => {}
        }
        signal
    }

    /// Registers the header on `dispatcher`'s `Initial` pass so it sees every
    /// sample before the list does.
    pub fn attach(&self, dispatcher: &mut PointerDispatcher, list: ListScrollState) -> PointerHandlerId {
        let header = self.clone();
        dispatcher.add_handler(PointerEventPass::Initial, move |event, _| {
            header.on_pointer_event(event, &list);
        })
    }

    /// Settles the header from its current height, as a pointer release would.
    pub fn release(&self) {
        self.release_at(self.height());
    }

    fn release_at(&self, from: Dp) {
        let target = SnapTarget::for_height(from, &self.config);
        let target_height = target.height(&self.config);
        let mut inner = self.inner.borrow_mut();

        // Dropping the old registration cancels its pending frame.
        inner.registration = None;
        if from == target_height {
            inner.snap.stop();
            log::debug!("release at rest height {}", from.0);
            return;
        }

        let generation = inner.snap.start(from, target_height, self.config.snap);
        log::debug!(
            "snap #{generation}: {} -> {:?} ({})",
            from.0,
            target,
            target_height.0
        );
        inner.registration = Some(SnapDriver::new(self, generation).schedule());
    }
}

impl fmt::Debug for CollapsingHeaderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollapsingHeaderState")
            .field("height", &self.height())
            .field("progress", &self.progress())
            .field("snap_target", &self.snap_target())
            .finish()
    }
}

/// Frame-by-frame driver for one snap run.
///
/// Holds the controller weakly so a pending frame does not keep a dropped
/// header alive.
struct SnapDriver {
    inner: Weak<RefCell<HeaderInner>>,
    model: HeightModel,
    clock: FrameClock,
    generation: u64,
}

impl SnapDriver {
    fn new(state: &CollapsingHeaderState, generation: u64) -> Self {
        Self {
            inner: Rc::downgrade(&state.inner),
            model: state.model.clone(),
            clock: state.clock.clone(),
            generation,
        }
    }

    fn schedule(self) -> FrameCallbackRegistration {
        let clock = self.clock.clone();
        clock.with_frame_nanos(move |frame_time| self.on_frame(frame_time))
    }

    fn on_frame(self, frame_time_nanos: u64) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };

        let value = {
            let mut inner = inner.borrow_mut();
            match inner.snap.sample(self.generation, frame_time_nanos) {
                TweenFrame::Stale => return,
                TweenFrame::Running(value) => {
                    log::trace!("snap #{} frame -> {}", self.generation, value.0);
                    let model = self.model.clone();
                    let next = SnapDriver {
                        inner: self.inner.clone(),
                        model,
                        clock: self.clock.clone(),
                        generation: self.generation,
                    };
                    inner.registration = Some(next.schedule());
                    value
                }
                TweenFrame::Finished(value) => {
                    log::debug!("snap #{} settled at {}", self.generation, value.0);
                    inner.registration = None;
                    value
                }
            }
        };

        self.model.set_height(value);
    }
}

#[cfg(test)]
#[path = "../tests/header_state_tests.rs"]
mod tests;
