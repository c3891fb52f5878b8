use crate::platform::RuntimeScheduler;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::{Rc, Weak};
use std::sync::Arc;

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnOnce(u64)>;

/// Delivers one-shot callbacks on the next frame.
///
/// The host drives the clock by calling [`FrameClock::drain_frame_callbacks`]
/// once per presented frame. Callbacks registered while a drain is running are
/// deferred to the following frame, so an animation that re-registers itself
/// advances exactly one step per frame.
#[derive(Clone)]
pub struct FrameClock {
    inner: Rc<RefCell<FrameClockInner>>,
}

struct FrameClockInner {
    callbacks: SmallVec<[(FrameCallbackId, FrameCallback); 4]>,
    /// Ids cancelled while their batch was already taken for draining.
    cancelled_in_drain: SmallVec<[FrameCallbackId; 4]>,
    draining: bool,
    next_id: FrameCallbackId,
    last_frame_nanos: Option<u64>,
    scheduler: Option<Arc<dyn RuntimeScheduler>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(FrameClockInner {
                callbacks: SmallVec::new(),
                cancelled_in_drain: SmallVec::new(),
                draining: false,
                next_id: 1,
                last_frame_nanos: None,
                scheduler: None,
            })),
        }
    }

    /// Creates a clock that asks `scheduler` for a frame whenever work is queued.
    pub fn with_scheduler(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        let clock = Self::new();
        clock.inner.borrow_mut().scheduler = Some(scheduler);
        clock
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let (id, scheduler) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.callbacks.push((id, Box::new(callback)));
            (id, inner.scheduler.clone())
        };
        if let Some(scheduler) = scheduler {
            scheduler.schedule_frame();
        }
        FrameCallbackRegistration {
            clock: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| callback(nanos / 1_000_000))
    }

    /// Runs every callback queued before this call with `frame_time_nanos`.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let batch = {
            let mut inner = self.inner.borrow_mut();
            if inner.draining {
                log::warn!("nested frame drain ignored at {frame_time_nanos}ns");
                return;
            }
            inner.draining = true;
            inner.last_frame_nanos = Some(frame_time_nanos);
            mem::take(&mut inner.callbacks)
        };
        let _guard = DrainGuard { clock: &self.inner };

        for (id, callback) in batch {
            let cancelled = self.inner.borrow().cancelled_in_drain.contains(&id);
            if !cancelled {
                callback(frame_time_nanos);
            }
        }
    }

    pub fn has_pending_callbacks(&self) -> bool {
        !self.inner.borrow().callbacks.is_empty()
    }

    pub fn pending_callback_count(&self) -> usize {
        self.inner.borrow().callbacks.len()
    }

    /// Timestamp of the most recent drain, if any frame has run yet.
    pub fn last_frame_nanos(&self) -> Option<u64> {
        self.inner.borrow().last_frame_nanos
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("FrameClock")
            .field("pending", &inner.callbacks.len())
            .field("last_frame_nanos", &inner.last_frame_nanos)
            .finish()
    }
}

impl FrameClockInner {
    fn cancel(&mut self, id: FrameCallbackId) {
        let before = self.callbacks.len();
        self.callbacks.retain(|(queued, _)| *queued != id);
        if self.callbacks.len() == before && self.draining {
            self.cancelled_in_drain.push(id);
        }
    }
}

/// Ends a drain on drop, so a panicking callback does not leave the clock
/// stuck in draining mode.
struct DrainGuard<'a> {
    clock: &'a RefCell<FrameClockInner>,
}

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.clock.try_borrow_mut() {
            inner.cancelled_in_drain.clear();
            inner.draining = false;
        }
    }
}

/// Keeps a frame callback alive; cancelling or dropping it unregisters the callback.
pub struct FrameCallbackRegistration {
    clock: Weak<RefCell<FrameClockInner>>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn id(&self) -> Option<FrameCallbackId> {
        self.id
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(clock) = self.clock.upgrade() {
                // A callback may drop its own registration while running; the
                // clock is only borrowed between callbacks so this cannot clash.
                clock.borrow_mut().cancel(id);
            }
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for FrameCallbackRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameCallbackRegistration")
            .field("id", &self.id)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
