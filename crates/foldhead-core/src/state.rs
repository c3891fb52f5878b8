//! Observable state cells.
//!
//! A [`MutableState`] is a cheap, cloneable handle to a shared value. Writers
//! call [`MutableState::set`]; readers either pull with [`MutableState::get`] or
//! push-subscribe with [`MutableState::subscribe`]. There is no implicit
//! dependency tracking: whoever mutates a value is responsible for updating
//! anything derived from it.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Observer<T> = Rc<dyn Fn(&T)>;

pub struct MutableState<T> {
    inner: Rc<StateInner<T>>,
}

struct StateInner<T> {
    value: RefCell<T>,
    /// Insertion-ordered so observers fire in subscription order.
    observers: RefCell<IndexMap<u64, Observer<T>, FxBuildHasher>>,
    next_observer_id: Cell<u64>,
}

impl<T: Clone + PartialEq + 'static> MutableState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(StateInner {
                value: RefCell::new(initial),
                observers: RefCell::new(IndexMap::with_hasher(FxBuildHasher)),
                next_observer_id: Cell::new(1),
            }),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Stores `value` and notifies observers if it differs from the previous one.
    ///
    /// Returns whether the value changed. Observers run after the write has
    /// landed, so they may freely read this or any other state.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value;
        }
        self.notify();
        true
    }

    /// Registers `observer`, which is called with the new value after every change.
    ///
    /// The observer stays registered until the returned [`Subscription`] is
    /// cancelled or dropped.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_observer_id.get();
        self.inner.next_observer_id.set(id + 1);
        self.inner
            .observers
            .borrow_mut()
            .insert(id, Rc::new(observer));

        let weak: Weak<StateInner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.observers.borrow_mut().shift_remove(&id);
            }
        })
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    fn notify(&self) {
        // Snapshot first: observers may subscribe or unsubscribe while running.
        let observers: SmallVec<[Observer<T>; 4]> =
            self.inner.observers.borrow().values().cloned().collect();
        if observers.is_empty() {
            return;
        }
        let value = self.get();
        for observer in observers {
            observer(&value);
        }
    }
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.inner.value.borrow())
            .field("observers", &self.inner.observers.borrow().len())
            .finish()
    }
}

/// Handle for an active observer. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
