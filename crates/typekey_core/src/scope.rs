//! Scope guards: run an action, or release an owned array, exactly once at end of scope.

use std::fmt;
use std::ops::{Deref, DerefMut};

/// Run a zero-argument action when the guard is dropped.
///
/// The action runs exactly once on every exit path: normal fall-through, early `return`, `?` propagation and
/// unwinding.
///
/// ## Examples
/// ```rust
/// use std::cell::Cell;
/// use typekey_core::defer;
///
/// let calls = Cell::new(0);
/// {
///     let _guard = defer(|| calls.set(calls.get() + 1));
/// }
/// assert_eq!(calls.get(), 1);
/// ```
#[must_use = "the action runs when the guard is dropped; binding it to `_` drops it immediately"]
pub struct Defer<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> Defer<F> {
    pub fn new(action: F) -> Self {
        Self { action: Some(action) }
    }

    /// Disarm the guard; the action never runs.
    pub fn cancel(mut self) {
        self.action = None;
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl<F: FnOnce()> fmt::Debug for Defer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defer").field("armed", &self.action.is_some()).finish()
    }
}

/// Shorthand for [`Defer::new`].
pub fn defer<F: FnOnce()>(action: F) -> Defer<F> {
    Defer::new(action)
}

/// Sole owner of a heap-allocated array, released once when the wrapper leaves scope.
///
/// Deliberately not `Clone`: the array has exactly one owner.
pub struct ScopedArray<T> {
    items: Box<[T]>,
}

impl<T> ScopedArray<T> {
    pub fn new(items: Box<[T]>) -> Self {
        Self { items }
    }

    /// Give ownership of the array back to the caller.
    pub fn into_inner(self) -> Box<[T]> {
        self.items
    }
}

impl<T> From<Vec<T>> for ScopedArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items.into_boxed_slice())
    }
}

impl<T> Deref for ScopedArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> DerefMut for ScopedArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for ScopedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScopedArray").field(&self.items).finish()
    }
}
