//! Types for using this crate with multi-threaded code.
//!
//! A [`SharedMode`] of this module is `Send + Sync`, so the right to read or write a whole
//! group of cells can be handed to another thread by moving a single value.

use crate::Behavior;
use std::sync::Arc;

/// A [`SharedMode`](crate::SharedMode) using the [`ThreadSafe`] behavior.
pub type SharedMode = crate::SharedMode<ThreadSafe>;
/// An [`ExclusiveMode`](crate::ExclusiveMode) using the [`ThreadSafe`] behavior.
pub type ExclusiveMode<'a> = crate::ExclusiveMode<'a, ThreadSafe>;
/// A [`SharedCell`](crate::SharedCell) using the [`ThreadSafe`] behavior.
pub type SharedCell<T> = crate::SharedCell<T, ThreadSafe>;
/// An [`ExclusiveCell`](crate::ExclusiveCell) using the [`ThreadSafe`] behavior.
pub type ExclusiveCell<T> = crate::ExclusiveCell<T, ThreadSafe>;
/// A [`RefMut`](crate::RefMut) using the [`ThreadSafe`] behavior.
pub type RefMut<'a, T> = crate::RefMut<'a, T, ThreadSafe>;

/// A [`Behavior`] that uses [`Arc`] for thread-safety.
#[derive(Debug)]
pub enum ThreadSafe {}

unsafe impl Behavior for ThreadSafe {
    type Container<T> = Arc<T>;

    fn new<T>(value: T) -> Self::Container<T> {
        Arc::new(value)
    }

    fn ptr_eq<T>(a: &Self::Container<T>, b: &Self::Container<T>) -> bool {
        Arc::ptr_eq(a, b)
    }
}
