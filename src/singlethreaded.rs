//! Aliases for the [`SingleThreaded`] behavior.

use crate::SingleThreaded;

/// A [`SharedMode`](crate::SharedMode) using the [`SingleThreaded`] behavior.
pub type SharedMode = crate::SharedMode<SingleThreaded>;
/// An [`ExclusiveMode`](crate::ExclusiveMode) using the [`SingleThreaded`] behavior.
pub type ExclusiveMode<'a> = crate::ExclusiveMode<'a, SingleThreaded>;
/// A [`SharedCell`](crate::SharedCell) using the [`SingleThreaded`] behavior.
pub type SharedCell<T> = crate::SharedCell<T, SingleThreaded>;
/// An [`ExclusiveCell`](crate::ExclusiveCell) using the [`SingleThreaded`] behavior.
pub type ExclusiveCell<T> = crate::ExclusiveCell<T, SingleThreaded>;
/// A [`RefMut`](crate::RefMut) using the [`SingleThreaded`] behavior.
pub type RefMut<'a, T> = crate::RefMut<'a, T, SingleThreaded>;
