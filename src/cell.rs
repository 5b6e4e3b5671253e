use crate::{Behavior, ExclusiveMode, ModeMismatch, SharedMode};
use std::{
    cell::UnsafeCell,
    fmt::{self, Debug},
    ops::{Deref, DerefMut},
};

//------------------------------------------------------------------------------------------------
//  ExclusiveCell
//------------------------------------------------------------------------------------------------

/// A cell that only gives mutable access to its value when the [`ExclusiveMode`] of the
/// [`SharedMode`] that created it is provided.
///
/// There is exactly one `ExclusiveCell` per value: it is not `Clone`. Read-only handles are
/// obtained with [`ExclusiveCell::as_shared`].
pub struct ExclusiveCell<T, B>
where
    B: Behavior,
{
    pub(crate) tag: B::Container<()>,
    data: B::Container<UnsafeCell<T>>,
}

impl<T, B> ExclusiveCell<T, B>
where
    B: Behavior,
{
    pub(crate) fn new(value: T, mode: &SharedMode<B>) -> Self {
        Self {
            tag: mode.tag.clone(),
            data: B::new(UnsafeCell::new(value)),
        }
    }

    /// Returns a [`RefMut`] giving exclusive access to the contained value.
    ///
    /// # Panics
    ///
    /// If `mode` does not belong to the [`SharedMode`] that created this cell.
    #[track_caller]
    #[must_use]
    pub fn get_mut<'a>(&'a mut self, mode: ExclusiveMode<'a, B>) -> RefMut<'a, T, B> {
        match self.try_get_mut(mode) {
            Ok(value) => value,
            Err(e) => e.raise("ExclusiveCell::get_mut"),
        }
    }

    /// Returns a [`RefMut`] giving exclusive access to the contained value, or a
    /// [`ModeMismatch`] if `mode` does not belong to the [`SharedMode`] that created this cell.
    ///
    /// # Errors
    ///
    /// [`ModeMismatch`] when the cell was created by another mode.
    pub fn try_get_mut<'a>(
        &'a mut self,
        mode: ExclusiveMode<'a, B>,
    ) -> Result<RefMut<'a, T, B>, ModeMismatch> {
        if !mode.0.is_tag(&self.tag) {
            log::warn!("ExclusiveCell accessed with a foreign ExclusiveMode");
            return Err(ModeMismatch);
        }
        Ok(RefMut {
            cell: self,
            _mode: mode,
        })
    }

    /// Returns a read-only handle to this cell's value.
    #[must_use]
    pub fn as_shared(&self) -> SharedCell<T, B> {
        SharedCell {
            tag: self.tag.clone(),
            data: self.data.clone(),
        }
    }
}

// SAFETY: The value can be reached from other threads through `SharedCell`s (`&T`) and
// dropped on any of them, which is exactly what `Container<T>: Send` requires for a
// thread-safe container.
unsafe impl<T, B> Send for ExclusiveCell<T, B>
where
    B: Behavior,
    B::Container<T>: Send,
    B::Container<()>: Send,
{
}

// SAFETY: `&ExclusiveCell` only gives access to `as_shared`, see `Send`.
unsafe impl<T, B> Sync for ExclusiveCell<T, B>
where
    B: Behavior,
    B::Container<T>: Sync,
    B::Container<()>: Sync,
{
}

impl<T, B> Debug for ExclusiveCell<T, B>
where
    B: Behavior,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExclusiveCell").finish_non_exhaustive()
    }
}

//------------------------------------------------------------------------------------------------
//  SharedCell
//------------------------------------------------------------------------------------------------

/// A read-only handle to the value of an [`ExclusiveCell`].
pub struct SharedCell<T, B>
where
    B: Behavior,
{
    pub(crate) tag: B::Container<()>,
    data: B::Container<UnsafeCell<T>>,
}

impl<T, B> SharedCell<T, B>
where
    B: Behavior,
{
    /// Returns a read-only reference to the contained value.
    ///
    /// # Panics
    ///
    /// If `mode` is not the [`SharedMode`] that created this cell.
    #[track_caller]
    #[must_use]
    pub fn get<'a>(&'a self, mode: &'a SharedMode<B>) -> &'a T {
        match self.try_get(mode) {
            Ok(value) => value,
            Err(e) => e.raise("SharedCell::get"),
        }
    }

    /// Returns a read-only reference to the contained value, or a [`ModeMismatch`] if `mode`
    /// is not the [`SharedMode`] that created this cell.
    ///
    /// # Errors
    ///
    /// [`ModeMismatch`] when the cell was created by another mode.
    pub fn try_get<'a>(&'a self, mode: &'a SharedMode<B>) -> Result<&'a T, ModeMismatch> {
        if !mode.is_tag(&self.tag) {
            log::warn!("SharedCell accessed with a foreign SharedMode");
            return Err(ModeMismatch);
        }
        // SAFETY: `mode` is borrowed for `'a`, so no `ExclusiveMode` of it can exist and
        // therefore no `RefMut` into this cell either.
        Ok(unsafe { &*self.data.get() })
    }
}

impl<T, B> Clone for SharedCell<T, B>
where
    B: Behavior,
{
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            data: self.data.clone(),
        }
    }
}

// SAFETY: Same conditions as `ExclusiveCell`.
unsafe impl<T, B> Send for SharedCell<T, B>
where
    B: Behavior,
    B::Container<T>: Send,
    B::Container<()>: Send,
{
}

// SAFETY: Same conditions as `ExclusiveCell`.
unsafe impl<T, B> Sync for SharedCell<T, B>
where
    B: Behavior,
    B::Container<T>: Sync,
    B::Container<()>: Sync,
{
}

impl<T, B> Debug for SharedCell<T, B>
where
    B: Behavior,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCell").finish_non_exhaustive()
    }
}

//------------------------------------------------------------------------------------------------
//  RefMut
//------------------------------------------------------------------------------------------------

/// Exclusive access to the contents of an [`ExclusiveCell`].
///
/// Created from a mutable borrow of the cell together with the [`ExclusiveMode`], so it cannot
/// outlive the write session.
pub struct RefMut<'a, T, B>
where
    B: Behavior,
{
    cell: &'a ExclusiveCell<T, B>,
    _mode: ExclusiveMode<'a, B>,
}

impl<T, B> Deref for RefMut<'_, T, B>
where
    B: Behavior,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        // SAFETY: The `ExclusiveMode` guarantees that no `&SharedMode` can be used to read
        // through a `SharedCell`, and the `ExclusiveCell` is borrowed mutably.
        unsafe { &*self.cell.data.get() }
    }
}

impl<T, B> DerefMut for RefMut<'_, T, B>
where
    B: Behavior,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: See `deref`. `get_mut` borrows the `ExclusiveCell` mutably for `'a` and it is
        // not `Clone`, so no other `RefMut` into the same value can exist.
        unsafe { &mut *self.cell.data.get() }
    }
}

impl<T, B> Debug for RefMut<'_, T, B>
where
    T: Debug,
    B: Behavior,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefMut").field(&**self).finish()
    }
}

#[cfg(test)]
mod test {
    use crate::*;

    #[test]
    fn write_then_read() {
        let mut mode = SharedMode::new();
        let mut a = mode.new_cell(1);
        let b = a.as_shared();

        let writer = mode.as_exclusive();
        let mut a_value = a.get_mut(writer);
        *a_value = 2;

        assert_eq!(*b.get(&mode), 2);
    }

    #[test]
    fn exclusive_mode_is_reusable_across_cells() {
        let mut mode = SharedMode::new();
        let mut a = mode.new_cell(String::from("a"));
        let mut b = mode.new_cell(String::from("b"));

        let exclusive = mode.as_exclusive();
        a.get_mut(exclusive).push('1');
        b.get_mut(exclusive).push('2');

        assert_eq!(a.as_shared().get(&mode), "a1");
        assert_eq!(b.as_shared().get(&mode), "b2");
    }

    #[test]
    fn shared_clones_see_writes() {
        let mut mode = SharedMode::new();
        let mut cell = mode.new_cell(vec![1]);
        let first = cell.as_shared();
        let second = first.clone();

        cell.get_mut(mode.as_exclusive()).push(2);

        assert_eq!(first.get(&mode), &[1, 2]);
        assert_eq!(second.get(&mode), &[1, 2]);
    }

    #[test]
    fn try_get_rejects_foreign_mode() {
        let mode = SharedMode::new();
        let other = SharedMode::new();
        let cell = mode.new_cell(1);

        assert_eq!(cell.as_shared().try_get(&other), Err(ModeMismatch));
        assert_eq!(cell.as_shared().try_get(&mode), Ok(&1));
    }

    #[test]
    fn try_get_mut_rejects_foreign_mode() {
        let mode = SharedMode::new();
        let mut other = SharedMode::new();
        let mut cell = mode.new_cell(1);

        let err = cell.try_get_mut(other.as_exclusive()).unwrap_err();
        assert_eq!(err, ModeMismatch);
    }

    #[test]
    #[should_panic(expected = "SharedCell::get")]
    fn get_panics_on_foreign_mode() {
        let mode = SharedMode::new();
        let other = SharedMode::new();
        let cell = mode.new_cell(1);
        let _ = cell.as_shared().get(&other);
    }

    #[test]
    #[should_panic(expected = "ExclusiveCell::get_mut")]
    fn get_mut_panics_on_foreign_mode() {
        let mode = SharedMode::new();
        let mut other = SharedMode::new();
        let mut cell = mode.new_cell(1);
        let _ = cell.get_mut(other.as_exclusive());
    }

    #[test]
    fn value_is_dropped_with_last_handle() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        let mode = SharedMode::new();
        let cell = mode.new_cell(tracker.clone());
        let shared = cell.as_shared();

        drop(cell);
        assert_eq!(Rc::strong_count(&tracker), 2);
        assert_eq!(Rc::strong_count(shared.get(&mode)), 2);
        drop(shared);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn ref_mut_debug_shows_value() {
        let mut mode = SharedMode::new();
        let mut cell = mode.new_cell(7);
        assert_eq!(format!("{:?}", cell.get_mut(mode.as_exclusive())), "RefMut(7)");
        assert_eq!(format!("{cell:?}"), "ExclusiveCell { .. }");
    }
}
