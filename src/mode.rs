use crate::{Behavior, ExclusiveCell, SharedCell, SingleThreaded};
use std::fmt::{self, Debug};

//------------------------------------------------------------------------------------------------
//  SharedMode
//------------------------------------------------------------------------------------------------

/// A tag that allows read-only access to its associated cells.
///
/// Mutably borrowing it through [`SharedMode::as_exclusive`] gives an [`ExclusiveMode`],
/// which allows writing to the same cells. Since this type is not `Clone`, the borrow checker
/// guarantees that reads and writes never overlap.
pub struct SharedMode<B>
where
    B: Behavior,
{
    pub(crate) tag: B::Container<()>,
}

impl<B> Default for SharedMode<B>
where
    B: Behavior,
{
    fn default() -> Self {
        Self { tag: B::new(()) }
    }
}

impl SharedMode<SingleThreaded> {
    /// Returns a new mode that can only be used in single-threaded code.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "threadsafe")]
impl SharedMode<crate::threadsafe::ThreadSafe> {
    /// Returns a new mode that can be sent between threads.
    #[must_use]
    pub fn new_threadsafe() -> Self {
        Self::default()
    }
}

impl<B> SharedMode<B>
where
    B: Behavior,
{
    /// Begin a write session, allowing mutable access to associated [`ExclusiveCell`]s.
    ///
    /// This only borrows `self` and has no runtime cost.
    #[must_use]
    pub fn as_exclusive(&mut self) -> ExclusiveMode<'_, B> {
        ExclusiveMode(self)
    }

    /// Returns a new [`ExclusiveCell`] associated with this mode.
    #[must_use]
    pub fn new_cell<T>(&self, value: T) -> ExclusiveCell<T, B> {
        ExclusiveCell::new(value, self)
    }

    /// Whether `cell` was created by this mode.
    #[must_use]
    pub fn owns_exclusive<T>(&self, cell: &ExclusiveCell<T, B>) -> bool {
        self.is_tag(&cell.tag)
    }

    /// Whether `cell` was created by this mode.
    #[must_use]
    pub fn owns_shared<T>(&self, cell: &SharedCell<T, B>) -> bool {
        self.is_tag(&cell.tag)
    }

    pub(crate) fn is_tag(&self, tag: &B::Container<()>) -> bool {
        B::ptr_eq(&self.tag, tag)
    }
}

impl<B> Debug for SharedMode<B>
where
    B: Behavior,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedMode").finish_non_exhaustive()
    }
}

//------------------------------------------------------------------------------------------------
//  ExclusiveMode
//------------------------------------------------------------------------------------------------

/// A tag that allows exclusive access to the cells of the [`SharedMode`] it borrows.
///
/// It is `Copy`, so it can be handed to any number of [`ExclusiveCell::get_mut`] calls while
/// the session lasts.
pub struct ExclusiveMode<'a, B>(pub(crate) &'a SharedMode<B>)
where
    B: Behavior;

impl<B> ExclusiveMode<'_, B>
where
    B: Behavior,
{
    /// Returns a new [`ExclusiveCell`] associated with the underlying [`SharedMode`].
    #[must_use]
    pub fn new_cell<T>(&self, value: T) -> ExclusiveCell<T, B> {
        self.0.new_cell(value)
    }
}

impl<B> Clone for ExclusiveMode<'_, B>
where
    B: Behavior,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for ExclusiveMode<'_, B> where B: Behavior {}

impl<B> Debug for ExclusiveMode<'_, B>
where
    B: Behavior,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExclusiveMode").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fresh_modes_do_not_own_each_others_cells() {
        let first = SharedMode::new();
        let second = SharedMode::new();
        let cell = first.new_cell(1);

        assert!(first.owns_exclusive(&cell));
        assert!(!second.owns_exclusive(&cell));
        assert!(first.owns_shared(&cell.as_shared()));
        assert!(!second.owns_shared(&cell.as_shared()));
    }

    #[test]
    fn exclusive_mode_creates_cells_for_its_shared_mode() {
        let mut shared = SharedMode::new();
        let cell = shared.as_exclusive().new_cell("value");
        assert!(shared.owns_exclusive(&cell));
    }

    #[test]
    fn debug_is_opaque() {
        let mut shared = SharedMode::new();
        assert_eq!(format!("{shared:?}"), "SharedMode { .. }");
        assert_eq!(format!("{:?}", shared.as_exclusive()), "ExclusiveMode { .. }");
    }
}
