use std::{ops::Deref, rc::Rc};

/// Controls how a [`SharedMode`](crate::SharedMode) and all cells created from it store their
/// reference-counted values.
///
/// # Safety
///
/// The mode check performed by every accessor relies on [`Behavior::ptr_eq`]. An implementor
/// must guarantee that:
/// - `ptr_eq` only returns `true` when both containers share the same allocation, so two
///   containers produced by separate calls to [`Behavior::new`] never compare equal.
/// - Cloning a container yields a container that shares the allocation of the original.
///
/// A `ptr_eq` that always returns `true` would allow one `SharedMode` to read a cell while
/// another `SharedMode` is writing to it.
pub unsafe trait Behavior {
    /// The reference-counted container used by this behavior.
    type Container<T>: Clone + Deref<Target = T>;

    /// Returns a new container wrapping `value`.
    fn new<T>(value: T) -> Self::Container<T>;

    /// Returns true if `a` and `b` point to the same allocation.
    fn ptr_eq<T>(a: &Self::Container<T>, b: &Self::Container<T>) -> bool;
}

/// A [`Behavior`] using [`Rc`], for single-threaded use.
///
/// None of the types built on this behavior are `Send` or `Sync`.
#[derive(Debug)]
pub enum SingleThreaded {}

unsafe impl Behavior for SingleThreaded {
    type Container<T> = Rc<T>;

    fn new<T>(value: T) -> Self::Container<T> {
        Rc::new(value)
    }

    fn ptr_eq<T>(a: &Self::Container<T>, b: &Self::Container<T>) -> bool {
        Rc::ptr_eq(a, b)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unit_containers_are_distinct() {
        let a = SingleThreaded::new(());
        let b = SingleThreaded::new(());
        assert!(!SingleThreaded::ptr_eq(&a, &b));
    }

    /// Treats every pair of containers as the same allocation.
    enum AlwaysEqual {}

    unsafe impl Behavior for AlwaysEqual {
        type Container<T> = Rc<T>;

        fn new<T>(value: T) -> Self::Container<T> {
            Rc::new(value)
        }

        fn ptr_eq<T>(_: &Self::Container<T>, _: &Self::Container<T>) -> bool {
            true
        }
    }

    #[test]
    fn mode_check_relies_on_ptr_eq() {
        let owner = crate::SharedMode::<SingleThreaded>::default();
        let other = crate::SharedMode::<SingleThreaded>::default();
        let cell = owner.new_cell(1);
        assert!(cell.as_shared().try_get(&other).is_err());

        // Reading with a foreign mode is accepted once `ptr_eq` breaks its contract. Nothing
        // writes here, so this stays sound.
        let owner = crate::SharedMode::<AlwaysEqual>::default();
        let other = crate::SharedMode::<AlwaysEqual>::default();
        let cell = owner.new_cell(1);
        assert_eq!(cell.as_shared().try_get(&other), Ok(&1));
        assert!(other.owns_exclusive(&cell));
    }

    #[test]
    fn clones_share_allocation() {
        let a = SingleThreaded::new(10_u32);
        let b = a.clone();
        assert!(SingleThreaded::ptr_eq(&a, &b));
        assert_eq!(*b, 10);
    }
}
