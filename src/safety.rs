//! How this crate upholds Rust's aliasing rules.
//!
//! Every cell stores its value in an `UnsafeCell`. The unsafe code is limited to turning that
//! `UnsafeCell` into `&T` in [`SharedCell::get`](crate::SharedCell::get) and into `&mut T` in
//! [`RefMut`](crate::RefMut). Both are only reachable while the borrow checker can prove that
//! the other one is not.
//!
//! # The rules
//!
//! - [`SharedMode`](crate::SharedMode) is not `Clone`. Borrowing it is the only way to read or
//!   write its cells, so the borrow checker's rules for that single value extend to every cell
//!   it created.
//! - [`SharedMode::as_exclusive`](crate::SharedMode::as_exclusive) takes `&mut self` and
//!   returns an [`ExclusiveMode<'_>`](crate::ExclusiveMode) carrying that lifetime. While the
//!   `ExclusiveMode` is in use, the `SharedMode` cannot be borrowed again.
//! - [`ExclusiveMode`](crate::ExclusiveMode) gives no access to the `SharedMode` it wraps.
//! - [`SharedCell::get`](crate::SharedCell::get) needs a `&SharedMode` and
//!   [`ExclusiveCell::get_mut`](crate::ExclusiveCell::get_mut) needs an `ExclusiveMode`. Only
//!   one of the two can be alive at any point of the program.
//! - [`ExclusiveCell`](crate::ExclusiveCell) is not `Clone`, and `get_mut` borrows it
//!   mutably. The returned [`RefMut`](crate::RefMut) ties the cell borrow and the mode borrow
//!   together, so two `&mut T` to the same value cannot exist.
//! - [`SharedCell`](crate::SharedCell) is `Clone`, but it only ever hands out `&T`.
//! - Each accessor checks that the cell was created by the mode it is given, using
//!   [`Behavior::ptr_eq`](crate::Behavior::ptr_eq). This is why implementing
//!   [`Behavior`](crate::Behavior) is `unsafe`: two different `SharedMode`s must never compare
//!   equal, otherwise one of them could read a cell while the other writes it.
//!
//! # A `Behavior` that breaks the contract
//!
//! The borrow checker only sees one `SharedMode` at a time. If `ptr_eq` claims that two
//! different tags are the same, a second `SharedMode` can read a cell while the first one is
//! writing it. The following compiles, and running it creates a `&usize` and a `&mut usize`
//! to the same value:
//!
//! ```rust,no_run
//! use modalcell::{Behavior, SharedMode};
//! use std::rc::Rc;
//!
//! enum Lying {}
//!
//! // UNSOUND: every container compares equal.
//! unsafe impl Behavior for Lying {
//!     type Container<T> = Rc<T>;
//!
//!     fn new<T>(value: T) -> Self::Container<T> {
//!         Rc::new(value)
//!     }
//!
//!     fn ptr_eq<T>(_: &Self::Container<T>, _: &Self::Container<T>) -> bool {
//!         true
//!     }
//! }
//!
//! let mut owner = SharedMode::<Lying>::default();
//! let mut cell = owner.new_cell(1_usize);
//! let reader = cell.as_shared();
//!
//! // A foreign mode passes the check ..
//! let intruder = SharedMode::<Lying>::default();
//! let value: &usize = reader.get(&intruder);
//!
//! // .. so `owner` is free to start a write session while `value` is alive.
//! let mut contents = cell.get_mut(owner.as_exclusive());
//! *contents = 2;
//! assert_eq!(*value, 1);
//! ```
//!
//! # Examples of rejected code
//!
//! ### Reading while a write session is still in use
//!
//! `error[E0502]: cannot borrow `shared` as immutable because it is also borrowed as mutable`
//!
//! ```rust,compile_fail
//! use modalcell::SharedMode;
//!
//! let mut shared = SharedMode::new();
//! let mut cell = shared.new_cell(1);
//! let reader = cell.as_shared();
//! let exclusive = shared.as_exclusive();
//! *cell.get_mut(exclusive) = 2;
//! assert_eq!(*reader.get(&shared), 2);
//! *cell.get_mut(exclusive) = 3;
//! ```
//!
//! Starting a new session after the read compiles, since the first `exclusive` is no longer
//! used:
//!
//! ```rust
//! use modalcell::SharedMode;
//!
//! let mut shared = SharedMode::new();
//! let mut cell = shared.new_cell(1);
//! let reader = cell.as_shared();
//! let exclusive = shared.as_exclusive();
//! *cell.get_mut(exclusive) = 2;
//! assert_eq!(*reader.get(&shared), 2);
//!
//! let exclusive = shared.as_exclusive();
//! *cell.get_mut(exclusive) = 3;
//! ```
//!
//! ### Starting a write session while a read reference is alive
//!
//! `error[E0502]: cannot borrow `shared` as mutable because it is also borrowed as immutable`
//!
//! ```rust,compile_fail
//! use modalcell::SharedMode;
//!
//! let mut shared = SharedMode::new();
//! let mut cell = shared.new_cell(1);
//! let reader = cell.as_shared();
//! let value = reader.get(&shared);
//! let exclusive = shared.as_exclusive();
//! assert_eq!(*value, 1);
//! *cell.get_mut(exclusive) = 3;
//! ```
//!
//! Finishing with the reference first compiles:
//!
//! ```rust
//! use modalcell::SharedMode;
//!
//! let mut shared = SharedMode::new();
//! let mut cell = shared.new_cell(1);
//! let reader = cell.as_shared();
//! let value = reader.get(&shared);
//! assert_eq!(*value, 1);
//!
//! let exclusive = shared.as_exclusive();
//! *cell.get_mut(exclusive) = 3;
//! ```
//!
//! ### Two mutable references to the same value
//!
//! `error[E0499]: cannot borrow `cell` as mutable more than once at a time`
//!
//! ```rust,compile_fail
//! use modalcell::SharedMode;
//!
//! let mut shared = SharedMode::new();
//! let mut cell = shared.new_cell(1);
//! let exclusive = shared.as_exclusive();
//! let mut first = cell.get_mut(exclusive);
//! let mut second = cell.get_mut(exclusive);
//! *first += 1;
//! *second += 1;
//! ```
//!
//! ### Sending a single-threaded mode to another thread
//!
//! `error[E0277]: `Rc<()>` cannot be sent between threads safely`
//!
//! ```rust,compile_fail
//! use modalcell::SharedMode;
//!
//! let shared = SharedMode::new();
//! std::thread::spawn(move || drop(shared));
//! ```
//!
//! ### Sending a cell holding a value that is not `Sync`
//!
//! `error[E0277]: `Cell<u32>` cannot be shared between threads safely`
//!
//! ```rust,compile_fail
//! use modalcell::SharedMode;
//! use std::cell::Cell;
//!
//! let shared = SharedMode::new_threadsafe();
//! let cell = shared.new_cell(Cell::new(1_u32));
//! std::thread::spawn(move || drop(cell));
//! ```
