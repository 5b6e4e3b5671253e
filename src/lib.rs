#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs)]

//------------------------------------------------------------------------------------------------
//  Modules
//------------------------------------------------------------------------------------------------

mod behavior;
mod cell;
mod error;
mod mode;

pub mod safety;
pub mod singlethreaded;
#[cfg(feature = "threadsafe")]
pub mod threadsafe;

//------------------------------------------------------------------------------------------------
//  Exports
//------------------------------------------------------------------------------------------------

pub use behavior::{Behavior, SingleThreaded};
pub use cell::{ExclusiveCell, RefMut, SharedCell};
pub use error::ModeMismatch;
pub use mode::{ExclusiveMode, SharedMode};
#[cfg(feature = "threadsafe")]
pub use threadsafe::ThreadSafe;
