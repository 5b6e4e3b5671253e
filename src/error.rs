//------------------------------------------------------------------------------------------------
//  ModeMismatch
//------------------------------------------------------------------------------------------------

/// Error returned when a cell is accessed with a [`SharedMode`](crate::SharedMode) or
/// [`ExclusiveMode`](crate::ExclusiveMode) that did not create it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, thiserror::Error)]
#[error("The cell was accessed using a mode that did not create it.")]
pub struct ModeMismatch;

impl ModeMismatch {
    /// Panics with the name of the accessor. Used by the panicking accessors.
    #[track_caller]
    pub(crate) fn raise(self, accessor: &'static str) -> ! {
        panic!("{accessor}: {self}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mismatch_message() {
        assert_eq!(
            ModeMismatch.to_string(),
            "The cell was accessed using a mode that did not create it."
        );
    }

    #[test]
    #[should_panic(expected = "get_mut: The cell was accessed")]
    fn raise_panics_with_accessor() {
        ModeMismatch.raise("get_mut")
    }
}
