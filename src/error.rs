use thiserror::Error;

/// Returned when asked to reduce a sequence with no elements.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("cannot reduce an empty sequence")]
pub struct EmptyInputError;
