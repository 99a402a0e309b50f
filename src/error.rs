use std::fmt;

/// Errors returned by the capacity management methods of [`Deque`].
///
/// Out of bounds indexing is not an error value; it panics.
///
/// [`Deque`]: crate::Deque
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A capacity-like argument (constructor hint, resize target or reserve amount) was negative.
    NegativeCapacity,
    /// The resize target equals the current capacity.
    SameCapacity,
    /// The resize target cannot hold the elements currently in the deque.
    NotEnoughCapacity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NegativeCapacity => write!(f, "capacity cannot be negative"),
            Error::SameCapacity => write!(f, "already at asked capacity"),
            Error::NotEnoughCapacity => write!(f, "cannot hold existing elements in asked capacity"),
        }
    }
}

impl std::error::Error for Error {}
