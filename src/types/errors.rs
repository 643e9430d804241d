use core::error::Error;
use core::fmt;

/// What went wrong during an `ArrayList` operation.
///
/// A failed operation never leaves the list half modified: its length, capacity,
/// and elements are what they were before the call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorReason {
    /// `index` was outside the valid range for a list of `length` elements.
    /// The length is the one in effect before the operation.
    ///
    /// With a length type wider than `usize`, such as `u128`, an index that does
    /// not fit in `usize` is reported as `usize::MAX` rather than its real value.
    IndexOutOfRange { index: usize, length: usize },
    /// The requested capacity does not fit in the list's length type.
    CapacityOverflow,
    /// A size in bytes overflowed `usize`.
    UsizeOverflow,
    /// A `Layout` could not be built for the requested capacity.
    LayoutFailure,
    /// The allocator refused the request.
    AllocFailure,
}

/// A type alias for `Result<T, ListErr>`
pub type ListResult<T> = Result<T, ListErr>;

/// The error returned by fallible `ArrayList` operations.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ListErr(ErrorReason);

impl ListErr {
    pub(crate) const fn new(reason: ErrorReason) -> Self {
        return Self(reason);
    }

    pub(crate) const fn out_of_range(index: usize, length: usize) -> Self {
        return Self(ErrorReason::IndexOutOfRange { index, length });
    }

    pub const fn reason(self) -> ErrorReason {
        return self.0;
    }
}

impl Error for ListErr {}

impl fmt::Display for ListErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorReason::IndexOutOfRange { index, length } => {
                write!(f, "Index {index} is out of range for length {length}.")
            }
            ErrorReason::CapacityOverflow => f.write_str("Capacity type overflowed."),
            ErrorReason::UsizeOverflow => f.write_str("usize overflowed."),
            ErrorReason::LayoutFailure => f.write_str("Failed to create layout."),
            ErrorReason::AllocFailure => f.write_str("An allocation failure occurred."),
        }
    }
}
