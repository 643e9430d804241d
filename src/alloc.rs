//! Allocator plumbing used by `ArrayList` to obtain, grow, shrink, and release its
//! backing buffer.
//!
//! Every allocator is reached through the `AltAllocator` trait, which mirrors the
//! unstable `Allocator` API so a list can be backed by a custom allocator on stable Rust.
//!
//! * `std_alloc` adds `Global`, a wrapper around the standard allocator.
//! * `experimental_allocator` implements `AltAllocator` for every `core::alloc::Allocator`
//!   and re-exports the real `Global` instead of the wrapper.
//! * `alloc_api2` implements `AltAllocator` for every `allocator_api2` allocator.

#[cfg(all(feature = "alloc_api2", not(feature = "experimental_allocator")))]
mod alloc_api2;
#[cfg(feature = "experimental_allocator")]
mod alloc_unstable;
mod alt_alloc;
#[cfg(any(feature = "std_alloc", test))]
mod std_alloc;

#[cfg(feature = "experimental_allocator")]
pub use core::alloc::AllocError;

#[cfg(not(feature = "experimental_allocator"))]
pub use alloc_error::AllocError;
pub use alt_alloc::AltAllocator;
#[cfg(any(feature = "std_alloc", test))]
pub use std_alloc::Global;

#[cfg(not(feature = "experimental_allocator"))]
mod alloc_error {
    use core::error::Error;
    use core::fmt;

    /// Returned by an `AltAllocator` when it cannot hand out, resize, or relocate memory.
    ///
    /// With `experimental_allocator` enabled this is replaced by `core::alloc::AllocError`.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct AllocError;

    impl Error for AllocError {}

    impl fmt::Display for AllocError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("The allocator could not satisfy the request.")
        }
    }
}
