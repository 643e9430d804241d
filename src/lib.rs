//! # Array List
//!
//! The `array_list` crate provides `ArrayList`, a `#[no_std]` growable array addressed by
//! index, much like `std::Vec`, with a few differences that matter for long lived lists
//! whose size swings up and down.
//!
//! Memory is given back. After each `delete` the list checks how much of its buffer is
//! unused and moves to a smaller allocation once the waste is large enough. Small buffers
//! (under 64 slots) are left alone, buffers up to 2048 slots halve once they are three
//! quarters empty, and larger ones drop to 5/8 of their size once they are half empty.
//! The policy itself is exposed as the pure function `calc_capacity`.
//!
//! Allocations are fallible. Running out of memory, or out of room in the length type,
//! is reported as a `ListErr` instead of aborting, and an index outside the list is
//! reported the same way with the offending index and the length at the time. A failed
//! operation leaves the list untouched.
//!
//! The type used for the length, capacity, and indices is a generic parameter. With the
//! default `u32` a list header is 16 bytes on a 64-bit target, compared to 24 for `Vec`.
//!
//! Finally, the allocator API is not stable yet, so this crate provides the `AltAllocator`
//! trait which works like `Allocator` and can back an `ArrayList`.
//!
//! # Feature Flags
//! * `std_alloc` - Enables `Global`, a wrapper that implements `AltAllocator` on top of
//! the standard allocator, along with `ArrayList::new`, `ArrayList::from_vec`, and
//! `ArrayList::to_vec`.
//!
//! * `experimental_allocator` - Implements `AltAllocator` for every type implementing the
//! unstable `Allocator` trait. Used together with `std_alloc`, the `Global` type from `std`
//! is re-exported instead of the wrapper defined here.
//!
//! * `alloc_api2` - Implements `AltAllocator` for every allocator of the `allocator-api2`
//! crate.

#![no_std]
#![cfg_attr(feature = "experimental_allocator", feature(allocator_api))]

#[cfg(any(feature = "std_alloc", test))]
extern crate std;

pub mod alloc;
mod array_list;
pub mod types;

pub use array_list::ArrayList;
pub use array_list::calc_capacity;
