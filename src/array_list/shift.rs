//! Bounds checks and element shifting over a raw, contiguous buffer.
//!
//! The checks are separate from the moves so a caller can validate an index, make
//! room, and only then touch the buffer. A failure therefore never leaves a
//! partially shifted buffer behind.

use core::ptr;

use crate::types::ListErr;
use crate::types::ListResult;

/// `index` must address a live element: `index < length`.
#[inline]
pub(crate) const fn check_element(index: usize, length: usize) -> ListResult<()> {
    if index >= length {
        return Err(ListErr::out_of_range(index, length));
    }
    return Ok(());
}

/// `index` must be a position an element can be inserted at: `index <= length`.
#[inline]
pub(crate) const fn check_insert(index: usize, length: usize) -> ListResult<()> {
    if index > length {
        return Err(ListErr::out_of_range(index, length));
    }
    return Ok(());
}

/// Opens a gap at `index` by moving `[index, length)` one slot right, then writes
/// `item` into it.
///
/// # Safety
/// `base` must be valid for `length + 1` elements, the first `length` of them
/// initialized, and `index <= length`. The caller owns bumping the length.
#[inline]
pub(crate) unsafe fn insert_at<T>(base: *mut T, length: usize, index: usize, item: T) {
    unsafe {
        let slot = base.add(index);
        if index < length {
            ptr::copy(slot, slot.add(1), length - index);
        }
        ptr::write(slot, item);
    }
}

/// Moves the element at `index` out and closes the gap by moving
/// `[index + 1, length)` one slot left.
///
/// # Safety
/// `base` must hold `length` initialized elements and `index < length`. Afterwards
/// the slot at `length - 1` is logically uninitialized; the caller owns dropping
/// the length.
#[inline]
pub(crate) unsafe fn remove_at<T>(base: *mut T, length: usize, index: usize) -> T {
    unsafe {
        let slot = base.add(index);
        let item = ptr::read(slot);
        ptr::copy(slot.add(1), slot, length - index - 1);
        item
    }
}
