use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;

/// A stable stand-in for the unstable `Allocator` trait. `ArrayList` talks to its
/// storage only through this trait, so any allocator that can be wrapped in it can
/// back a list, including in a `no_std` build.
///
/// Implementors take on the safety requirements of the allocator API:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
///
/// Only `allocate` and `deallocate` are required. The resizing methods default to
/// allocate, copy, and free, which is enough for a list but slower than an in-place
/// `realloc`.
pub unsafe trait AltAllocator {
    /// Hands out a block that fits `layout`.
    ///
    /// The returned slice may be longer than requested; `ArrayList` only ever uses
    /// `layout.size()` bytes of it.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Same as `allocate` but the block is zero filled.
    fn allocate_zeroed(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let block = self.allocate(layout)?;
        unsafe { block.cast::<u8>().write_bytes(0, block.len()) };
        return Ok(block);
    }

    /// Gives back a block obtained from this allocator.
    ///
    /// `layout` must be the layout the block currently has, which is the one it was
    /// allocated with or the last one it was grown or shrunk to.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Moves the block at `old_ptr` into a larger one described by `new_layout`.
    ///
    /// `new_layout.size()` must be at least `old_layout.size()`. On failure the old
    /// block is untouched and still owned by the caller. On success the old pointer
    /// must no longer be used.
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let new = self.allocate(new_layout)?;
        return Ok(unsafe { self.relocate(old_ptr, old_layout, new, old_layout.size()) });
    }

    /// Like `grow` but the bytes past the old size are zeroed.
    unsafe fn grow_zeroed(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let new = self.allocate_zeroed(new_layout)?;
        return Ok(unsafe { self.relocate(old_ptr, old_layout, new, old_layout.size()) });
    }

    /// Moves the block at `old_ptr` into a smaller one described by `new_layout`,
    /// keeping the first `new_layout.size()` bytes.
    ///
    /// `new_layout.size()` must not exceed `old_layout.size()`. The failure and
    /// success contracts are the same as for `grow`.
    unsafe fn shrink(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let new = self.allocate(new_layout)?;
        return Ok(unsafe { self.relocate(old_ptr, old_layout, new, new_layout.size()) });
    }

    #[doc(hidden)]
    unsafe fn relocate(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new: NonNull<[u8]>,
        keep: usize,
    ) -> NonNull<[u8]> {
        unsafe { new.cast::<u8>().copy_from_nonoverlapping(old_ptr, keep) };
        unsafe { self.deallocate(old_ptr, old_layout) };
        return new;
    }
}
