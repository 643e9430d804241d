//! Lets any `allocator_api2` allocator back an `ArrayList` on stable Rust.

use core::alloc::Layout;
use core::ptr::NonNull;

use allocator_api2::alloc::Allocator as Api2Allocator;

use super::AllocError;
use super::AltAllocator;

unsafe impl<A: Api2Allocator> AltAllocator for A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return <Self as Api2Allocator>::allocate(self, layout).map_err(|_| AllocError);
    }

    #[inline]
    fn allocate_zeroed(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return <Self as Api2Allocator>::allocate_zeroed(self, layout).map_err(|_| AllocError);
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { <Self as Api2Allocator>::deallocate(self, ptr, layout) };
    }

    #[inline]
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let grown = unsafe { <Self as Api2Allocator>::grow(self, old_ptr, old_layout, new_layout) };
        return grown.map_err(|_| AllocError);
    }

    #[inline]
    unsafe fn grow_zeroed(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let grown = unsafe { <Self as Api2Allocator>::grow_zeroed(self, old_ptr, old_layout, new_layout) };
        return grown.map_err(|_| AllocError);
    }

    #[inline]
    unsafe fn shrink(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let shrunk = unsafe { <Self as Api2Allocator>::shrink(self, old_ptr, old_layout, new_layout) };
        return shrunk.map_err(|_| AllocError);
    }
}
