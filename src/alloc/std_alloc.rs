pub use global_def::Global;

#[cfg(feature = "experimental_allocator")]
mod global_def {
    /// The standard library's own `Global`, already an `Allocator`.
    pub use std::alloc::Global;
}

#[cfg(not(feature = "experimental_allocator"))]
mod global_def {
    use core::ptr::NonNull;
    use std::alloc;
    use std::alloc::Layout;

    use crate::alloc::AllocError;
    use crate::alloc::AltAllocator;

    /// Routes `AltAllocator` calls to `std::alloc`, the same heap `Vec` uses.
    ///
    /// Because of that, a `Vec<T>` buffer can be handed to an `ArrayList<T, Global>`
    /// without copying, see `ArrayList::from_vec`.
    ///
    /// Named after `std::alloc::Global`, which replaces it once the allocator API is
    /// stable or when `experimental_allocator` is enabled.
    #[derive(Debug, Default, Copy, Clone)]
    pub struct Global;

    #[inline]
    fn block(ptr: *mut u8, size: usize) -> Result<NonNull<[u8]>, AllocError> {
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(AllocError);
        };
        return Ok(NonNull::slice_from_raw_parts(ptr, size));
    }

    unsafe impl AltAllocator for Global {
        fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
            // `alloc::alloc` is undefined for zero sized layouts.
            if layout.size() == 0 {
                return Err(AllocError);
            }
            return block(unsafe { alloc::alloc(layout) }, layout.size());
        }

        fn allocate_zeroed(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
            if layout.size() == 0 {
                return Err(AllocError);
            }
            return block(unsafe { alloc::alloc_zeroed(layout) }, layout.size());
        }

        unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
            unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
        }

        unsafe fn grow(
            &self,
            old_ptr: NonNull<u8>,
            old_layout: Layout,
            new_layout: Layout,
        ) -> Result<NonNull<[u8]>, AllocError> {
            if new_layout.size() == 0 {
                return Err(AllocError);
            }
            let new = unsafe { alloc::realloc(old_ptr.as_ptr(), old_layout, new_layout.size()) };
            return block(new, new_layout.size());
        }

        unsafe fn grow_zeroed(
            &self,
            old_ptr: NonNull<u8>,
            old_layout: Layout,
            new_layout: Layout,
        ) -> Result<NonNull<[u8]>, AllocError> {
            let old_sz = old_layout.size();
            let new_sz = new_layout.size();

            if old_sz == 0 {
                return self.allocate_zeroed(new_layout);
            }
            if new_sz <= old_sz {
                return Ok(NonNull::slice_from_raw_parts(old_ptr, old_sz));
            }

            let new = unsafe { alloc::realloc(old_ptr.as_ptr(), old_layout, new_sz) };
            let new = block(new, new_sz)?;
            unsafe { new.cast::<u8>().add(old_sz).write_bytes(0, new_sz - old_sz) };
            return Ok(new);
        }

        unsafe fn shrink(
            &self,
            old_ptr: NonNull<u8>,
            old_layout: Layout,
            new_layout: Layout,
        ) -> Result<NonNull<[u8]>, AllocError> {
            // A list releases its buffer with `deallocate` instead of shrinking to zero.
            if new_layout.size() == 0 {
                return Err(AllocError);
            }
            let new = unsafe { alloc::realloc(old_ptr.as_ptr(), old_layout, new_layout.size()) };
            return block(new, new_layout.size());
        }
    }
}
