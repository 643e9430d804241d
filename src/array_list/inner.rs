use core::alloc::Layout;
use core::cmp;
use core::ptr;
use core::ptr::NonNull;

use crate::alloc::AltAllocator;
use crate::types::ErrorReason;
use crate::types::LengthType;
use crate::types::ListErr;
use crate::types::ListResult;

const fn layout_array(layout: Layout, length: usize) -> ListResult<Layout> {
    let lay = layout.pad_to_align();
    let Some(len) = length.checked_mul(lay.size()) else {
        return Err(ListErr::new(ErrorReason::UsizeOverflow));
    };
    let Ok(lay) = Layout::from_size_align(len, layout.align()) else {
        return Err(ListErr::new(ErrorReason::LayoutFailure));
    };
    return Ok(lay);
}

/// Smallest capacity a first geometric growth jumps to. Byte sized elements start
/// with 8 slots, anything up to 1 KiB with 4.
const fn min_non_zero_cap(elem_size: usize) -> u8 {
    if elem_size == 1 {
        return 8;
    }
    if elem_size <= 1024 {
        return 4;
    }
    return 1;
}

fn dangling(align: usize) -> NonNull<u8> {
    return NonNull::new(ptr::without_provenance_mut(align)).unwrap_or(NonNull::dangling());
}

/// The untyped backing buffer of an `ArrayList`: a pointer, how many slots it has
/// room for, how many of them are live, and the allocator that owns it.
///
/// Length and capacity sit next to each other so that with a `u32` length type the
/// pointer and both counters pack into 16 bytes.
///
/// `Inner` never looks at elements and has no `Drop`; the list drops its elements
/// and then calls `release` with the element layout.
pub(crate) struct Inner<A: AltAllocator, L: LengthType>
where
    usize: TryFrom<L>,
{
    ptr:               NonNull<u8>,
    capacity:          L,
    pub(crate) length: L,
    alloc:             A,
}

impl<A: AltAllocator, L: LengthType> Inner<A, L>
where
    usize: TryFrom<L>,
{
    pub(crate) const fn new_in<T>(alloc: A) -> Self {
        return Self {
            ptr:      NonNull::<T>::dangling().cast(),
            capacity: L::ZERO_VALUE,
            length:   L::ZERO_VALUE,
            alloc:    alloc,
        };
    }

    /// # Safety
    /// `ptr` must come from `alloc` with room for exactly `capacity` elements, the
    /// first `length` of them initialized, and nothing else may free or use it
    /// afterwards. A zero `capacity` means there is no allocation to give back.
    pub(crate) const unsafe fn from_raw_parts(ptr: NonNull<u8>, length: L, capacity: L, alloc: A) -> Self {
        return Self {
            ptr:      ptr,
            capacity: capacity,
            length:   length,
            alloc:    alloc,
        };
    }

    /// Zero sized elements never need memory, so their capacity is as large as
    /// both `L` and `usize` can count.
    pub(crate) fn capacity(&self, elem_size: usize) -> L {
        if elem_size == 0 {
            return L::from_usize(usize::MAX).unwrap_or(L::MAX_VALUE);
        }
        return self.capacity;
    }

    #[inline]
    pub(crate) const fn get_ptr<T>(&self) -> *mut T {
        return self.ptr.as_ptr().cast();
    }

    #[inline]
    pub(crate) const fn allocator(&self) -> &A {
        return &self.alloc;
    }

    /// Ensures room for `additional` elements past the length, growing to exactly
    /// `length + additional` slots if needed.
    pub(crate) fn expand_by(&mut self, additional: L, layout: Layout) -> ListResult<()> {
        let Some(required) = self.length.checked_add(additional) else {
            return Err(ListErr::new(ErrorReason::CapacityOverflow));
        };
        if required <= self.capacity(layout.size()) {
            return Ok(());
        }
        return self.grow_to(required, layout);
    }

    /// Ensures room for `additional` elements past the length. When a reallocation
    /// is needed the capacity at least doubles, which keeps pushes amortized O(1).
    pub(crate) fn expand_at_least_by(&mut self, additional: L, layout: Layout) -> ListResult<()> {
        let Some(required) = self.length.checked_add(additional) else {
            return Err(ListErr::new(ErrorReason::CapacityOverflow));
        };
        let capacity = self.capacity(layout.size());
        if required <= capacity {
            return Ok(());
        }

        let doubled = capacity.checked_mul(L::from(2u8)).unwrap_or(L::MAX_VALUE);
        let floor = L::from(min_non_zero_cap(layout.size()));
        let target = cmp::max(cmp::max(doubled, required), floor);
        return self.grow_to(target, layout);
    }

    fn grow_to(&mut self, capacity: L, layout: Layout) -> ListResult<()> {
        let Ok(slots) = usize::try_from(capacity) else {
            return Err(ListErr::new(ErrorReason::UsizeOverflow));
        };
        let new_layout = layout_array(layout, slots)?;

        let old = self.capacity.as_usize();
        let block = if old == 0 {
            self.alloc.allocate(new_layout)
        } else {
            let old_layout = layout_array(layout, old)?;
            unsafe { self.alloc.grow(self.ptr, old_layout, new_layout) }
        };
        let Ok(block) = block else {
            return Err(ListErr::new(ErrorReason::AllocFailure));
        };

        log::trace!("list buffer grew from {old} to {slots} slots");
        self.ptr = block.cast();
        self.capacity = capacity;
        return Ok(());
    }

    /// Moves the buffer into a smaller allocation of `capacity` slots.
    ///
    /// `capacity` must be non-zero, no larger than the current one, and no smaller
    /// than the length. On failure the current buffer is left as it was.
    pub(crate) fn shrink_to(&mut self, capacity: L, layout: Layout) -> ListResult<()> {
        let old = self.capacity.as_usize();
        let slots = capacity.as_usize();
        let old_layout = layout_array(layout, old)?;
        let new_layout = layout_array(layout, slots)?;

        let Ok(block) = (unsafe { self.alloc.shrink(self.ptr, old_layout, new_layout) }) else {
            return Err(ListErr::new(ErrorReason::AllocFailure));
        };

        log::trace!("list buffer shrank from {old} to {slots} slots");
        self.ptr = block.cast();
        self.capacity = capacity;
        return Ok(());
    }

    /// Hands the allocation back and returns to the empty, dangling state. The
    /// elements must already be dropped or moved out.
    pub(crate) fn release(&mut self, layout: Layout) {
        self.length = L::ZERO_VALUE;
        if self.capacity == L::ZERO_VALUE || layout.size() == 0 {
            return;
        }
        let old = self.capacity.as_usize();
        if let Ok(old_layout) = layout_array(layout, old) {
            unsafe { self.alloc.deallocate(self.ptr, old_layout) };
        }

        log::trace!("list buffer of {old} slots released");
        self.ptr = dangling(layout.align());
        self.capacity = L::ZERO_VALUE;
    }
}
