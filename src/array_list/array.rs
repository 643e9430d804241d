use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::Index;
use core::ops::IndexMut;
use core::ptr;
use core::ptr::NonNull;
use core::slice;

use super::inner::Inner;
use super::shift;
use super::shrink::calc_capacity;
use crate::alloc::AltAllocator;
use crate::types::ErrorReason;
use crate::types::LengthType;
use crate::types::ListErr;
use crate::types::ListResult;

/// A contiguous, growable list addressed by index, much like `Vec`, that also gives
/// memory back as it empties.
///
/// * Every allocation is fallible and reported as a `ListErr` instead of aborting.
/// * `L` picks the integer used for the length, capacity, and indices.
/// * `A` picks the allocator, see `AltAllocator`.
///
/// Growth is geometric. After every `delete` the buffer is checked against the
/// tiered shrink policy in `calc_capacity` and reallocated when enough of it is
/// unused; a list that becomes empty releases its buffer entirely.
///
/// A failed operation has no visible effect: the length and the elements are
/// exactly as before the call.
pub struct ArrayList<T, A: AltAllocator, L: LengthType = u32>
where
    usize: TryFrom<L>,
{
    inner: Inner<A, L>,
    _ph:   PhantomData<T>,
}

unsafe impl<T: Send, A: AltAllocator + Send, L: LengthType> Send for ArrayList<T, A, L> where usize: TryFrom<L> {}
unsafe impl<T: Sync, A: AltAllocator + Sync, L: LengthType> Sync for ArrayList<T, A, L> where usize: TryFrom<L> {}

impl<T, A: AltAllocator, L: LengthType> ArrayList<T, A, L>
where
    usize: TryFrom<L>,
{
    const LAYOUT: Layout = Layout::new::<T>();
    const SIZE: usize = size_of::<T>();

    /// Creates an empty list backed by `alloc`. Nothing is allocated until the
    /// first element arrives.
    pub const fn new_in(alloc: A) -> Self {
        return Self {
            inner: Inner::new_in::<T>(alloc),
            _ph:   PhantomData,
        };
    }

    /// Creates an empty list with room for exactly `capacity` elements.
    pub fn with_capacity_in(alloc: A, capacity: L) -> ListResult<Self> {
        let mut inner = Inner::new_in::<T>(alloc);
        inner.expand_by(capacity, Self::LAYOUT)?;
        return Ok(Self {
            inner: inner,
            _ph:   PhantomData,
        });
    }

    /// Takes ownership of an existing buffer without copying it.
    ///
    /// # Safety
    /// * `ptr` must have been allocated by `alloc` with the layout of `capacity`
    ///   values of `T`, or be dangling and well aligned when `capacity` is zero.
    /// * The first `length` slots must hold initialized values and `length <= capacity`.
    /// * Nothing else may read, write, or free the buffer afterwards; the list now
    ///   owns it and the values in it.
    pub unsafe fn from_raw_parts_in(ptr: NonNull<T>, length: L, capacity: L, alloc: A) -> Self {
        let capacity = if Self::SIZE == 0 { L::ZERO_VALUE } else { capacity };
        return Self {
            inner: unsafe { Inner::from_raw_parts(ptr.cast(), length, capacity, alloc) },
            _ph:   PhantomData,
        };
    }

    #[inline]
    pub fn capacity(&self) -> L {
        return self.inner.capacity(Self::SIZE);
    }

    #[inline]
    pub const fn len(&self) -> L {
        return self.inner.length;
    }

    #[inline]
    pub const fn allocator(&self) -> &A {
        return self.inner.allocator();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.inner.length == L::ZERO_VALUE;
    }

    /// Makes room for at least `additional` more elements, possibly more to keep
    /// future growth amortized.
    pub fn reserve(&mut self, additional: L) -> ListResult<()> {
        return self.inner.expand_at_least_by(additional, Self::LAYOUT);
    }

    /// Makes room for exactly `additional` more elements if there is not enough
    /// already.
    pub fn reserve_exact(&mut self, additional: L) -> ListResult<()> {
        return self.inner.expand_by(additional, Self::LAYOUT);
    }

    /// `reserve` for a `usize` count, failing with `CapacityOverflow` if it does
    /// not fit in `L`.
    pub fn reserve_usize(&mut self, additional: usize) -> ListResult<()> {
        let Some(additional) = L::from_usize(additional) else {
            return Err(ListErr::new(ErrorReason::CapacityOverflow));
        };
        return self.reserve(additional);
    }

    pub fn get(&self, index: L) -> ListResult<&T> {
        let index = self.element_index(index)?;
        return Ok(unsafe { &*self.as_ptr().add(index) });
    }

    pub fn get_mut(&mut self, index: L) -> ListResult<&mut T> {
        let index = self.element_index(index)?;
        return Ok(unsafe { &mut *self.as_mut_ptr().add(index) });
    }

    /// Overwrites the element at `index` and hands back the old one. Never
    /// reallocates.
    pub fn set(&mut self, index: L, value: T) -> ListResult<T> {
        let slot = self.get_mut(index)?;
        return Ok(mem::replace(slot, value));
    }

    pub fn push(&mut self, item: T) -> ListResult<()> {
        self.inner.expand_at_least_by(L::ONE_VALUE, Self::LAYOUT)?;
        let len = self.inner.length.as_usize();
        unsafe { ptr::write(self.as_mut_ptr().add(len), item) };
        self.inner.length += L::ONE_VALUE;
        return Ok(());
    }

    /// Pushes every value from `values` onto the end.
    ///
    /// Only an allocation failure can stop this. In that case the values appended
    /// so far are dropped again and the list keeps its previous length.
    pub fn append<I>(&mut self, values: I) -> ListResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.inner.length;
        let values = values.into_iter();

        let (lower, _) = values.size_hint();
        if let Some(lower) = L::from_usize(lower) {
            self.reserve(lower)?;
        }

        for item in values {
            if let Err(err) = self.push(item) {
                self.truncate(start);
                return Err(err);
            }
        }
        return Ok(());
    }

    /// Places `item` at `index`, shifting everything from `index` onwards one slot
    /// right. `index == len()` appends.
    pub fn insert(&mut self, index: L, item: T) -> ListResult<()> {
        let len = self.inner.length.as_usize();
        let index = Self::index_usize(index);
        shift::check_insert(index, len)?;

        self.inner.expand_at_least_by(L::ONE_VALUE, Self::LAYOUT)?;
        unsafe { shift::insert_at(self.as_mut_ptr(), len, index, item) };
        self.inner.length += L::ONE_VALUE;
        return Ok(());
    }

    /// Removes and returns the element at `index`, shifting the rest left.
    ///
    /// Afterwards the buffer may be moved to a smaller allocation, see
    /// `calc_capacity`. Removing the last element frees the buffer.
    pub fn delete(&mut self, index: L) -> ListResult<T> {
        let len = self.inner.length.as_usize();
        let index = Self::index_usize(index);
        shift::check_element(index, len)?;

        let item = unsafe { shift::remove_at(self.as_mut_ptr(), len, index) };
        self.inner.length -= L::ONE_VALUE;
        self.shrink();
        return Ok(item);
    }

    /// Calls `visitor` with each index and element in order. The first error the
    /// visitor returns stops the walk and is returned as is; later elements are not
    /// visited.
    pub fn for_each<E, F>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(L, &T) -> Result<(), E>,
    {
        let mut index = L::ZERO_VALUE;
        for item in self.as_slice() {
            visitor(index, item)?;
            // Only fails after the last element of a list holding `L::MAX_VALUE` items.
            if let Some(next) = index.checked_add(L::ONE_VALUE) {
                index = next;
            }
        }
        return Ok(());
    }

    /// Copies the live elements into a new list that owns its own buffer of
    /// exactly `len()` slots.
    pub fn try_clone(&self) -> ListResult<Self>
    where
        T: Clone,
        A: Clone,
    {
        let mut copy = Self::with_capacity_in(self.allocator().clone(), self.len())?;
        for item in self.as_slice() {
            copy.push(item.clone())?;
        }
        return Ok(copy);
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        return self.as_slice().iter();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len().as_usize()) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.inner.length.as_usize()) }
    }

    /// The pointer is only valid until the next call that can reallocate:
    /// `push`, `append`, `insert`, `delete`, or a reserve.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.inner.get_ptr::<T>();
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        return self.inner.get_ptr::<T>();
    }

    /// Indices past `usize::MAX` saturate to it so they still fail the bounds
    /// checks.
    #[inline]
    fn index_usize(index: L) -> usize {
        return usize::try_from(index).unwrap_or(usize::MAX);
    }

    fn element_index(&self, index: L) -> ListResult<usize> {
        let index = Self::index_usize(index);
        shift::check_element(index, self.len().as_usize())?;
        return Ok(index);
    }

    fn truncate(&mut self, length: L) {
        if length >= self.inner.length {
            return;
        }
        let start = length.as_usize();
        let count = self.inner.length.as_usize() - start;
        let tail = ptr::slice_from_raw_parts_mut(unsafe { self.as_mut_ptr().add(start) }, count);
        self.inner.length = length;
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Applies the shrink policy after a removal. Best effort: if the allocator
    /// cannot provide the smaller block the current one is kept.
    fn shrink(&mut self) {
        if Self::SIZE == 0 {
            return;
        }
        if self.inner.length == L::ZERO_VALUE {
            self.inner.release(Self::LAYOUT);
            return;
        }

        let capacity = self.capacity().as_usize();
        let (target, should_shrink) = calc_capacity(capacity, self.inner.length.as_usize());
        if !should_shrink {
            return;
        }
        let Some(target) = L::from_usize(target) else {
            return;
        };
        if let Err(err) = self.inner.shrink_to(target, Self::LAYOUT) {
            log::warn!("keeping list buffer of {capacity} slots, shrinking failed: {err}");
        }
    }
}

#[cfg(any(feature = "std_alloc", test))]
mod std_list {
    use core::mem::ManuallyDrop;
    use core::ptr::NonNull;
    use std::vec::Vec;

    use super::ArrayList;
    use crate::alloc::Global;
    use crate::alloc::AltAllocator;
    use crate::types::ErrorReason;
    use crate::types::LengthType;
    use crate::types::ListErr;
    use crate::types::ListResult;

    impl<T, L: LengthType> ArrayList<T, Global, L>
    where
        usize: TryFrom<L>,
    {
        pub const fn new() -> Self {
            return Self::new_in(Global);
        }

        pub fn with_capacity(capacity: L) -> ListResult<Self> {
            return Self::with_capacity_in(Global, capacity);
        }

        /// Adopts the allocation of `vec` without copying any element.
        ///
        /// Fails with `CapacityOverflow`, dropping `vec`, when its length or
        /// capacity does not fit in `L`.
        pub fn from_vec(vec: Vec<T>) -> ListResult<Self> {
            let overflow = ListErr::new(ErrorReason::CapacityOverflow);
            let Some(length) = L::from_usize(vec.len()) else {
                return Err(overflow);
            };
            let capacity = if size_of::<T>() == 0 {
                L::ZERO_VALUE
            } else {
                L::from_usize(vec.capacity()).ok_or(overflow)?
            };

            let mut vec = ManuallyDrop::new(vec);
            let ptr = NonNull::from(vec.as_mut_slice()).cast::<T>();
            // `Global` frees with the same layout `Vec` allocated with.
            return Ok(unsafe { Self::from_raw_parts_in(ptr, length, capacity, Global) });
        }
    }

    impl<T: Clone, A: AltAllocator, L: LengthType> ArrayList<T, A, L>
    where
        usize: TryFrom<L>,
    {
        /// Copies the live elements into a `Vec`.
        pub fn to_vec(&self) -> Vec<T> {
            return Vec::from(self.as_slice());
        }
    }
}

impl<T, A: AltAllocator, L: LengthType> Drop for ArrayList<T, A, L>
where
    usize: TryFrom<L>,
{
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
        self.inner.release(Self::LAYOUT);
    }
}

impl<T, A: AltAllocator, L: LengthType> Index<L> for ArrayList<T, A, L>
where
    usize: TryFrom<L>,
{
    type Output = T;

    fn index(&self, index: L) -> &T {
        return &self.as_slice()[Self::index_usize(index)];
    }
}

impl<T, A: AltAllocator, L: LengthType> IndexMut<L> for ArrayList<T, A, L>
where
    usize: TryFrom<L>,
{
    fn index_mut(&mut self, index: L) -> &mut T {
        return &mut self.as_mut_slice()[Self::index_usize(index)];
    }
}

impl<'a, T, A: AltAllocator, L: LengthType> IntoIterator for &'a ArrayList<T, A, L>
where
    usize: TryFrom<L>,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<T: fmt::Debug, A: AltAllocator, L: LengthType> fmt::Debug for ArrayList<T, A, L>
where
    usize: TryFrom<L>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
