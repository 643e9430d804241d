use core::cmp;
use core::ops;

/// The integer type an `ArrayList` uses for its length, capacity, and indices.
///
/// Picking something narrower than `usize` shrinks the list header, e.g. with `u32`
/// a list is 16 bytes on a 64-bit target instead of `Vec`'s 24. Being unsigned, a
/// length type cannot express a negative index at all.
///
/// This is unsafe to implement because the list relies on the type behaving like
/// an unsigned machine integer: contiguous, totally ordered, and with checked
/// arithmetic that reports every overflow.
pub unsafe trait LengthType
where
    Self: Copy,
    Self: cmp::Eq,
    Self: cmp::Ord,
    Self: ops::Add<Output = Self>,
    Self: ops::AddAssign,
    Self: ops::Sub<Output = Self>,
    Self: ops::SubAssign,
    Self: Sized,
    Self: From<u8>,
    usize: TryFrom<Self>,
{
    const MAX_VALUE: Self;
    const ONE_VALUE: Self;
    const ZERO_VALUE: Self;

    /// Plain `as` cast. Only meaningful for values already known to fit in `usize`.
    fn as_usize(self) -> usize;
    /// `None` when `value` does not fit in `Self`.
    fn from_usize(value: usize) -> Option<Self>;
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_length_type {
    ($($typ:ty),*) => {$(
        unsafe impl LengthType for $typ {
            const MAX_VALUE: Self = Self::MAX;
            const ONE_VALUE: Self = 1;
            const ZERO_VALUE: Self = 0;

            #[inline(always)]
            fn as_usize(self) -> usize {
                return self as usize;
            }

            #[inline]
            fn from_usize(value: usize) -> Option<Self> {
                return Self::try_from(value).ok();
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                return <$typ>::checked_add(self, rhs);
            }
            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                return <$typ>::checked_mul(self, rhs);
            }
        }
    )*};
}

impl_length_type!(usize, u8, u16, u32, u64, u128);
