use std::fmt::Debug;
use std::iter::Map;
use std::mem::{size_of, transmute_copy};
use std::ops::RangeInclusive;

/// Trait for types that can be represented by a contiguous range of primitive integers.
///
/// # Safety
///
/// Must only be implemented for types that can be safely transmuted to and from [`Integer::Repr`].
pub unsafe trait Integer: Copy {
    /// The equivalent primitive integer type.
    type Repr: Primitive;

    /// The minimum repr.
    const MIN: Self::Repr;

    /// The maximum repr.
    const MAX: Self::Repr;

    /// Casts from [`Integer::Repr`].
    #[inline(always)]
    fn new(i: Self::Repr) -> Self {
        debug_assert!(Self::in_range(i));
        debug_assert_eq!(size_of::<Self>(), size_of::<Self::Repr>());
        unsafe { transmute_copy(&i) }
    }

    /// Casts from [`Integer::Repr`] if in the range `(Self::MIN..=Self::MAX)`.
    #[inline(always)]
    fn try_new(i: Self::Repr) -> Option<Self> {
        Self::in_range(i).then(|| Self::new(i))
    }

    /// Casts to [`Integer::Repr`].
    #[inline(always)]
    fn get(self) -> Self::Repr {
        unsafe { transmute_copy(&self) }
    }

    /// Whether a value is in the range `(Self::MIN..=Self::MAX)`.
    #[inline(always)]
    fn in_range(i: Self::Repr) -> bool {
        Self::MIN <= i && i <= Self::MAX
    }

    /// An iterator over all values in the range [`Integer::MIN`]..=[`Integer::MAX`].
    #[inline(always)]
    #[allow(clippy::type_complexity)]
    fn iter() -> Map<RangeInclusive<Self::Repr>, fn(Self::Repr) -> Self>
    where
        RangeInclusive<Self::Repr>: Iterator<Item = Self::Repr>,
    {
        (Self::MIN..=Self::MAX).map(Self::new)
    }
}

/// Trait for primitive integer types.
pub trait Primitive: Debug + Copy + Eq + Ord {}

macro_rules! impl_primitive_for {
    ($($i: ty),*) => {
        $(impl Primitive for $i {})*
    };
}

impl_primitive_for!(i8, i16, i32, i64, u8, u16, u32, u64);
