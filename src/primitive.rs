//! Defines a trait for the scalar element types a [`crate::Deque`] can hold.

use core::fmt::Debug;

use num_traits::Zero;

/// A primitive scalar that can be stored in a [`crate::Deque`].
///
/// Each type reserves one value, the _sentinel_, to mark storage slots that hold no element.
/// For numeric types this is zero; for [`char`] it is `'\0'` ([`char::MIN`]).
///
/// Equality is the type's own [`PartialEq`]; for floats this means `-0.0` compares equal to the
/// sentinel and `NaN` never compares equal to anything.
///
/// Example:
/// ```
/// use primdeque::Primitive;
/// assert_eq!(<i32 as Primitive>::sentinel(), 0);
/// assert_eq!(<char as Primitive>::sentinel(), '\0');
/// assert!(0.0f64.is_sentinel());
/// assert!(!'a'.is_sentinel());
/// ```
pub trait Primitive:
Copy + Clone + Sized + PartialEq + Debug {
    /// Returns the reserved "no element" value of this type.
    fn sentinel() -> Self;

    /// Returns whether this value equals the sentinel.
    fn is_sentinel(self) -> bool {
        self == Self::sentinel()
    }
}

macro_rules! impl_zero_sentinel {
    ($($t:ty),* $(,)?) => {
        $(
            impl Primitive for $t {
                #[inline]
                fn sentinel() -> Self { <$t as Zero>::zero() }
            }
        )*
    };
}

impl_zero_sentinel!(i8, i16, i32, i64, i128, isize);
impl_zero_sentinel!(u8, u16, u32, u64, u128, usize);
impl_zero_sentinel!(f32, f64);

impl Primitive for char {
    #[inline]
    fn sentinel() -> Self { char::MIN }
}
