// ============================================================================
// Element Trait
// The numeric capability a vector is generic over
// ============================================================================

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Built-in integer and floating-point types that can be stored in a
/// [`NumericVector`](super::NumericVector).
///
/// The trait is sealed: only the primitive numeric types implement it.
///
/// # Arithmetic
/// Element arithmetic follows the type's native two's-complement semantics.
/// Integer operations wrap on overflow in every build profile instead of
/// panicking in debug builds, so results never depend on the profile.
/// Floating-point operations are the plain IEEE 754 operations.
pub trait Element:
    sealed::Sealed + Copy + PartialOrd + Default + fmt::Debug + fmt::Display + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// Widen to `f64` for tolerance comparisons and square roots.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`.
    ///
    /// Integers truncate toward zero and saturate at their bounds; NaN
    /// becomes zero.
    fn from_f64(value: f64) -> Self;

    fn elem_add(self, rhs: Self) -> Self;
    fn elem_sub(self, rhs: Self) -> Self;
    fn elem_mul(self, rhs: Self) -> Self;

    /// Division. The divisor must already have passed [`Element::is_zero_divisor`].
    fn elem_div(self, rhs: Self) -> Self;

    /// Whether `self` is unusable as a divisor under `tolerance`.
    ///
    /// Floats are rejected when `|self| <= tolerance`, integers only when
    /// exactly zero.
    fn is_zero_divisor(self, tolerance: f64) -> bool;
}

macro_rules! int_element {
    ($($types:ty),+) => {
        $(
            impl sealed::Sealed for $types {}

            impl Element for $types {
                const ZERO: Self = 0;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as Self
                }

                #[inline]
                fn elem_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn elem_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn elem_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn elem_div(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }

                #[inline]
                fn is_zero_divisor(self, _tolerance: f64) -> bool {
                    self == 0
                }
            }
        )+
    };
}
int_element!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_element {
    ($($types:ty),+) => {
        $(
            impl sealed::Sealed for $types {}

            impl Element for $types {
                const ZERO: Self = 0.0;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as Self
                }

                #[inline]
                fn elem_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn elem_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn elem_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn elem_div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn is_zero_divisor(self, tolerance: f64) -> bool {
                    (self as f64).abs() <= tolerance
                }
            }
        )+
    };
}
float_element!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(<i32 as Element>::ZERO, 0);
        assert_eq!(<u8 as Element>::ZERO, 0);
        assert_eq!(<f64 as Element>::ZERO, 0.0);
    }

    #[test]
    fn test_integer_wraparound() {
        assert_eq!(i8::MAX.elem_add(1), i8::MIN);
        assert_eq!(0u8.elem_sub(1), u8::MAX);
        assert_eq!(i32::MIN.elem_div(-1), i32::MIN);
    }

    #[test]
    fn test_from_f64_truncates() {
        assert_eq!(<i32 as Element>::from_f64(3.9), 3);
        assert_eq!(<i32 as Element>::from_f64(-3.9), -3);
        assert_eq!(<u8 as Element>::from_f64(1000.0), u8::MAX);
        assert_eq!(<i64 as Element>::from_f64(f64::NAN), 0);
    }

    #[test]
    fn test_zero_divisor() {
        assert!(0i32.is_zero_divisor(1e-10));
        assert!(!1i32.is_zero_divisor(10.0));
        assert!(1e-11f64.is_zero_divisor(1e-10));
        assert!(1e-10f64.is_zero_divisor(1e-10));
        assert!(!1e-9f64.is_zero_divisor(1e-10));
        assert!((-0.5f32).is_zero_divisor(0.5));
    }
}
