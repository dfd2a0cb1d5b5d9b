use core::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{Float, Zero};

/// Base trait for all element types that can be stored in a vector.
///
/// Integer, unsigned and floating point primitives all qualify. Operations
/// which only make sense for real numbers additionally require
/// FloatElementType.
pub trait ElementType:
    Copy
    + PartialEq
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

impl<T> ElementType for T where
    T: Copy
        + PartialEq
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
{
}

/// Real valued element types. Required by length, normalization and all angle
/// based operations.
///
/// Every num_traits::Float gets this for free. A custom numeric type which
/// doesn't implement Float can still implement this trait directly to supply
/// its own transcendental functions.
pub trait FloatElementType: ElementType + Neg<Output = Self> {
    fn sqrt(self) -> Self;

    fn sin(self) -> Self;

    fn cos(self) -> Self;

    /// Four quadrant arctangent of self / other in radians within [-pi, pi].
    fn atan2(self, other: Self) -> Self;

    fn to_degrees(self) -> Self;

    fn to_radians(self) -> Self;
}

impl<T: Float> FloatElementType for T {
    #[inline]
    fn sqrt(self) -> Self {
        Float::sqrt(self)
    }

    #[inline]
    fn sin(self) -> Self {
        Float::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        Float::cos(self)
    }

    #[inline]
    fn atan2(self, other: Self) -> Self {
        Float::atan2(self, other)
    }

    #[inline]
    fn to_degrees(self) -> Self {
        Float::to_degrees(self)
    }

    #[inline]
    fn to_radians(self) -> Self {
        Float::to_radians(self)
    }
}
