use core::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;

use crate::element::FloatElementType;

/// An angle stored internally in radians.
///
/// Construct with Angle::radians or Angle::degrees. Positive angles are
/// counter clockwise in a y-up coordinate system (the +x axis rotates towards
/// the +y axis).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Angle<T = f32> {
    radians: T,
}

impl<T> Angle<T> {
    #[inline]
    pub const fn radians(value: T) -> Self {
        Self { radians: value }
    }
}

impl<T: Copy> Angle<T> {
    #[inline]
    pub fn as_radians(&self) -> T {
        self.radians
    }
}

impl<T: Zero> Angle<T> {
    pub fn zero() -> Self {
        Self::radians(T::zero())
    }
}

impl<T: FloatElementType> Angle<T> {
    #[inline]
    pub fn degrees(value: T) -> Self {
        Self::radians(value.to_radians())
    }

    #[inline]
    pub fn as_degrees(&self) -> T {
        self.radians.to_degrees()
    }

    pub fn sin(&self) -> T {
        self.radians.sin()
    }

    pub fn cos(&self) -> T {
        self.radians.cos()
    }
}

impl<T: Add<Output = T>> Add for Angle<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::radians(self.radians + rhs.radians)
    }
}

impl<T: Sub<Output = T>> Sub for Angle<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::radians(self.radians - rhs.radians)
    }
}

impl<T: Neg<Output = T>> Neg for Angle<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::radians(-self.radians)
    }
}

impl<T: Mul<Output = T>> Mul<T> for Angle<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::radians(self.radians * rhs)
    }
}
