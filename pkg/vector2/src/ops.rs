//! Arithmetic operators for Vector2.
//!
//! Vector with vector operations (+, -) and scalar operations (*, /) are all
//! applied component-wise. Scalar multiplication works with the scalar on
//! either side, but scalar-on-the-left is only implemented for primitive
//! element types.

use core::ops;

use auto_ops::*;

use crate::vector2::Vector2;

impl<T: ops::Neg<Output = T>> ops::Neg for Vector2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vector2::new(-self.x, -self.y)
    }
}

impl<T: Copy + ops::Neg<Output = T>> ops::Neg for &Vector2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn neg(self) -> Vector2<T> {
        -*self
    }
}

/// Implements a component-wise vector-vector operator and its assigning
/// counterpart for every combination of owned and borrowed operands.
macro_rules! cwise_binary_op {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl<T: ops::$op_trait<Output = T>> ops::$op_trait for Vector2<T> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Copy + ops::$op_trait<Output = T>> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: &Vector2<T>) -> Self {
                self $op *rhs
            }
        }

        impl<T: Copy + ops::$op_trait<Output = T>> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;

            #[inline]
            fn $op_fn(self, rhs: Vector2<T>) -> Vector2<T> {
                *self $op rhs
            }
        }

        impl<'a, 'b, T: Copy + ops::$op_trait<Output = T>> ops::$op_trait<&'b Vector2<T>>
            for &'a Vector2<T>
        {
            type Output = Vector2<T>;

            #[inline]
            fn $op_fn(self, rhs: &'b Vector2<T>) -> Vector2<T> {
                *self $op *rhs
            }
        }

        impl<T: ops::$assign_trait> ops::$assign_trait for Vector2<T> {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                ops::$assign_trait::$assign_fn(&mut self.x, rhs.x);
                ops::$assign_trait::$assign_fn(&mut self.y, rhs.y);
            }
        }

        impl<T: Copy + ops::$assign_trait> ops::$assign_trait<&Vector2<T>> for Vector2<T> {
            #[inline]
            fn $assign_fn(&mut self, rhs: &Vector2<T>) {
                ops::$assign_trait::$assign_fn(self, *rhs);
            }
        }
    };
}

cwise_binary_op!(Add, add, AddAssign, add_assign, +);
cwise_binary_op!(Sub, sub, SubAssign, sub_assign, -);

/// Implements an operator between a vector and a scalar of the vector's
/// element type (scalar on the right).
macro_rules! scalar_binary_op {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl<T: Copy + ops::$op_trait<Output = T>> ops::$op_trait<T> for Vector2<T> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: T) -> Self {
                Vector2::new(self.x $op rhs, self.y $op rhs)
            }
        }

        impl<T: Copy + ops::$op_trait<Output = T>> ops::$op_trait<T> for &Vector2<T> {
            type Output = Vector2<T>;

            #[inline]
            fn $op_fn(self, rhs: T) -> Vector2<T> {
                *self $op rhs
            }
        }

        impl<T: Copy + ops::$assign_trait> ops::$assign_trait<T> for Vector2<T> {
            #[inline]
            fn $assign_fn(&mut self, rhs: T) {
                ops::$assign_trait::$assign_fn(&mut self.x, rhs);
                ops::$assign_trait::$assign_fn(&mut self.y, rhs);
            }
        }
    };
}

scalar_binary_op!(Mul, mul, MulAssign, mul_assign, *);
// NOTE: No zero check. Integers truncate (and panic on a zero divisor) while
// floats follow IEEE 754.
scalar_binary_op!(Div, div, DivAssign, div_assign, /);

/// 'scalar * vector' can't be implemented generically for all T as the scalar
/// type would be the Self type of a foreign trait impl.
macro_rules! scalar_lhs_mul {
    ($($t:ident)*) => {
        $(
            impl_op_ex!(* |lhs: $t, rhs: &Vector2<$t>| -> Vector2<$t> {
                Vector2::new(lhs * rhs.x, lhs * rhs.y)
            });
        )*
    };
}

scalar_lhs_mul!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);
