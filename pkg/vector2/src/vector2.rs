use core::ops::{Index, IndexMut, Neg};

use num_traits::{AsPrimitive, NumCast, One, ToPrimitive, Zero};

use crate::angle::Angle;
use crate::element::{ElementType, FloatElementType};
use crate::error::{Error, Result};

/// A 2-dimensional vector with x and y components.
///
/// Used for anything that has two dimensions: positions, sizes, velocities,
/// directions, etc. Any pair of values is a valid vector and equality is an
/// exact comparison of both components.
///
/// Methods which depend on the magnitude or direction of the vector (length,
/// normalization, angles, rotation, projection) are only available when T is
/// a FloatElementType.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

pub type Vector2i = Vector2<i32>;
pub type Vector2u = Vector2<u32>;
pub type Vector2f = Vector2<f32>;
pub type Vector2d = Vector2<f64>;

impl<T> Vector2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Create a new vector with each component converted to another type.
    ///
    /// Conversions behave like an 'as' cast: floats are truncated towards zero
    /// when converted to integers and out of range values saturate (or wrap for
    /// integer to integer casts). Use try_cast() to detect lossy conversions.
    #[inline]
    pub fn cast<U>(self) -> Vector2<U>
    where
        T: AsPrimitive<U>,
        U: 'static + Copy,
    {
        Vector2::new(self.x.as_(), self.y.as_())
    }

    /// Like cast() but fails if either component isn't representable in U.
    pub fn try_cast<U: NumCast>(self) -> Result<Vector2<U>>
    where
        T: ToPrimitive,
    {
        let x = <U as NumCast>::from(self.x).ok_or(Error::CastOutOfRange { component: "x" });
        let y = <U as NumCast>::from(self.y).ok_or(Error::CastOutOfRange { component: "y" });

        match (x, y) {
            (Ok(x), Ok(y)) => Ok(Vector2::new(x, y)),
            (Err(e), _) | (_, Err(e)) => {
                log::trace!("vector component not representable: {}", e);
                Err(e)
            }
        }
    }
}

impl<T: Zero + One> Vector2<T> {
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }
}

impl<T: Zero> Zero for Vector2<T> {
    fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl<T: Zero> Default for Vector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: ElementType> Vector2<T> {
    /// Computes the dot product of two vectors.
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Z component of the cross product of the two vectors when embedded in the
    /// XY plane of a 3d space (the X and Y components are always zero).
    ///
    /// Positive if rhs is counter clockwise of self.
    #[inline]
    pub fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Square of the vector's length.
    ///
    /// Cheaper than length() and suitable for comparing magnitudes.
    #[inline]
    pub fn length_sq(self) -> T {
        self.dot(self)
    }

    /// Component-wise product: (x * rhs.x, y * rhs.y). Mainly used for scales.
    #[inline]
    pub fn cwise_mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }

    /// Component-wise quotient: (x / rhs.x, y / rhs.y).
    ///
    /// Neither component of rhs may be zero.
    #[inline]
    pub fn cwise_div(self, rhs: Self) -> Self {
        debug_assert!(
            !rhs.x.is_zero() && !rhs.y.is_zero(),
            "cwise_div by a vector with a zero component"
        );
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<T: ElementType + Neg<Output = T>> Vector2<T> {
    /// Rotates the vector by 90 degrees counter clockwise: (x, y) becomes
    /// (-y, x).
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl<T: FloatElementType> Vector2<T> {
    pub fn length(self) -> T {
        self.length_sq().sqrt()
    }

    /// Scales the vector to have a length of |new_length|. A negative length
    /// flips the direction.
    ///
    /// Must not be called on a zero vector.
    pub fn with_length(self, new_length: T) -> Self {
        debug_assert!(!self.is_zero(), "with_length of a zero vector");
        self * new_length / self.length()
    }

    /// Vector with the same direction but a length of 1.
    ///
    /// Must not be called on a zero vector.
    pub fn normalized(self) -> Self {
        debug_assert!(!self.is_zero(), "normalized zero vector");
        self / self.length()
    }

    /// Signed angle in the interval [-180, 180] degrees by which self must be
    /// rotated to point in the same direction as rhs.
    ///
    /// Neither vector may be zero.
    pub fn signed_angle_to(self, rhs: Self) -> Angle<T> {
        debug_assert!(!self.is_zero(), "signed_angle_to from a zero vector");
        debug_assert!(!rhs.is_zero(), "signed_angle_to a zero vector");
        Angle::radians(self.cross(rhs).atan2(self.dot(rhs)))
    }

    /// Angle from the +x axis in the interval [-180, 180] degrees.
    ///
    /// (1, 0) is 0 degrees and (0, 1) is 90 degrees. Must not be called on a
    /// zero vector.
    pub fn polar_angle(self) -> Angle<T> {
        debug_assert!(!self.is_zero(), "polar_angle of a zero vector");
        Angle::radians(self.y.atan2(self.x))
    }

    /// Vector with the same length pointing at the given angle from the +x
    /// axis. A zero vector stays zero.
    pub fn with_polar_angle(self, angle: Angle<T>) -> Self {
        let length = self.length();
        let theta = angle.as_radians();
        Self::new(length * theta.cos(), length * theta.sin())
    }

    /// Rotates counter clockwise by the given angle. A zero vector stays zero.
    pub fn rotated_by(self, angle: Angle<T>) -> Self {
        let theta = angle.as_radians();
        let (c, s) = (theta.cos(), theta.sin());

        // Both outputs depend on both of the original components.
        let (x, y) = (self.x, self.y);
        Self::new(c * x - s * y, s * x + c * y)
    }

    /// Orthogonal projection of self onto the line spanned by axis.
    ///
    /// axis need not be a unit vector but must not be zero.
    pub fn projected_onto(self, axis: Self) -> Self {
        debug_assert!(!axis.is_zero(), "projected_onto a zero axis");
        axis * (self.dot(axis) / axis.length_sq())
    }

    /// In-place version of with_length().
    pub fn set_length(&mut self, new_length: T) {
        *self = self.with_length(new_length);
    }

    /// In-place version of with_polar_angle().
    pub fn set_polar_angle(&mut self, angle: Angle<T>) {
        *self = self.with_polar_angle(angle);
    }

    pub fn rotate_by(&mut self, angle: Angle<T>) {
        *self = self.rotated_by(angle);
    }
}

impl<T> Index<usize> for Vector2<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of range: {}", i),
        }
    }
}

impl<T> IndexMut<usize> for Vector2<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2 index out of range: {}", i),
        }
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_is_zero() {
        assert_eq!(Vector2i::default(), Vector2i::new(0, 0));
        assert_eq!(Vector2u::default(), Vector2u::new(0, 0));
        assert_eq!(Vector2f::default(), Vector2f::new(0.0, 0.0));
        assert!(Vector2d::zero().is_zero());
        assert!(!Vector2i::new(0, 1).is_zero());
    }

    #[test]
    fn construction() {
        let v = Vector2f::new(16.5, 24.0);
        assert_eq!(v.x, 16.5);
        assert_eq!(v.y, 24.0);

        assert_eq!(Vector2i::from((1, 2)), Vector2i::new(1, 2));
        assert_eq!(Vector2i::from([3, 4]), Vector2i::new(3, 4));
        assert_eq!(<(i32, i32)>::from(Vector2i::new(5, 6)), (5, 6));
        assert_eq!(<[i32; 2]>::from(Vector2i::new(7, 8)), [7, 8]);

        assert_eq!(Vector2i::unit_x(), Vector2i::new(1, 0));
        assert_eq!(Vector2f::unit_y(), Vector2f::new(0.0, 1.0));
    }

    #[test]
    fn cast_between_element_types() {
        assert_eq!(Vector2i::new(3, 4).cast::<f32>(), Vector2f::new(3.0, 4.0));
        assert_eq!(Vector2f::new(1.9, -2.7).cast::<i32>(), Vector2i::new(1, -2));
        assert_eq!(Vector2u::new(7, 9).cast::<i32>(), Vector2i::new(7, 9));
    }

    #[test]
    fn try_cast_reports_out_of_range() {
        assert_eq!(Vector2i::new(3, 4).try_cast::<u32>(), Ok(Vector2u::new(3, 4)));
        assert_eq!(
            Vector2i::new(-1, 4).try_cast::<u32>(),
            Err(Error::CastOutOfRange { component: "x" })
        );
        assert_eq!(
            Vector2f::new(1.0, f32::NAN).try_cast::<i32>(),
            Err(Error::CastOutOfRange { component: "y" })
        );
    }

    #[test]
    fn index() {
        let mut v = Vector2i::new(1, 2);
        assert_eq!(v[0], 1);
        assert_eq!(v[1], 2);
        v[1] = 5;
        assert_eq!(v, Vector2i::new(1, 5));
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let v = Vector2i::new(1, 2);
        let _ = v[2];
    }

    #[test]
    fn dot_and_cross() {
        let a = Vector2i::new(2, 3);
        let b = Vector2i::new(-4, 5);
        assert_eq!(a.dot(b), 7);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.cross(b), 22);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(Vector2f::new(1.0, 0.0).cross(Vector2f::new(0.0, 1.0)), 1.0);
        assert_eq!(a.length_sq(), 13);
    }

    #[test]
    fn cwise() {
        assert_eq!(
            Vector2i::new(4, 6).cwise_div(Vector2i::new(2, 3)),
            Vector2i::new(2, 2)
        );
        assert_eq!(
            Vector2f::new(1.5, 2.0).cwise_mul(Vector2f::new(2.0, -3.0)),
            Vector2f::new(3.0, -6.0)
        );
        // Integer division truncates.
        assert_eq!(
            Vector2u::new(7, 9).cwise_div(Vector2u::new(2, 4)),
            Vector2u::new(3, 2)
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cwise_div")]
    fn cwise_div_by_zero_component() {
        let _ = Vector2f::new(1.0, 1.0).cwise_div(Vector2f::new(1.0, 0.0));
    }

    #[test]
    fn length() {
        assert_eq!(Vector2f::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector2f::new(3.0, 4.0).length_sq(), 25.0);
        assert_eq!(Vector2d::zero().length(), 0.0);
    }

    #[test]
    fn normalized() {
        let v = Vector2f::new(-3.0, 4.0).normalized();
        assert_abs_diff_eq!(v, Vector2f::new(-0.6, 0.8), epsilon = 1e-6);
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero vector")]
    fn normalized_zero_vector() {
        let _ = Vector2f::zero().normalized();
    }

    #[test]
    fn with_length() {
        let v = Vector2d::new(1.0, 1.0);
        assert_abs_diff_eq!(v.with_length(4.0).length(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.with_length(-4.0), -v.with_length(4.0), epsilon = 1e-12);
        assert_abs_diff_eq!(
            Vector2d::new(0.0, 2.0).with_length(5.0),
            Vector2d::new(0.0, 5.0)
        );
    }

    #[test]
    fn perpendicular() {
        assert_eq!(Vector2f::new(1.0, 0.0).perpendicular(), Vector2f::new(0.0, 1.0));
        assert_eq!(Vector2i::new(2, 3).perpendicular(), Vector2i::new(-3, 2));
        assert_eq!(Vector2i::zero().perpendicular(), Vector2i::zero());
    }

    #[test]
    fn polar_angle() {
        assert_abs_diff_eq!(Vector2f::new(1.0, 0.0).polar_angle().as_degrees(), 0.0);
        assert_abs_diff_eq!(
            Vector2f::new(0.0, 1.0).polar_angle().as_degrees(),
            90.0,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            Vector2f::new(-1.0, 0.0).polar_angle().as_degrees(),
            180.0,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            Vector2f::new(0.0, -2.0).polar_angle().as_degrees(),
            -90.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn with_polar_angle() {
        let v = Vector2d::new(3.0, 4.0).with_polar_angle(Angle::degrees(90.0));
        assert_abs_diff_eq!(v, Vector2d::new(0.0, 5.0), epsilon = 1e-12);

        assert_eq!(
            Vector2d::zero().with_polar_angle(Angle::degrees(30.0)),
            Vector2d::zero()
        );
    }

    #[test]
    fn rotated_by() {
        let v = Vector2f::new(1.0, 0.0).rotated_by(Angle::degrees(90.0));
        assert_abs_diff_eq!(v, Vector2f::new(0.0, 1.0), epsilon = 1e-6);

        // Would yield (0, 0) if y were computed from an already rotated x.
        let v = Vector2d::new(1.0, 1.0).rotated_by(Angle::degrees(180.0));
        assert_abs_diff_eq!(v, Vector2d::new(-1.0, -1.0), epsilon = 1e-12);

        let v = Vector2d::new(2.0, 0.0).rotated_by(Angle::degrees(-45.0));
        let h = core::f64::consts::SQRT_2;
        assert_abs_diff_eq!(v, Vector2d::new(h, -h), epsilon = 1e-12);

        assert_eq!(
            Vector2f::zero().rotated_by(Angle::degrees(33.0)),
            Vector2f::zero()
        );
    }

    #[test]
    fn in_place_mutators() {
        let mut v = Vector2d::new(3.0, 4.0);
        v.set_length(10.0);
        assert_abs_diff_eq!(v, Vector2d::new(6.0, 8.0), epsilon = 1e-12);

        v.set_polar_angle(Angle::degrees(90.0));
        assert_abs_diff_eq!(v, Vector2d::new(0.0, 10.0), epsilon = 1e-12);

        v.rotate_by(Angle::degrees(90.0));
        assert_abs_diff_eq!(v, Vector2d::new(-10.0, 0.0), epsilon = 1e-12);

        let mut w = Vector2d::new(1.0, 1.0);
        w.rotate_by(Angle::degrees(180.0));
        assert_abs_diff_eq!(w, Vector2d::new(-1.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn signed_angle_to() {
        let a = Vector2d::new(1.0, 0.0);
        assert_abs_diff_eq!(
            a.signed_angle_to(Vector2d::new(0.0, 3.0)).as_degrees(),
            90.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            a.signed_angle_to(Vector2d::new(0.0, -3.0)).as_degrees(),
            -90.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            a.signed_angle_to(Vector2d::new(-1.0, 0.0)).as_degrees(),
            180.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(a.signed_angle_to(a).as_degrees(), 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero vector")]
    fn signed_angle_to_zero_vector() {
        let _ = Vector2f::new(1.0, 0.0).signed_angle_to(Vector2f::zero());
    }

    #[test]
    fn projected_onto() {
        let v = Vector2d::new(2.0, 3.0);
        assert_abs_diff_eq!(
            v.projected_onto(Vector2d::new(5.0, 0.0)),
            Vector2d::new(2.0, 0.0)
        );
        assert_abs_diff_eq!(
            v.projected_onto(Vector2d::new(1.0, 1.0)),
            Vector2d::new(2.5, 2.5),
            epsilon = 1e-12
        );

        // The remainder is orthogonal to the axis.
        let axis = Vector2d::new(-1.0, 4.0);
        let rest = v - v.projected_onto(axis);
        assert_abs_diff_eq!(rest.dot(axis), 0.0, epsilon = 1e-12);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero axis")]
    fn projected_onto_zero_axis() {
        let _ = Vector2f::new(1.0, 2.0).projected_onto(Vector2f::zero());
    }
}
