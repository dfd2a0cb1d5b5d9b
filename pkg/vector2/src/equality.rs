//! Approximate comparisons.
//!
//! PartialEq on vectors is always an exact comparison of each component. These
//! impls allow comparing float vectors within some tolerance using the approx
//! macros (e.g. assert_abs_diff_eq!).

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::angle::Angle;
use crate::vector2::Vector2;

impl<T: AbsDiffEq> AbsDiffEq for Vector2<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        T::abs_diff_eq(&self.x, &other.x, epsilon) && T::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl<T: RelativeEq> RelativeEq for Vector2<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

impl<T: UlpsEq> UlpsEq for Vector2<T>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        T::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && T::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
    }
}

impl<T: AbsDiffEq + Copy> AbsDiffEq for Angle<T> {
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        T::abs_diff_eq(&self.as_radians(), &other.as_radians(), epsilon)
    }
}

impl<T: RelativeEq + Copy> RelativeEq for Angle<T> {
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        T::relative_eq(&self.as_radians(), &other.as_radians(), epsilon, max_relative)
    }
}

impl<T: UlpsEq + Copy> UlpsEq for Angle<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        T::ulps_eq(&self.as_radians(), &other.as_radians(), epsilon, max_ulps)
    }
}
