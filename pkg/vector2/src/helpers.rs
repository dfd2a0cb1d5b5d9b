use crate::vector2::{Vector2, Vector2f, Vector2i, Vector2u};

#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector2<T> {
    Vector2::new(x, y)
}

#[inline]
pub const fn vec2f(x: f32, y: f32) -> Vector2f {
    Vector2f::new(x, y)
}

#[inline]
pub const fn vec2i(x: i32, y: i32) -> Vector2i {
    Vector2i::new(x, y)
}

#[inline]
pub const fn vec2u(x: u32, y: u32) -> Vector2u {
    Vector2u::new(x, y)
}
