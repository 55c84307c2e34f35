//! Epsilon-tolerant float comparisons shared by the intersection and shading code.
//!
//! `less_or_eq` and `more_or_eq` are not the negations of `more` and `less`:
//! both accept the whole `(-EPSILON, EPSILON)` band around equality.

pub const EPSILON: f32 = 1e-5;

/// Distance sentinel for "nothing hit yet".
pub const INFINITY: f32 = 1e9;

#[inline]
pub fn less(a: f32, b: f32) -> bool {
    a - b < -EPSILON
}

#[inline]
pub fn more(a: f32, b: f32) -> bool {
    a - b > EPSILON
}

#[inline]
pub fn less_or_eq(a: f32, b: f32) -> bool {
    a - b < EPSILON
}

#[inline]
pub fn more_or_eq(a: f32, b: f32) -> bool {
    a - b > -EPSILON
}

#[inline]
pub fn equal(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON
}
