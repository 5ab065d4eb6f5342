pub mod bisect;
pub mod point_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global numeric tolerance for floating-point comparisons.
///
/// Fixed (not scale-aware): the envelope merge relies on the same
/// absolute tolerance regardless of polygon size.
pub const TOLERANCE: f64 = 1e-10;

/// Returns whether `x` and `y` coincide within [`TOLERANCE`].
#[inline]
#[must_use]
pub fn equal(x: f64, y: f64) -> bool {
    (x - y).abs() < TOLERANCE
}

/// Snaps `x` to exactly 0.0 when it is within [`TOLERANCE`] of zero.
#[inline]
#[must_use]
pub fn trim(x: f64) -> f64 {
    if equal(x, 0.0) {
        0.0
    } else {
        x
    }
}
