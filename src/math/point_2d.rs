//! 2D point/vector helpers shared by the polygon and perimeter modules.
//!
//! Angle conventions: oriented angles are measured counterclockwise and
//! normalized to `[0, 2*pi)`, with values within [`TOLERANCE`] of zero
//! snapped to exactly 0 so that parallel directions compare cleanly.

use std::f64::consts::PI;

use super::{trim, Point2, Vector2};

/// Polar angle of a vector, in `(-pi, pi]`.
#[inline]
#[must_use]
pub fn polar_angle(v: Vector2) -> f64 {
    v.y.atan2(v.x)
}

/// Rotation of a vector by `pi/2` counterclockwise.
#[inline]
#[must_use]
pub fn ortho(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Oriented angle from `v1` to `v2`, normalized to `[0, 2*pi)`.
#[must_use]
pub fn vector_angle(v1: Vector2, v2: Vector2) -> f64 {
    let angle = trim(v1.perp(&v2).atan2(v1.dot(&v2)));
    if angle < 0.0 {
        angle + 2.0 * PI
    } else {
        angle
    }
}

/// Oriented angle `(p, at, q)`, normalized to `[0, 2*pi)`.
#[must_use]
pub fn oriented_angle(at: Point2, p: Point2, q: Point2) -> f64 {
    vector_angle(p - at, q - at)
}

/// Signed area of the triangle `(at, p, q)`; positive when the triangle
/// winds counterclockwise.
#[inline]
#[must_use]
pub fn signed_triangle_area(at: Point2, p: Point2, q: Point2) -> f64 {
    (p - at).perp(&(q - at)) / 2.0
}

/// Unsigned area of the triangle `(at, p, q)`.
#[inline]
#[must_use]
pub fn triangle_area(at: Point2, p: Point2, q: Point2) -> f64 {
    signed_triangle_area(at, p, q).abs()
}

/// Distance from `pt` to the line through `p` and `q`.
///
/// Falls back to the point-to-point distance `|pt - p|` when `p == q`.
#[must_use]
pub fn line_distance(pt: Point2, p: Point2, q: Point2) -> f64 {
    let v = q - p;
    let len = v.norm();
    if len == 0.0 {
        (pt - p).norm()
    } else {
        (ortho(v) / len).dot(&(pt - q)).abs()
    }
}

/// Normalized projection of `pt` onto the segment `pq`: 0 when the
/// projection falls on `p`, 1 when it falls on `q`.
///
/// Degenerates to `|pt - p|` when `p == q`.
#[must_use]
pub fn unit_projection(pt: Point2, p: Point2, q: Point2) -> f64 {
    let v = q - p;
    let len = v.norm();
    if len == 0.0 {
        (pt - p).norm()
    } else {
        (v / len).dot(&((pt - p) / len))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn vector_angle_quadrants() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert_relative_eq!(vector_angle(x, y), FRAC_PI_2, epsilon = TOLERANCE);
        // Clockwise quarter turn lands in the upper half of [0, 2*pi).
        assert_relative_eq!(vector_angle(y, x), 3.0 * FRAC_PI_2, epsilon = TOLERANCE);
    }

    #[test]
    fn vector_angle_snaps_parallel_to_zero() {
        let v = Vector2::new(2.0, 1.0);
        let w = Vector2::new(4.0, 2.0 + 1e-13);
        assert_eq!(vector_angle(v, w), 0.0);
    }

    #[test]
    fn oriented_angle_right_turn() {
        let ang = oriented_angle(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
        assert_relative_eq!(ang, FRAC_PI_2, epsilon = TOLERANCE);
    }

    #[test]
    fn triangle_area_signs() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let c = p(0.0, 1.0);
        assert_relative_eq!(signed_triangle_area(a, b, c), 0.5, epsilon = TOLERANCE);
        assert_relative_eq!(signed_triangle_area(a, c, b), -0.5, epsilon = TOLERANCE);
        assert_relative_eq!(triangle_area(a, c, b), 0.5, epsilon = TOLERANCE);
    }

    #[test]
    fn line_distance_basic_and_degenerate() {
        let d = line_distance(p(0.0, 2.0), p(-1.0, 0.0), p(1.0, 0.0));
        assert_relative_eq!(d, 2.0, epsilon = TOLERANCE);
        // p == q: distance to the point itself.
        let d = line_distance(p(3.0, 4.0), p(0.0, 0.0), p(0.0, 0.0));
        assert_relative_eq!(d, 5.0, epsilon = TOLERANCE);
    }

    #[test]
    fn unit_projection_endpoints_and_midpoint() {
        let a = p(0.0, 0.0);
        let b = p(2.0, 0.0);
        assert_relative_eq!(unit_projection(p(0.0, 1.0), a, b), 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(unit_projection(p(2.0, -3.0), a, b), 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(unit_projection(p(1.0, 5.0), a, b), 0.5, epsilon = TOLERANCE);
        // Projection beyond the segment is not clamped.
        assert_relative_eq!(unit_projection(p(4.0, 0.0), a, b), 2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn ortho_rotates_counterclockwise() {
        let v = ortho(Vector2::new(1.0, 0.0));
        assert_relative_eq!(v.x, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(v.y, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn polar_angle_basic() {
        assert_relative_eq!(
            polar_angle(Vector2::new(0.0, 1.0)),
            FRAC_PI_2,
            epsilon = TOLERANCE
        );
    }
}
