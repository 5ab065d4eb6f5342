//! Realized bisecting curves.

use crate::math::point_2d::vector_angle;
use crate::math::Point2;

/// A shortest curve dividing a convex polygon into two parts of equal
/// area: either a straight chord or a circular arc meeting the
/// boundary at right angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BisectingCurve {
    /// A straight cut between two boundary points.
    Segment { start: Point2, end: Point2 },
    /// A circular arc, swept counterclockwise from `start` to `end`.
    Arc {
        center: Point2,
        start: Point2,
        end: Point2,
    },
}

impl BisectingCurve {
    #[must_use]
    pub fn is_arc(&self) -> bool {
        matches!(self, Self::Arc { .. })
    }

    /// Length of the curve.
    #[must_use]
    pub fn length(&self) -> f64 {
        match *self {
            Self::Segment { start, end } => (end - start).norm(),
            Self::Arc { center, start, end } => {
                let radius = (start - center).norm();
                radius * vector_angle(start - center, end - center)
            }
        }
    }
}
