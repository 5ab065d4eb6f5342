//! Perimeter function of a convex polygon.
//!
//! For a convex region and an area `z`, the perimeter function `pf(z)`
//! is the length of the shortest curve that cuts off exactly the area
//! `z`. For a convex polygon every optimal curve is either a straight
//! chord sliding between two parallel sides or a circular arc centered
//! where two side lines meet, so `pf` is the lower envelope of one
//! partial function per pair of sides. [`ConvexPolygonPf`] assembles
//! and queries that envelope.

use std::f64::consts::PI;

use crate::error::{in_range, not_nan, PerifnError, Result};
use crate::math::point_2d::{
    line_distance, signed_triangle_area, triangle_area, unit_projection, vector_angle,
};
use crate::math::Point2;
use crate::polygon::ConvexPolygon;

pub mod curve;
mod envelope;
mod partial;

pub use curve::BisectingCurve;

use envelope::Piecewise;
use partial::{Form, PartialPf};

/// Wraps `index` into `0..len`.
#[inline]
pub(crate) const fn wrap(index: usize, len: usize) -> usize {
    index % len
}

/// One polygon side, directed along the clockwise boundary.
#[derive(Debug, Clone, Copy)]
struct Side {
    p: Point2,
    q: Point2,
}

/// The perimeter function of a convex polygon.
///
/// The envelope and the maximum are built lazily on first use, so the
/// query methods take `&mut self`. Queries on a polygon with fewer
/// than 3 vertices yield zero-valued results rather than errors.
///
/// ```
/// use perifn::{ConvexPolygon, ConvexPolygonPf};
/// use nalgebra::Point2;
///
/// let mut square = ConvexPolygon::new();
/// square.add_vertex(Point2::new(0.0, 0.0));
/// square.add_vertex(Point2::new(1.0, 0.0));
/// square.add_vertex(Point2::new(1.0, 1.0));
/// square.add_vertex(Point2::new(0.0, 1.0));
/// square.convex_hull();
///
/// let mut pf = ConvexPolygonPf::new(&square);
/// assert!((pf.maximum() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct ConvexPolygonPf {
    sides: Vec<Side>,
    area_v: f64,
    half_area_v: f64,
    piecewise: Option<Piecewise>,
    maximum_v: Option<f64>,
    shortest_v: Option<Option<BisectingCurve>>,
}

impl ConvexPolygonPf {
    /// Captures the sides of `polygon`, which must already be convex
    /// and wound clockwise (see [`ConvexPolygon::convex_hull`]).
    /// Zero-length sides are dropped.
    #[must_use]
    pub fn new(polygon: &ConvexPolygon) -> Self {
        let area_v = polygon.area();
        let vertices = polygon.vertices();
        let mut sides = Vec::new();

        if vertices.len() > 2 {
            for (i, &p) in vertices.iter().enumerate() {
                let q = vertices[wrap(i + 1, vertices.len())];
                if (q - p).norm() == 0.0 {
                    continue;
                }
                sides.push(Side { p, q });
            }
        }

        Self {
            sides,
            area_v,
            half_area_v: area_v / 2.0,
            piecewise: None,
            maximum_v: None,
            shortest_v: None,
        }
    }

    /// Area of the polygon.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.area_v
    }

    /// Half the area of the polygon, the argument of the maximum.
    #[must_use]
    pub fn half_area(&self) -> f64 {
        self.half_area_v
    }

    /// Number of (non-degenerate) sides.
    #[must_use]
    pub fn num_sides(&self) -> usize {
        self.sides.len()
    }

    /// Length of the shortest curve cutting off the area `z`.
    ///
    /// # Errors
    ///
    /// `z` must be a number in `[0, area()]`.
    pub fn pf(&mut self, z: f64) -> Result<f64> {
        not_nan(z, "ConvexPolygonPf::pf", "z")?;
        in_range(
            0.0 <= z && z <= self.area_v && z < f64::INFINITY,
            z,
            "ConvexPolygonPf::pf",
            "z",
        )?;

        Ok(self.piecewise().eval(z))
    }

    /// Largest area `z` with `pf(z) <= p`; inverse of [`Self::pf`] on
    /// the rising branch `[0, half_area()]`.
    ///
    /// # Errors
    ///
    /// `p` must be a number in `[0, maximum()]`.
    pub fn ipf(&mut self, p: f64) -> Result<f64> {
        not_nan(p, "ConvexPolygonPf::ipf", "p")?;

        let maximum = self.maximum();
        in_range(
            0.0 <= p && p <= maximum && p < f64::INFINITY,
            p,
            "ConvexPolygonPf::ipf",
            "p",
        )?;

        Ok(self.piecewise().inverse(p))
    }

    /// The maximum of the perimeter function, `pf(half_area())`.
    pub fn maximum(&mut self) -> f64 {
        if let Some(maximum) = self.maximum_v {
            return maximum;
        }

        let (maximum, _) = self.scan_max();
        self.maximum_v = Some(maximum);
        maximum
    }

    /// The shortest curve bisecting the polygon, or `None` for a
    /// degenerate polygon.
    pub fn shortest(&mut self) -> Option<BisectingCurve> {
        if let Some(cached) = self.shortest_v {
            return cached;
        }

        let (maximum, winner) = self.scan_max();
        if self.maximum_v.is_none() {
            self.maximum_v = Some(maximum);
        }

        let curve = winner.and_then(|(index_1, index_2)| self.side_pair(index_1, index_2, true).1);
        self.shortest_v = Some(curve);
        curve
    }

    /// Number of segments of the piecewise perimeter function over the
    /// full domain `[0, area()]`.
    pub fn num_segments(&mut self) -> usize {
        self.piecewise().num_segments()
    }

    /// Left boundary of segment `index`, `0 <= index <=
    /// num_segments()`; `a(0)` is 0 and `a(num_segments())` is the
    /// polygon area.
    ///
    /// # Errors
    ///
    /// Fails when `index > num_segments()`.
    pub fn a(&mut self, index: usize) -> Result<f64> {
        let num_segments = self.num_segments();

        if index > num_segments {
            return Err(PerifnError::IndexOutOfRange {
                function: "ConvexPolygonPf::a",
                index,
                count: num_segments,
            });
        }

        Ok(self.piecewise().boundary(index))
    }

    /// Arc parameter of segment `index` (1-based): on `[a(index-1),
    /// a(index)]` the perimeter function is `sqrt(2*theta*(z + zeta))`,
    /// or the constant `zeta` when `theta` is zero. Segments past the
    /// midpoint carry negative `theta`.
    ///
    /// # Errors
    ///
    /// Fails unless `1 <= index <= num_segments()`.
    pub fn theta(&mut self, index: usize) -> Result<f64> {
        let num_segments = self.num_segments();

        if index < 1 || index > num_segments {
            return Err(PerifnError::IndexOutOfRange {
                function: "ConvexPolygonPf::theta",
                index,
                count: num_segments,
            });
        }

        Ok(self.piecewise().theta(index))
    }

    /// Shift parameter of segment `index` (1-based); see
    /// [`Self::theta`].
    ///
    /// # Errors
    ///
    /// Fails unless `1 <= index <= num_segments()`.
    pub fn zeta(&mut self, index: usize) -> Result<f64> {
        let num_segments = self.num_segments();

        if index < 1 || index > num_segments {
            return Err(PerifnError::IndexOutOfRange {
                function: "ConvexPolygonPf::zeta",
                index,
                count: num_segments,
            });
        }

        Ok(self.piecewise().zeta(index))
    }

    /// Builds the envelope on first use.
    fn piecewise(&mut self) -> &Piecewise {
        if self.piecewise.is_none() {
            let mut piecewise = Piecewise::new(self.area_v);

            if self.sides.len() > 2 {
                for index_1 in 1..self.sides.len() {
                    for index_2 in 0..index_1 {
                        if let (Some(ppf), _) = self.side_pair(index_1, index_2, false) {
                            piecewise.insert(ppf);
                        }
                    }
                }
            }

            self.maximum_v = Some(piecewise.maximum());
            self.piecewise = Some(piecewise);
        }

        let area = self.area_v;
        self.piecewise.get_or_insert_with(|| Piecewise::new(area))
    }

    /// Finds the least partial-function value at the half area over
    /// all side pairs, and the winning pair.
    ///
    /// `sqrt(pi * area)`, the value for the disk of the same area,
    /// bounds the result from above; no pair beating it means the
    /// polygon is degenerate.
    fn scan_max(&self) -> (f64, Option<(usize, usize)>) {
        if self.sides.len() < 3 {
            return (0.0, None);
        }

        let mut max = (PI * self.area_v).sqrt();
        let mut winner = None;

        for index_1 in 1..self.sides.len() {
            for index_2 in 0..index_1 {
                let (Some(ppf), _) = self.side_pair(index_1, index_2, false) else {
                    continue;
                };

                // arg max outside the definition domain
                if ppf.b < self.half_area_v {
                    continue;
                }

                if ppf.pfb < max {
                    max = ppf.pfb;
                    winner = Some((index_1, index_2));
                }
            }
        }

        (max, winner)
    }

    /// The partial perimeter function of one pair of sides, `None`
    /// when its definition domain is empty. With `want_curve` set, the
    /// curve realizing the value at the half area is also returned
    /// (requires the pair's domain to reach the half area).
    #[allow(clippy::too_many_lines, clippy::similar_names)]
    fn side_pair(
        &self,
        index_1: usize,
        index_2: usize,
        want_curve: bool,
    ) -> (Option<PartialPf>, Option<BisectingCurve>) {
        let side_1 = self.sides[index_1];
        let side_2 = self.sides[index_2];
        let pq1 = side_1.q - side_1.p;
        let pq2 = side_2.q - side_2.p;

        let raw_theta = vector_angle(pq1, -pq2);

        if raw_theta == 0.0 {
            // Parallel sides facing each other: the cutting curve is a
            // straight chord sliding between them.
            let p2 = unit_projection(side_2.p, side_1.p, side_1.q);
            let q2 = unit_projection(side_2.q, side_1.p, side_1.q);

            // no overlap along the common direction
            if p2 <= 0.0 || q2 >= 1.0 {
                return (None, None);
            }

            // extreme chord positions
            let r = if p2 < 1.0 {
                side_1.p + pq1 * p2
            } else {
                side_2.p - pq1 * (p2 - 1.0)
            };
            let s = if q2 < 0.0 {
                side_2.q - pq1 * q2
            } else {
                side_1.p + pq1 * q2
            };

            let area_r = self.area_fanned(index_1, index_2, r);
            let area_s = self.area_fanned(index_2, index_1, s);

            let a = area_r.min(area_s);
            let b = (self.area_v - a).min(self.half_area_v);

            if a == b {
                return (None, None);
            }

            let width = line_distance(side_1.p, side_2.p, side_2.q);
            let ppf = PartialPf::constant(a, b, width);

            let curve = if want_curve && b == self.half_area_v {
                Some(self.chord_curve(side_1, side_2, r, s, area_r, area_s, width))
            } else {
                None
            };

            return (Some(ppf), curve);
        }

        if raw_theta == PI {
            // collinear side lines, no wedge
            return (None, None);
        }

        // apex where the two side lines meet
        let origin = Point2::origin();
        let r = Point2::from(
            (pq1 * signed_triangle_area(origin, side_2.p, side_2.q)
                - pq2 * signed_triangle_area(origin, side_1.p, side_1.q))
                / signed_triangle_area(origin, Point2::from(pq1), Point2::from(pq2)),
        );

        let mut p1 = (side_1.p - r).norm();
        let mut q1 = (side_1.q - r).norm();
        let mut p2 = (side_2.p - r).norm();
        let mut q2 = (side_2.q - r).norm();

        if raw_theta < PI {
            // the wedge opens from side_2 towards side_1
            if p1 <= p2 || q1 >= q2 {
                return (None, None);
            }

            if side_1.q == side_2.p {
                q1 = 0.0;
                p2 = 0.0;
            }

            let r_min = q1.max(p2);
            let mut r_max = p1.min(q2);

            // the arc must not leave the polygon through a side in
            // between
            let mut index = wrap(index_2 + 1, self.sides.len());
            while index != index_1 {
                let side = self.sides[index];
                let proj = unit_projection(r, side.p, side.q);

                if 0.0 < proj && proj < 1.0 {
                    r_max = r_max.min(line_distance(r, side.p, side.q));
                }

                index = wrap(index + 1, self.sides.len());
            }

            if r_min >= r_max {
                return (None, None);
            }

            let theta = raw_theta;
            let zeta =
                triangle_area(r, side_1.q, side_2.p) - self.area_between(index_1, index_2);

            let Some(ppf) = self.sqrt_ppf(theta, zeta, r_min, r_max) else {
                return (None, None);
            };

            let curve = if want_curve && ppf.b == self.half_area_v {
                let rad = ppf.pfb / theta;
                Some(BisectingCurve::Arc {
                    center: r,
                    start: r + (side_1.p - r) * (rad / p1),
                    end: r + (side_2.q - r) * (rad / q2),
                })
            } else {
                None
            };

            (Some(ppf), curve)
        } else {
            // reflex encounter: the wedge opens the other way around
            if p1 >= p2 || q1 <= q2 {
                return (None, None);
            }

            if side_1.p == side_2.q {
                p1 = 0.0;
                q2 = 0.0;
            }

            let r_min = p1.max(q2);
            let mut r_max = q1.min(p2);

            let mut index = wrap(index_1 + 1, self.sides.len());
            while index != index_2 {
                let side = self.sides[index];
                let proj = unit_projection(r, side.p, side.q);

                if 0.0 < proj && proj < 1.0 {
                    r_max = r_max.min(line_distance(r, side.p, side.q));
                }

                index = wrap(index + 1, self.sides.len());
            }

            if r_min >= r_max {
                return (None, None);
            }

            let theta = 2.0 * PI - raw_theta;
            let zeta =
                triangle_area(r, side_1.p, side_2.q) - self.area_between(index_2, index_1);

            let Some(ppf) = self.sqrt_ppf(theta, zeta, r_min, r_max) else {
                return (None, None);
            };

            let curve = if want_curve && ppf.b == self.half_area_v {
                let rad = ppf.pfb / theta;
                Some(BisectingCurve::Arc {
                    center: r,
                    start: r + (side_2.p - r) * (rad / p2),
                    end: r + (side_1.q - r) * (rad / q1),
                })
            } else {
                None
            };

            (Some(ppf), curve)
        }
    }

    /// Finishes a square-root partial function from the wedge
    /// parameters and the admissible radius range, clipping its domain
    /// to the half area.
    fn sqrt_ppf(&self, theta: f64, zeta: f64, r_min: f64, r_max: f64) -> Option<PartialPf> {
        let a = r_min * r_min * theta / 2.0 - zeta;
        let b = r_max * r_max * theta / 2.0 - zeta;

        if a > self.half_area_v {
            return None;
        }

        let mut ppf = PartialPf {
            form: Form::Sqrt,
            a,
            b,
            theta,
            zeta,
            pfa: r_min * theta,
            pfb: r_max * theta,
        };

        if ppf.b > self.half_area_v {
            ppf.b = self.half_area_v;
            ppf.pfb = ppf.pf(ppf.b);
        }

        if ppf.a == ppf.b {
            return None;
        }

        Some(ppf)
    }

    /// The bisecting chord between two parallel sides: the position
    /// along the slide where the cut-off area reaches the half area.
    #[allow(clippy::too_many_arguments)]
    fn chord_curve(
        &self,
        side_1: Side,
        side_2: Side,
        r: Point2,
        s: Point2,
        area_r: f64,
        area_s: f64,
        width: f64,
    ) -> BisectingCurve {
        let pq1 = side_1.q - side_1.p;
        let pq2 = side_2.q - side_2.p;

        let r1 = side_1.p + pq1 * unit_projection(r, side_1.p, side_1.q);
        let s1 = side_1.p + pq1 * unit_projection(s, side_1.p, side_1.q);
        let rs = s1 - r1;
        let rsa = rs.norm();

        if width * rsa == 0.0 {
            return BisectingCurve::Segment { start: r, end: r };
        }

        let t = Point2::from(
            (r1.coords + s1.coords + rs * ((area_s - area_r) / (rsa * width))) / 2.0,
        );
        let tp = unit_projection(t, r1, s1);

        let start = r1 + rs * tp;
        let end = side_2.p + pq2 * unit_projection(start, side_2.p, side_2.q);

        BisectingCurve::Segment { start, end }
    }

    /// Area of the polygon strictly between the two sides, fanned from
    /// the first vertex after `index_1`.
    fn area_between(&self, index_1: usize, index_2: usize) -> f64 {
        let len = self.sides.len();
        let mut index = wrap(index_1 + 1, len);

        if index == index_2 {
            return 0.0;
        }

        let origin = self.sides[index].p;
        let mut area = 0.0;

        index = wrap(index + 1, len);
        while index != index_2 {
            area += triangle_area(origin, self.sides[index].p, self.sides[index].q);
            index = wrap(index + 1, len);
        }

        area
    }

    /// Area of the polygon between the two sides, fanned from `point`.
    fn area_fanned(&self, index_1: usize, index_2: usize, point: Point2) -> f64 {
        let len = self.sides.len();
        let mut index = wrap(index_1 + 1, len);
        let mut area = 0.0;

        while index != index_2 {
            area += triangle_area(point, self.sides[index].p, self.sides[index].q);
            index = wrap(index + 1, len);
        }

        area
    }
}
