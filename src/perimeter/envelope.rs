//! Lower-envelope assembly of partial perimeter functions.

use std::f64::consts::PI;

use super::partial::{EndScan, Form, PartialPf};

/// The perimeter function of the half domain `[0, area/2]`, stored as
/// consecutive segments of partial perimeter functions. The other half
/// follows by the symmetry `pf(z) = pf(area - z)`.
#[derive(Debug, Clone)]
pub(crate) struct Piecewise {
    segments: Vec<PartialPf>,
    area: f64,
    half_area: f64,
}

impl Piecewise {
    /// Seeds the envelope with a sentinel segment spanning the whole
    /// half domain, high enough that any genuine partial function
    /// undercuts it. Keeps the envelope free of holes.
    pub fn new(area: f64) -> Self {
        let half_area = area / 2.0;
        Self {
            segments: vec![PartialPf::constant(
                0.0,
                half_area,
                (10.0 * PI * area).sqrt(),
            )],
            area,
            half_area,
        }
    }

    /// Splices a partial function into the envelope, keeping the
    /// pointwise minimum.
    ///
    /// Scans left to right: wherever the newcomer dips below the
    /// current occupant, the occupant is split or trimmed, dominated
    /// segments are dropped, and the newcomer fills the gap. A single
    /// partial function can win several disjoint intervals, so the
    /// scan restarts after each splice.
    pub fn insert(&mut self, ppf: PartialPf) {
        let segments = &mut self.segments;
        let mut i = 0;

        'splice: loop {
            // leftmost segment the newcomer undercuts
            let hit = loop {
                if i == segments.len() {
                    return;
                }
                if let Some(hit) = segments[i].begin(&ppf) {
                    break hit;
                }
                i += 1;
            };

            if !hit.at_start {
                // the occupant keeps its head up to the crossing
                let mut head = segments[i];
                head.b = hit.left;
                head.pfb = head.pf(hit.left);
                segments.insert(i, head);
                i += 1;
            }

            let mut new = ppf;
            new.a = hit.left;
            new.pfa = new.pf(hit.left);

            if !hit.at_end {
                // the newcomer's reign ends inside the occupant, which
                // keeps its tail beyond the crossing
                let mut tail = segments[i];
                tail.a = hit.right;
                tail.pfa = tail.pf(hit.right);

                new.b = hit.right;
                new.pfb = new.pf(hit.right);
                segments[i] = new;
                segments.insert(i + 1, tail);

                i += 2;
                continue 'splice;
            }

            // the newcomer reaches past the occupant: swallow following
            // segments until one of them cuts it short
            let mut right = hit.right;
            let j = i + 1;

            loop {
                if j == segments.len() {
                    new.b = right;
                    new.pfb = new.pf(right);
                    segments[i] = new;
                    return;
                }

                match segments[j].end(&ppf) {
                    EndScan::Absorbed { right: r } => {
                        right = r;
                        segments.remove(j);
                    }
                    EndScan::Cut { right: r, at_start } => {
                        new.b = r;
                        new.pfb = new.pf(r);
                        segments[i] = new;

                        if !at_start {
                            segments[j].a = r;
                            segments[j].pfa = segments[j].pf(r);
                        }

                        i = j;
                        continue 'splice;
                    }
                }
            }
        }
    }

    #[cfg(test)]
    pub fn segments(&self) -> &[PartialPf] {
        &self.segments
    }

    /// Number of segments over the full domain `[0, area]`: twice the
    /// stored count, minus one when the middle segment is constant and
    /// mirrors onto itself.
    pub fn num_segments(&self) -> usize {
        let count = self.segments.len();
        match self.segments.last() {
            Some(seg) if seg.form == Form::Constant => 2 * count - 1,
            _ => 2 * count,
        }
    }

    /// The maximum of the perimeter function, attained at `area/2`.
    pub fn maximum(&self) -> f64 {
        self.segments.last().map_or(0.0, |seg| seg.pfb)
    }

    /// Evaluates the envelope; `z` must lie in `[0, area]`.
    pub fn eval(&self, z: f64) -> f64 {
        let z = if z > self.half_area { self.area - z } else { z };

        for seg in &self.segments {
            if z <= seg.b {
                return seg.pf(z);
            }
        }

        unreachable!("mirrored z lies within the last segment")
    }

    /// Inverts the envelope; `p` must lie in `[0, maximum()]`.
    pub fn inverse(&self, p: f64) -> f64 {
        for seg in &self.segments {
            if seg.pfb >= p {
                return seg.ipf(p);
            }
        }

        unreachable!("p is at most the envelope maximum")
    }

    /// Left boundary of segment `index` over the full domain,
    /// `0 <= index <= num_segments()`; `boundary(num_segments())` is
    /// the polygon area.
    pub fn boundary(&self, index: usize) -> f64 {
        let num = self.num_segments();
        let max_index = (num - 1) >> 1;

        if index <= max_index {
            self.segments[index].a
        } else if index == max_index + 1 && num % 2 == 0 {
            self.half_area
        } else {
            self.area - self.segments[num - index].a
        }
    }

    /// Arc parameter of segment `index` (1-based) over the full
    /// domain. Mirrored segments see the arc shrink as `z` grows, so
    /// their parameter is negated.
    pub fn theta(&self, index: usize) -> f64 {
        let index = index - 1;
        let num = self.num_segments();
        let max_index = (num - 1) >> 1;

        if index <= max_index {
            self.segments[index].theta
        } else {
            -self.segments[num - index - 1].theta
        }
    }

    /// Shift parameter of segment `index` (1-based) over the full
    /// domain.
    pub fn zeta(&self, index: usize) -> f64 {
        let index = index - 1;
        let num = self.num_segments();
        let max_index = (num - 1) >> 1;

        if index <= max_index {
            self.segments[index].zeta
        } else {
            -self.area - self.segments[num - index - 1].zeta
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;
    use std::f64::consts::PI;

    fn arc(a: f64, b: f64, theta: f64, zeta: f64) -> PartialPf {
        let mut ppf = PartialPf {
            form: Form::Sqrt,
            a,
            b,
            theta,
            zeta,
            pfa: 0.0,
            pfb: 0.0,
        };
        ppf.pfa = ppf.pf(a);
        ppf.pfb = ppf.pf(b);
        ppf
    }

    #[test]
    fn sentinel_only() {
        // Degenerate polygons keep the sentinel; everything is zero.
        let pw = Piecewise::new(0.0);
        assert_eq!(pw.num_segments(), 1);
        assert_relative_eq!(pw.maximum(), 0.0);
        assert_relative_eq!(pw.eval(0.0), 0.0);
    }

    #[test]
    fn full_cover_replaces_the_sentinel() {
        let mut pw = Piecewise::new(1.0);
        pw.insert(arc(0.0, 0.5, FRAC_PI_2, 0.0));

        assert_eq!(pw.segments().len(), 1);
        assert_eq!(pw.num_segments(), 2);
        assert_relative_eq!(pw.maximum(), (PI * 0.5).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(pw.eval(0.25), (PI * 0.25).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn constant_takes_over_past_the_crossing() {
        // The unit-square envelope: arc up to 1/pi, then a flat chord.
        let mut pw = Piecewise::new(1.0);
        pw.insert(arc(0.0, 0.5, FRAC_PI_2, 0.0));
        pw.insert(PartialPf::constant(0.0, 0.5, 1.0));

        assert_eq!(pw.segments().len(), 2);
        assert_eq!(pw.num_segments(), 3);
        assert_relative_eq!(pw.maximum(), 1.0);
        assert_relative_eq!(pw.boundary(1), 1.0 / PI, epsilon = 1e-12);
        assert_relative_eq!(pw.eval(0.2), (PI * 0.2).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(pw.eval(0.4), 1.0);
    }

    #[test]
    fn eval_mirrors_the_upper_half() {
        let mut pw = Piecewise::new(1.0);
        pw.insert(arc(0.0, 0.5, FRAC_PI_2, 0.0));

        assert_relative_eq!(pw.eval(0.9), pw.eval(0.1), epsilon = 1e-12);
        assert_relative_eq!(pw.eval(1.0), 0.0);
    }

    #[test]
    fn inverse_round_trips() {
        let mut pw = Piecewise::new(1.0);
        pw.insert(arc(0.0, 0.5, FRAC_PI_2, 0.0));
        pw.insert(PartialPf::constant(0.0, 0.5, 1.0));

        for &z in &[0.0, 0.1, 0.25] {
            assert_relative_eq!(pw.inverse(pw.eval(z)), z, epsilon = 1e-12);
        }
        // On the flat stretch the inverse picks the leftmost point.
        assert_relative_eq!(pw.inverse(1.0), 1.0 / PI, epsilon = 1e-12);
    }

    #[test]
    fn interior_window_splits_a_segment() {
        // A steep arc starting at z = 0.1: sqrt(8*(z - 0.1)) is zero
        // there, dips below sqrt(pi*z) until the curves cross again at
        // z = 0.8/(8 - pi), and loses from then on. It wins a window
        // strictly inside the first segment, splitting it in three.
        let mut pw = Piecewise::new(1.0);
        pw.insert(arc(0.0, 0.5, FRAC_PI_2, 0.0));
        pw.insert(arc(0.1, 0.5, 4.0, -0.1));

        let thetas: Vec<f64> = pw.segments().iter().map(|s| s.theta).collect();
        assert_eq!(thetas, vec![FRAC_PI_2, 4.0, FRAC_PI_2]);
        assert_relative_eq!(pw.segments()[1].a, 0.1);
        assert_relative_eq!(pw.segments()[1].b, 0.8 / (8.0 - PI), epsilon = 1e-12);
        assert_relative_eq!(pw.maximum(), (PI * 0.5).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn dominated_segment_is_absorbed() {
        // The unit-square envelope, then a cheap arc over the whole
        // domain swallows both segments.
        let mut pw = Piecewise::new(1.0);
        pw.insert(arc(0.0, 0.5, FRAC_PI_2, 0.0));
        pw.insert(PartialPf::constant(0.0, 0.5, 1.0));
        pw.insert(arc(0.0, 0.5, 0.5, 0.0));

        // sqrt(z) is below all previous segments everywhere on (0, 0.5]
        assert_eq!(pw.segments().len(), 1);
        assert_relative_eq!(pw.eval(0.25), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn boundary_theta_zeta_mirror() {
        let mut pw = Piecewise::new(1.0);
        pw.insert(arc(0.0, 0.5, FRAC_PI_2, 0.0));
        pw.insert(PartialPf::constant(0.0, 0.5, 1.0));

        let num = pw.num_segments();
        assert_eq!(num, 3);

        assert_relative_eq!(pw.boundary(0), 0.0);
        assert_relative_eq!(pw.boundary(2), 1.0 - 1.0 / PI, epsilon = 1e-12);
        assert_relative_eq!(pw.boundary(3), 1.0);

        assert_relative_eq!(pw.theta(1), FRAC_PI_2);
        assert_relative_eq!(pw.theta(2), 0.0);
        assert_relative_eq!(pw.theta(3), -FRAC_PI_2);

        assert_relative_eq!(pw.zeta(1), 0.0);
        assert_relative_eq!(pw.zeta(3), -1.0, epsilon = 1e-12);

        // boundaries are symmetric about the half area
        for index in 0..=num {
            assert_relative_eq!(
                pw.boundary(index) + pw.boundary(num - index),
                1.0,
                epsilon = 1e-12
            );
        }
    }
}
