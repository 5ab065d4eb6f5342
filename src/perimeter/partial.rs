//! Partial perimeter functions.
//!
//! A partial perimeter function is the perimeter function restricted
//! to curves with endpoints on one particular pair of polygon sides.
//! It is either constant (the sides are parallel, the curve slides
//! between them) or the square root `sqrt(2*theta*(z + zeta))` (the
//! curve is an arc about the apex where the side lines meet). The
//! full perimeter function is the lower envelope of all partial ones.

use crate::math::{equal, trim};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Form {
    Constant,
    Sqrt,
}

/// One partial perimeter function over the domain `[a, b]`.
///
/// `pfa` and `pfb` cache the values at the domain endpoints; `theta`
/// and `zeta` are the arc parameters (zero and the constant value,
/// respectively, for the constant form).
#[derive(Debug, Clone, Copy)]
pub(crate) struct PartialPf {
    pub form: Form,
    pub a: f64,
    pub b: f64,
    pub theta: f64,
    pub zeta: f64,
    pub pfa: f64,
    pub pfb: f64,
}

/// Where a challenger function undercuts an envelope segment.
///
/// `at_start`/`at_end` report whether `left`/`right` coincide with the
/// segment's own domain endpoints.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BeginHit {
    pub left: f64,
    pub right: f64,
    pub at_start: bool,
    pub at_end: bool,
}

/// How a challenger's right boundary relates to an envelope segment.
#[derive(Debug, Clone, Copy)]
pub(crate) enum EndScan {
    /// The segment survives from `right` on; `at_start` reports
    /// whether `right` is the segment's own left endpoint.
    Cut { right: f64, at_start: bool },
    /// The challenger stays below throughout: the segment is gone, and
    /// the challenger extends at least to `right`.
    Absorbed { right: f64 },
}

impl PartialPf {
    /// A constant segment over `[a, b]` with value `value`.
    pub fn constant(a: f64, b: f64, value: f64) -> Self {
        Self {
            form: Form::Constant,
            a,
            b,
            theta: 0.0,
            zeta: value,
            pfa: value,
            pfb: value,
        }
    }

    /// Value at `z`; meaningful only for `z` in `[a, b]`.
    pub fn pf(&self, z: f64) -> f64 {
        match self.form {
            Form::Constant => self.pfa,
            Form::Sqrt => (2.0 * self.theta * (z + self.zeta)).sqrt(),
        }
    }

    /// Largest `z` with value at most `p`; for the constant form every
    /// domain point qualifies and the left endpoint is returned.
    pub fn ipf(&self, p: f64) -> f64 {
        match self.form {
            Form::Constant => self.a,
            Form::Sqrt => (p / 2.0) * (p / self.theta) - self.zeta,
        }
    }

    /// Tests whether `ppf` dips below `self` anywhere on the common
    /// domain, and if so returns the sub-segment `[left, right]` where
    /// `ppf` is the lower of the two.
    ///
    /// Functions with equal `theta` never cross transversally and are
    /// rejected outright; the tolerance comparison keeps duplicate
    /// pairs from splitting segments at spurious points.
    pub fn begin(&self, ppf: &Self) -> Option<BeginHit> {
        if self.b <= ppf.a || self.a >= ppf.b {
            return None;
        }

        if equal(self.theta - ppf.theta, 0.0) {
            return None;
        }

        let possibly_left = self.a >= ppf.a;
        let possibly_right = self.b <= ppf.b;

        let com_a = self.a.max(ppf.a);
        let com_b = self.b.min(ppf.b);

        let delta_a = trim(self.pf(com_a) - ppf.pf(com_a));
        let delta_b = trim(self.pf(com_b) - ppf.pf(com_b));

        if delta_a < 0.0 {
            if delta_b <= 0.0 {
                return None;
            }

            let left = self.crossing(ppf);
            let right = com_b;

            if left == right {
                return None;
            }

            Some(BeginHit {
                left,
                right,
                at_start: false,
                at_end: possibly_right,
            })
        } else if delta_a == 0.0 {
            if delta_b <= 0.0 {
                return None;
            }

            Some(BeginHit {
                left: com_a,
                right: com_b,
                at_start: possibly_left,
                at_end: possibly_right,
            })
        } else if delta_b < 0.0 {
            let left = com_a;
            let right = self.crossing(ppf);

            if left == right {
                return None;
            }

            Some(BeginHit {
                left,
                right,
                at_start: possibly_left,
                at_end: false,
            })
        } else {
            Some(BeginHit {
                left: com_a,
                right: com_b,
                at_start: possibly_left,
                at_end: possibly_right,
            })
        }
    }

    /// Having established that `ppf` undercuts the envelope up to this
    /// segment, decides where `ppf`'s reign ends within it.
    pub fn end(&self, ppf: &Self) -> EndScan {
        if self.a >= ppf.b {
            return EndScan::Cut {
                right: ppf.b,
                at_start: false,
            };
        }

        if self.b > ppf.b && self.pf(ppf.b) >= ppf.pfb {
            return EndScan::Cut {
                right: ppf.b,
                at_start: false,
            };
        }

        let possibly_left = self.a >= ppf.a;

        let com_a = self.a.max(ppf.a);
        let com_b = self.b.min(ppf.b);

        let pf_com_a = self.pf(com_a);
        let pf_com_b = self.pf(com_b);
        let ppf_com_a = ppf.pf(com_a);
        let ppf_com_b = ppf.pf(com_b);

        if pf_com_a > ppf_com_a {
            if pf_com_b >= ppf_com_b {
                EndScan::Absorbed { right: com_b }
            } else {
                EndScan::Cut {
                    right: self.crossing(ppf),
                    at_start: false,
                }
            }
        } else if pf_com_a == ppf_com_a {
            if pf_com_b >= ppf_com_b {
                EndScan::Absorbed { right: com_b }
            } else {
                EndScan::Cut {
                    right: com_a,
                    at_start: possibly_left,
                }
            }
        } else {
            EndScan::Cut {
                right: com_a,
                at_start: possibly_left,
            }
        }
    }

    /// The abscissa where `self` and `ppf` take equal values.
    pub fn crossing(&self, ppf: &Self) -> f64 {
        match (self.form, ppf.form) {
            (Form::Constant, Form::Sqrt) => (self.pfa / 2.0) * (self.pfa / ppf.theta) - ppf.zeta,
            (Form::Sqrt, Form::Constant) => (ppf.pfa / 2.0) * (ppf.pfa / self.theta) - self.zeta,
            (Form::Sqrt, Form::Sqrt) => {
                if self.theta == ppf.theta {
                    self.a.max(ppf.a)
                } else {
                    (ppf.theta * ppf.zeta - self.theta * self.zeta) / (self.theta - ppf.theta)
                }
            }
            // two constants never cross transversally; begin() has
            // already rejected the pair by then
            (Form::Constant, Form::Constant) => self.a.max(ppf.a),
        }
    }
}
