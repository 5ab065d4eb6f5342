//! Perimeter functions of an `a` by `b` rectangle, inner and outer.

use std::f64::consts::PI;

use crate::error::{in_range, not_nan};
use crate::math::bisect::{bisect, Probe};
use crate::Result;

/// Shortest curve dividing an `a` by `b` rectangle into areas `z` and
/// `a*b - z`.
///
/// Small areas are cut off by a quarter circle at a corner; once the
/// quarter circle would exceed the shorter side, a straight cut across
/// the rectangle takes over.
///
/// # Errors
///
/// NaN arguments, negative or infinite `a` or `b`, or `z` outside
/// `[0, a*b]`.
pub fn pf_rectangle(z: f64, a: f64, b: f64) -> Result<f64> {
    not_nan(z, "pf_rectangle", "z")?;
    not_nan(a, "pf_rectangle", "a")?;
    not_nan(b, "pf_rectangle", "b")?;
    in_range(0.0 <= a && a < f64::INFINITY, a, "pf_rectangle", "a")?;
    in_range(0.0 <= b && b < f64::INFINITY, b, "pf_rectangle", "b")?;
    in_range(
        0.0 <= z && z <= a * b && z < f64::INFINITY,
        z,
        "pf_rectangle",
        "z",
    )?;

    let (a, b) = if a > b { (b, a) } else { (a, b) };

    let half = (a / 2.0) * b;
    let z = if z > half { half - (z - half) } else { z };

    if z < (a / PI) * a {
        Ok(PI.sqrt() * z.sqrt())
    } else {
        Ok(a)
    }
}

/// Largest area a curve of length `p` cuts off an `a` by `b`
/// rectangle.
///
/// # Errors
///
/// NaN arguments, negative or infinite `a` or `b`, or `p` outside
/// `[0, min(a, b)]`.
pub fn ipf_rectangle(p: f64, a: f64, b: f64) -> Result<f64> {
    not_nan(p, "ipf_rectangle", "p")?;
    not_nan(a, "ipf_rectangle", "a")?;
    not_nan(b, "ipf_rectangle", "b")?;
    in_range(0.0 <= a && a < f64::INFINITY, a, "ipf_rectangle", "a")?;
    in_range(0.0 <= b && b < f64::INFINITY, b, "ipf_rectangle", "b")?;

    let a = a.min(b);
    in_range(0.0 <= p && p <= a, p, "ipf_rectangle", "p")?;

    Ok((p / PI) * p)
}

// The outer functions solve, by bisection on beta,
//
// (1) 2*z = r^2*(2*pi - beta + sin(beta))           [- a*b/2 for the
//                                                      diagonal case]
// (2) chord = 2*r*sin(beta/2),
// (3) p = (2*pi - beta)*r,
//
// where the chord is either the shorter side b or the diagonal: the
// optimal curve is a circular arc pinned to two rectangle corners, and
// which pair of corners wins depends on z.

/// Shortest curve that, together with the boundary of an `a` by `b`
/// rectangle, encloses an outside area `z`.
///
/// # Errors
///
/// NaN arguments, negative or infinite `a` or `b`, or negative `z`.
pub fn opf_rectangle(z: f64, a: f64, b: f64) -> Result<f64> {
    not_nan(z, "opf_rectangle", "z")?;
    not_nan(a, "opf_rectangle", "a")?;
    not_nan(b, "opf_rectangle", "b")?;
    in_range(0.0 <= a && a < f64::INFINITY, a, "opf_rectangle", "a")?;
    in_range(0.0 <= b && b < f64::INFINITY, b, "opf_rectangle", "b")?;
    in_range(0.0 <= z, z, "opf_rectangle", "z")?;

    if z == f64::INFINITY {
        return Ok(f64::INFINITY);
    }

    let (a, b) = if a > b { (b, a) } else { (a, b) };

    if b == 0.0 {
        // Degenerate rectangle: the plane formula.
        return Ok(2.0 * PI.sqrt() * z.sqrt());
    }

    if z <= PI * (b / 8.0) * b {
        // A half disk against the longer side.
        return Ok((2.0 * PI).sqrt() * z.sqrt());
    }

    // Arc pinned to the endpoints of a longer side.
    let mut r = 0.0;
    let beta = bisect(0.0, PI, |beta| {
        r = b / (2.0 * (beta / 2.0).sin());
        if r * (2.0 * PI - beta + beta.sin()) * (r / 2.0) < z {
            Probe::High
        } else {
            Probe::Low
        }
    });
    let result_1 = (2.0 * PI - beta) * r;

    // Arc pinned to opposite corners, swallowing half the rectangle.
    let diag = a.hypot(b);
    let mut r = 0.0;
    let beta = bisect(0.0, PI, |beta| {
        r = diag / (2.0 * (beta / 2.0).sin());
        if r * (2.0 * PI - beta + beta.sin()) * (r / 2.0) - (a / 2.0) * b < z {
            Probe::High
        } else {
            Probe::Low
        }
    });
    let result_2 = (2.0 * PI - beta) * r;

    Ok(result_1.min(result_2))
}

/// Largest outside area a curve of length `p` encloses against an `a`
/// by `b` rectangle.
///
/// # Errors
///
/// NaN arguments, negative or infinite `a` or `b`, or negative `p`.
pub fn iopf_rectangle(p: f64, a: f64, b: f64) -> Result<f64> {
    not_nan(p, "iopf_rectangle", "p")?;
    not_nan(a, "iopf_rectangle", "a")?;
    not_nan(b, "iopf_rectangle", "b")?;
    in_range(0.0 <= a && a < f64::INFINITY, a, "iopf_rectangle", "a")?;
    in_range(0.0 <= b && b < f64::INFINITY, b, "iopf_rectangle", "b")?;
    in_range(0.0 <= p, p, "iopf_rectangle", "p")?;

    if p == f64::INFINITY {
        return Ok(f64::INFINITY);
    }

    let (a, b) = if a > b { (b, a) } else { (a, b) };

    if b == 0.0 {
        return Ok((p / (4.0 * PI)) * p);
    }

    if p <= PI * b / 2.0 {
        return Ok((p / (2.0 * PI)) * p);
    }

    let mut r = 0.0;
    let beta = bisect(0.0, PI, |beta| {
        r = b / (2.0 * (beta / 2.0).sin());
        if (2.0 * PI - beta) * r < p {
            Probe::High
        } else {
            Probe::Low
        }
    });
    let result_1 = r * (2.0 * PI - beta + beta.sin()) * (r / 2.0);

    let diag = a.hypot(b);

    if p <= PI * (diag / 2.0) {
        // Too short to reach around the far corners.
        return Ok(result_1);
    }

    let mut r = 0.0;
    let beta = bisect(0.0, PI, |beta| {
        r = diag / (2.0 * (beta / 2.0).sin());
        if (2.0 * PI - beta) * r < p {
            Probe::High
        } else {
            Probe::Low
        }
    });
    let result_2 = r * (2.0 * PI - beta + beta.sin()) * (r / 2.0) - (a / 2.0) * b;

    Ok(result_1.max(result_2))
}
