//! Perimeter functions of a disk, inner and outer.
//!
//! All four functions solve the system
//!
//! ```text
//! (1) p/a   = +/- (pi - 2*beta) * tan(beta),
//! (2) z/a^2 = beta - tan(beta) + (pi/2 - beta) * tan^2(beta),
//! ```
//!
//! by bisection on `beta`: the optimal curve is a circular arc meeting
//! the boundary circle at right angles, and `beta` parameterizes where
//! it meets. The forward functions know `z` and seek `p`, the inverse
//! functions the other way around. Near `beta = pi/2` the substitution
//! `beta = alpha - pi/2` keeps the arithmetic stable.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::error::{in_range, not_nan};
use crate::math::bisect::{bisect, Probe};
use crate::Result;

/// Evaluates `beta - tan(beta) + (pi/2 - beta) * tan^2(beta)`.
///
/// The closed form loses all significant digits near `beta = 0`, so
/// the numerator is expanded as a series over `cos^2(beta)`.
fn area_series(beta: f64) -> f64 {
    let mut b = [0.0; 22];
    b[1] = beta;
    for ind in 2..22 {
        b[ind] = b[ind - 1] * beta;
    }

    let num = b[2] * PI / 2.0 - b[3] * 4.0 / 3.0 - b[4] * PI / 6.0 + b[5] * 8.0 / 15.0
        + b[6] * PI / 45.0
        - b[7] * 8.0 / 105.0
        - b[8] * PI / 630.0
        + b[9] * 16.0 / 2835.0
        + b[10] * PI / 14175.0
        - b[11] * 8.0 / 31185.0
        - b[12] * PI / 467_775.0
        + b[13] * 16.0 / 2_027_025.0
        + b[14] * PI * 2.0 / 42_567_525.0
        - b[15] * 16.0 / 91_216_125.0
        - b[16] * PI / 1_277_025_750.0
        + b[17] * 32.0 / 10_854_718_875.0
        + b[18] * PI / 97_692_469_875.0
        - b[19] * 8.0 / 206_239_658_625.0
        - b[20] * PI / 9_280_784_638_125.0
        + b[21] * 16.0 / 38_979_295_480_125.0;

    let c = beta.cos();
    num / (c * c)
}

/// Shortest curve dividing a disk of radius `a` into areas `z` and
/// `pi*a^2 - z`.
///
/// # Errors
///
/// NaN arguments, `z` outside `[0, pi*a^2]`, or negative `a`.
pub fn pf_circle(z: f64, a: f64) -> Result<f64> {
    not_nan(z, "pf_circle", "z")?;
    not_nan(a, "pf_circle", "a")?;
    in_range(
        0.0 <= z && z <= PI * a * a && z < f64::INFINITY,
        z,
        "pf_circle",
        "z",
    )?;
    in_range(0.0 <= a, a, "pf_circle", "a")?;

    if a == 0.0 {
        return Ok(0.0);
    }

    let z_norm = z / a / a;

    if z_norm == 0.0 {
        // Underflow, or z = 0: tiny areas see a half plane.
        return Ok((2.0 * PI).sqrt() * z.sqrt());
    }

    // The function is symmetric about the half-disk area.
    let z = if z_norm > FRAC_PI_2 { PI - z_norm } else { z_norm };

    if z == 0.0 {
        return Ok(0.0);
    }

    let result = if z < FRAC_PI_2 - 1.0 {
        let beta = bisect(0.0, FRAC_PI_2, |beta| {
            if area_series(beta) > z {
                Probe::High
            } else {
                Probe::Low
            }
        });

        (PI - 2.0 * beta) * beta.sin() / beta.cos()
    } else {
        let beta = bisect(0.0, FRAC_PI_2, |beta| {
            if beta == FRAC_PI_2 {
                return Probe::Halt(beta);
            }
            let t = beta.sin() / beta.cos();
            if beta - t + t * (FRAC_PI_2 - beta) * t > z {
                Probe::High
            } else {
                Probe::Low
            }
        });

        // sin keeps more digits than cos this close to pi/2.
        let c = (FRAC_PI_2 - beta).sin();
        if c == 0.0 {
            2.0
        } else {
            (PI - 2.0 * beta) * beta.sin() / c
        }
    };

    Ok(a * result)
}

/// Largest area a curve of length `p` cuts off a disk of radius `a`.
///
/// # Errors
///
/// NaN arguments, `p` outside `[0, 2*a]`, or negative `a`.
pub fn ipf_circle(p: f64, a: f64) -> Result<f64> {
    not_nan(p, "ipf_circle", "p")?;
    not_nan(a, "ipf_circle", "a")?;
    in_range(
        0.0 <= p && p <= 2.0 * a && p < f64::INFINITY,
        p,
        "ipf_circle",
        "p",
    )?;
    in_range(0.0 <= a, a, "ipf_circle", "a")?;

    if a == 0.0 {
        return Ok(0.0);
    }

    let p_norm = p / a;

    if p_norm == 0.0 {
        return Ok((p / (2.0 * PI)) * p);
    }

    let p = p_norm;

    let beta = bisect(0.0, FRAC_PI_2, |beta| {
        if beta == FRAC_PI_2 {
            return Probe::Halt(beta);
        }
        if (PI - 2.0 * beta) * beta.sin() / beta.cos() > p {
            Probe::High
        } else {
            Probe::Low
        }
    });

    let result = if beta < FRAC_PI_4 {
        area_series(beta)
    } else if beta == FRAC_PI_2 {
        FRAC_PI_2
    } else {
        let t = beta.sin() / beta.cos();
        beta - t + t * (FRAC_PI_2 - beta) * t
    };

    Ok(a * result * a)
}

/// Shortest curve that, together with the boundary of a disk of radius
/// `a`, encloses an outside area `z`.
///
/// # Errors
///
/// NaN arguments, negative `z` or `a`, or both arguments infinite.
pub fn opf_circle(z: f64, a: f64) -> Result<f64> {
    not_nan(z, "opf_circle", "z")?;
    not_nan(a, "opf_circle", "a")?;
    in_range(
        z < f64::INFINITY || a < f64::INFINITY,
        z,
        "opf_circle",
        "z",
    )?;
    in_range(0.0 <= z, z, "opf_circle", "z")?;
    in_range(0.0 <= a, a, "opf_circle", "a")?;

    if z == f64::INFINITY {
        return Ok(f64::INFINITY);
    }

    if a == 0.0 {
        return Ok(2.0 * PI.sqrt() * z.sqrt());
    }

    let z_norm = z / a / a;

    if z_norm == 0.0 {
        // Relative to the disk the curve sees a half plane.
        return Ok((2.0 * PI).sqrt() * z.sqrt());
    }

    if z_norm == f64::INFINITY {
        // The disk shrinks to a point that the curve must avoid.
        return Ok(2.0 * (PI.sqrt() * z.sqrt() - a));
    }

    let z = z_norm;

    let result = if z < FRAC_PI_2 - 1.0 {
        // Negative beta parameterizes arcs bulging away from the disk.
        let beta = bisect(-FRAC_PI_2, 0.0, |beta| {
            if area_series(beta) < z {
                Probe::High
            } else {
                Probe::Low
            }
        });

        (2.0 * beta - PI) * beta.sin() / beta.cos()
    } else {
        let alpha = bisect(0.0, FRAC_PI_2, |alpha| {
            let t = alpha.sin() / alpha.cos();
            if t * t == 0.0 {
                return Probe::Halt(0.0);
            }
            if -FRAC_PI_2 + alpha + 1.0 / t + (PI - alpha) / (t * t) < z {
                Probe::High
            } else {
                Probe::Low
            }
        });

        2.0 * (PI - alpha) * alpha.cos() / alpha.sin()
    };

    Ok(a * result)
}

/// Largest outside area a curve of length `p` encloses against a disk
/// of radius `a`.
///
/// # Errors
///
/// NaN arguments, negative `p` or `a`, or both arguments infinite.
pub fn iopf_circle(p: f64, a: f64) -> Result<f64> {
    not_nan(p, "iopf_circle", "p")?;
    not_nan(a, "iopf_circle", "a")?;
    in_range(
        p < f64::INFINITY || a < f64::INFINITY,
        p,
        "iopf_circle",
        "p",
    )?;
    in_range(0.0 <= p, p, "iopf_circle", "p")?;
    in_range(0.0 <= a, a, "iopf_circle", "a")?;

    if p == f64::INFINITY {
        return Ok(f64::INFINITY);
    }

    if a == 0.0 {
        return Ok((p / (4.0 * PI)) * p);
    }

    let p_norm = p / a;

    if p_norm == 0.0 {
        return Ok((p / (2.0 * PI)) * p);
    }

    if p_norm == f64::INFINITY {
        let tmp = p / 2.0 + a;
        return Ok(tmp * (1.0 / PI) * tmp);
    }

    let p = p_norm;

    let result = if p < FRAC_PI_2 {
        let beta = bisect(-FRAC_PI_2, 0.0, |beta| {
            if (2.0 * beta - PI) * beta.sin() / beta.cos() < p {
                Probe::High
            } else {
                Probe::Low
            }
        });

        area_series(beta)
    } else {
        let alpha = bisect(0.0, FRAC_PI_2, |alpha| {
            let t = alpha.sin() / alpha.cos();
            if t == 0.0 {
                return Probe::Halt(0.0);
            }
            if 2.0 * (PI - alpha) / t < p {
                Probe::High
            } else {
                Probe::Low
            }
        });

        let t = alpha.sin() / alpha.cos();
        -FRAC_PI_2 + alpha + 1.0 / t + (PI - alpha) / (t * t)
    };

    Ok(a * result * a)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn half_disk_is_cut_by_the_diameter() {
        let a = 3.0;
        assert_relative_eq!(
            pf_circle(FRAC_PI_2 * a * a, a).unwrap(),
            2.0 * a,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            ipf_circle(2.0 * a, a).unwrap(),
            FRAC_PI_2 * a * a,
            epsilon = 1e-10
        );
    }

    #[test]
    fn empty_and_full_cuts_cost_nothing() {
        assert_eq!(pf_circle(0.0, 1.0).unwrap(), 0.0);
        assert_eq!(pf_circle(PI, 1.0).unwrap(), 0.0);
        // a zero-radius disk only admits the empty cut
        assert_eq!(pf_circle(0.0, 0.0).unwrap(), 0.0);
        assert!(pf_circle(1.0, 0.0).is_err());
    }

    #[test]
    fn symmetric_about_the_half_disk() {
        let a = 1.0;
        for &z in &[0.1, 0.5, 1.2] {
            assert_relative_eq!(
                pf_circle(z, a).unwrap(),
                pf_circle(PI * a * a - z, a).unwrap(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn inner_round_trip_both_regimes() {
        // z = 0.1 uses the apex series, z = 1.2 the pi/2 substitution.
        for &z in &[0.1, 0.5, 1.2, 1.5] {
            let p = pf_circle(z, 1.0).unwrap();
            assert_relative_eq!(ipf_circle(p, 1.0).unwrap(), z, epsilon = 1e-8);
        }
    }

    #[test]
    fn tiny_cuts_match_the_half_plane() {
        // pf_circle ~ sqrt(2*pi*z) as z -> 0.
        let z = 1.0e-14;
        assert_relative_eq!(
            pf_circle(z, 1.0).unwrap(),
            (2.0 * PI * z).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn outer_round_trip_both_regimes() {
        for &z in &[0.2, 0.5, 3.0, 40.0] {
            let p = opf_circle(z, 1.0).unwrap();
            assert_relative_eq!(iopf_circle(p, 1.0).unwrap(), z, epsilon = 1e-8);
        }
    }

    #[test]
    fn outer_degenerate_disks() {
        let z = 2.0;
        assert_relative_eq!(opf_circle(z, 0.0).unwrap(), 2.0 * (PI * z).sqrt());
        assert_eq!(opf_circle(f64::INFINITY, 1.0).unwrap(), f64::INFINITY);
        assert_eq!(iopf_circle(f64::INFINITY, 1.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn outer_exceeds_inner_for_equal_area() {
        // Enclosing area outside the disk costs more than cutting the
        // same area off inside.
        let z = 1.0;
        assert!(opf_circle(z, 1.0).unwrap() > pf_circle(z, 1.0).unwrap());
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(pf_circle(-1.0, 1.0).is_err());
        assert!(pf_circle(4.0, 1.0).is_err());
        assert!(ipf_circle(2.1, 1.0).is_err());
        assert!(opf_circle(f64::INFINITY, f64::INFINITY).is_err());
        assert!(iopf_circle(-1.0, 1.0).is_err());
        assert!(pf_circle(f64::NAN, 1.0).is_err());
    }
}
