//! Perimeter function of a solid ball.
//!
//! The minimal surface dividing a ball is a spherical cap of a second
//! sphere crossing the boundary at right angles; `beta` parameterizes
//! the crossing latitude and the enclosed volume and cap area are both
//! closed forms in `beta`.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{in_range, not_nan};
use crate::math::bisect::{bisect, Probe};
use crate::Result;

/// Evaluates `1 - cos(beta)` by series, dodging the cancellation near
/// `beta = 0`.
fn one_minus_cos(beta: f64) -> f64 {
    let mut b = [beta * beta; 10];
    for ind in 1..10 {
        b[ind] = b[ind - 1] * b[0];
    }

    b[0] / 2.0 - b[1] / 24.0 + b[2] / 720.0 - b[3] / 40320.0 + b[4] / 3_628_800.0
        - b[5] / 479_001_600.0
        + b[6] / 87_178_291_200.0
        - b[7] / 20_922_789_888_000.0
        + b[8] / 6_402_373_705_728_000.0
        - b[9] / 2_432_902_008_176_640_000.0
}

/// Smallest surface dividing a ball of radius `a` into volumes `z` and
/// `4*pi*a^3/3 - z`.
///
/// # Errors
///
/// NaN arguments, `z` outside `[0, 4*pi*a^3/3]`, or negative `a`.
pub fn pf_sphere_3d(z: f64, a: f64) -> Result<f64> {
    not_nan(z, "pf_sphere_3d", "z")?;
    not_nan(a, "pf_sphere_3d", "a")?;
    in_range(
        0.0 <= z && z <= (4.0 * PI / 3.0) * a * a * a && z < f64::INFINITY,
        z,
        "pf_sphere_3d",
        "z",
    )?;
    in_range(0.0 <= a, a, "pf_sphere_3d", "a")?;

    if a == 0.0 {
        return Ok(0.0);
    }

    let z_norm = z / a / a / a;

    if z_norm == 0.0 {
        // Tiny volumes see a half space.
        return Ok((3.0 * (2.0 * PI).sqrt() * z).powf(2.0 / 3.0));
    }

    // Symmetric about the half ball.
    let z = if z_norm > 2.0 * PI / 3.0 {
        4.0 * PI / 3.0 - z_norm
    } else {
        z_norm
    };

    if z == 0.0 {
        return Ok(0.0);
    }

    let result = if z < FRAC_PI_2 - 1.0 {
        let beta = bisect(0.0, FRAC_PI_2, |beta| {
            let s = beta.sin();

            let mut z_beta = if s == 0.0 {
                2.0
            } else {
                let tmp = one_minus_cos(beta);
                let c = 1.0 - tmp;
                let ct = c / s;

                (1.0 - s) * (1.0 - s) * (2.0 + s) + tmp * tmp * (2.0 + c) * ct * ct * ct
            };
            z_beta *= PI / 3.0;

            if z_beta < z {
                Probe::High
            } else {
                Probe::Low
            }
        });

        let s = beta.sin();
        let cap = if s == 0.0 {
            1.0
        } else {
            let ct = beta.cos() / s;
            one_minus_cos(beta) * ct * ct
        };

        2.0 * PI * cap
    } else {
        let beta = bisect(0.0, FRAC_PI_2, |beta| {
            let s = beta.sin();
            let tmp = one_minus_cos(beta);
            let c = 1.0 - tmp;
            let t = s / c;

            let z_beta = PI
                * (tmp * tmp * (2.0 + c) + (1.0 - s) * (1.0 - s) * (2.0 + s) * t * t * t)
                / 3.0;

            if z_beta > z {
                Probe::High
            } else {
                Probe::Low
            }
        });

        let t = beta.tan();
        2.0 * PI * (1.0 - beta.sin()) * t * t
    };

    Ok(a * result * a)
}
