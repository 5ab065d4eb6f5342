//! Perimeter functions of the surface of a sphere.

use std::f64::consts::PI;

use crate::error::{in_range, not_nan};
use crate::Result;

/// Shortest curve dividing the surface of a sphere of radius `a` so
/// that one part has area `z`: a circle of latitude.
///
/// # Errors
///
/// NaN arguments, `z` outside `[0, 4*pi*a^2]`, or non-positive `a`.
pub fn pf_sphere(z: f64, a: f64) -> Result<f64> {
    not_nan(z, "pf_sphere", "z")?;
    not_nan(a, "pf_sphere", "a")?;
    in_range(
        0.0 <= z && z <= 4.0 * PI * a * a && z < f64::INFINITY,
        z,
        "pf_sphere",
        "z",
    )?;
    in_range(0.0 < a, a, "pf_sphere", "a")?;

    Ok(2.0 * z.sqrt() * (PI - z / (4.0 * a * a)).sqrt())
}

/// Largest surface area a curve of length `p` cuts off a sphere of
/// radius `a`: the smaller spherical cap bounded by that circle.
///
/// # Errors
///
/// NaN arguments, `p` outside `[0, 2*pi*a]`, or non-positive `a`.
pub fn ipf_sphere(p: f64, a: f64) -> Result<f64> {
    not_nan(p, "ipf_sphere", "p")?;
    not_nan(a, "ipf_sphere", "a")?;
    in_range(
        0.0 <= p && p <= 2.0 * PI * a && p < f64::INFINITY,
        p,
        "ipf_sphere",
        "p",
    )?;
    in_range(0.0 < a, a, "ipf_sphere", "a")?;

    let tmp = p / (2.0 * PI * a);
    Ok((2.0 * PI) * (a * (1.0 - (1.0 - tmp * tmp).sqrt()) * a))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn equator_bisects_the_sphere() {
        let a = 2.0;
        assert_relative_eq!(pf_sphere(2.0 * PI * a * a, a).unwrap(), 2.0 * PI * a);
    }

    #[test]
    fn empty_and_full_caps_cost_nothing() {
        assert_eq!(pf_sphere(0.0, 1.0).unwrap(), 0.0);
        assert_relative_eq!(pf_sphere(4.0 * PI, 1.0).unwrap(), 0.0, epsilon = 1e-7);
    }

    #[test]
    fn small_caps_match_the_plane() {
        let z = 1.0e-8;
        assert_relative_eq!(
            pf_sphere(z, 1.0).unwrap(),
            crate::domains::pf_plane(z).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn round_trip_below_equator() {
        // ipf returns the smaller cap, so only z <= 2*pi*a^2 round-trips.
        let a = 1.5;
        for &z in &[0.1, 1.0] {
            assert_relative_eq!(
                ipf_sphere(pf_sphere(z, a).unwrap(), a).unwrap(),
                z,
                epsilon = 1e-9
            );
        }
        // at the equator the inverse has infinite slope, which costs
        // a few digits
        let equator = 2.0 * PI * a * a;
        assert_relative_eq!(
            ipf_sphere(pf_sphere(equator, a).unwrap(), a).unwrap(),
            equator,
            epsilon = 1e-6
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(pf_sphere(-1.0, 1.0).is_err());
        assert!(pf_sphere(5.0 * PI, 1.0).is_err());
        assert!(pf_sphere(1.0, 0.0).is_err());
        assert!(ipf_sphere(3.0 * PI, 1.0).is_err());
        assert!(ipf_sphere(f64::NAN, 1.0).is_err());
    }
}
