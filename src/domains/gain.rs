//! Gain functions of the expanding-circle search strategy.
//!
//! `f(w, r)` is the perimeter of the union of a unit disk and a disk
//! of radius `w` whose centers are `r` apart, per unit of `r`; `g(w,
//! r)` is the corresponding swept area; `h(w, r, a)` transfers `f` to
//! a sphere of radius `a`, where the expanding circle is a geodesic
//! one.

use std::f64::consts::PI;

use crate::error::{in_range, not_nan};
use crate::Result;

/// Perimeter gain in the plane.
///
/// # Errors
///
/// NaN arguments, `w` outside `[0, 1]` or negative `r`.
pub fn f(w: f64, r: f64) -> Result<f64> {
    not_nan(w, "f", "w")?;
    not_nan(r, "f", "r")?;
    in_range((0.0..=1.0).contains(&w), w, "f", "w")?;
    in_range(0.0 <= r, r, "f", "r")?;

    Ok(f_raw(w, r))
}

/// Area gain in the plane.
///
/// # Errors
///
/// NaN arguments, `w` outside `[0, 1]` or negative `r`.
pub fn g(w: f64, r: f64) -> Result<f64> {
    not_nan(w, "g", "w")?;
    not_nan(r, "g", "r")?;
    in_range((0.0..=1.0).contains(&w), w, "g", "w")?;
    in_range(0.0 <= r, r, "g", "r")?;

    let tmp = 1.0 + w;
    Ok(PI * r * r * tmp * tmp)
}

fn f_raw(w: f64, r: f64) -> f64 {
    2.0 * r * (w * (PI - w.acos()) + (1.0 - w * w).sqrt())
}

/// Perimeter gain on a sphere of radius `a`.
///
/// Four evaluation regimes are used depending on the normalized
/// distance `r/a`: the closed form on `|r/a| > pi/2`, power series for
/// the cancellation-prone intermediates on moderate `r/a`, a blend of
/// the two over a narrow band, and the planar `f` when `r/a` is small
/// enough that curvature is invisible.
///
/// `h(1, 0, a)` is returned as 0 although the two iterated limits
/// disagree there: the function is odd in `r`, so 0 is the only
/// consistent choice.
///
/// # Errors
///
/// NaN arguments, `w` outside `[0, 1]`, `r` outside `[0, pi*a]`, or
/// non-positive `a`.
pub fn h(w: f64, r: f64, a: f64) -> Result<f64> {
    not_nan(w, "h", "w")?;
    not_nan(r, "h", "r")?;
    not_nan(a, "h", "a")?;
    in_range((0.0..=1.0).contains(&w), w, "h", "w")?;
    in_range(0.0 <= r && r <= PI * a, r, "h", "r")?;
    in_range(0.0 < a, a, "h", "a")?;

    let r = r / a;

    let r_limit = 1.0e-10;

    if w == 1.0 && r <= r_limit {
        // At w = 1 the general algorithm loses r^4 to underflow.
        // Near r = 0, h(1, r) = 4/sqrt(3) + 2*pi*r + O(r^3).
        let lim = 4.0 / 3.0_f64.sqrt();

        if r > 0.0 {
            return Ok(a * (lim + 2.0 * PI * r));
        }
        return Ok(0.0);
    }

    let r_limit_1 = 1.0e-5;
    let r_limit_2 = 2.0e-5;

    let closed_form = r > PI / 2.0;
    let series = !closed_form && (r > r_limit_2 || r * r > (1.0 - w) / 100.0);
    let blend = !closed_form && !series && r > r_limit_1;

    if !closed_form && !series && !blend {
        // Small enough that the sphere looks flat.
        return Ok(a * f_raw(w, r));
    }

    let w2 = w * w;
    let r2 = r * r;
    let c = r.cos();
    let s = r.sin();
    let ws = w * s;
    let ws_r = if r == 0.0 { w } else { ws / r };

    // x = 1 - (w*sin(r)/r)^2
    // y = cos(r) - w*sin(r)/r
    // z = cos(r) - w^2*sin(r)/r
    let (x, y, z) = if closed_form {
        (1.0 - ws_r * ws_r, c - ws_r, c - ws_r * w)
    } else {
        // Power series keep the accuracy uniform over |r| <= pi/2,
        // where the differences above cancel catastrophically.
        let mut p = [r2; 12];
        for ind in 1..12 {
            p[ind] = p[ind - 1] * r2;
        }

        let x = (1.0 - w) * (1.0 + w)
            + w2 * (p[0] / 3.0 - p[1] * 2.0 / 45.0 + p[2] / 315.0 - p[3] * 2.0 / 14175.0
                + p[4] * 2.0 / 467_775.0
                - p[5] * 4.0 / 42_567_525.0
                + p[6] / 638_512_875.0
                - p[7] * 2.0 / 97_692_469_875.0
                + p[8] * 2.0 / 9_280_784_638_125.0
                - p[9] * 4.0 / 2_143_861_251_406_875.0
                + p[10] * 2.0 / 147_926_426_347_074_375.0
                - p[11] * 4.0 / 48_076_088_562_799_171_875.0);

        let y = (1.0 - w) - p[0] * (3.0 - w) / 6.0 + p[1] * (5.0 - w) / 120.0
            - p[2] * (7.0 - w) / 5040.0
            + p[3] * (9.0 - w) / 362_880.0
            - p[4] * (11.0 - w) / 39_916_800.0
            + p[5] * (13.0 - w) / 6_227_020_800.0
            - p[6] * (15.0 - w) / 1_307_674_368_000.0
            + p[7] * (17.0 - w) / 355_687_428_096_000.0
            - p[8] * (19.0 - w) / 121_645_100_408_832_000.0
            + p[9] * (21.0 - w) / 51_090_942_171_709_440_000.0;

        let z = (1.0 - w2) - p[0] * (3.0 - w2) / 6.0 + p[1] * (5.0 - w2) / 120.0
            - p[2] * (7.0 - w2) / 5040.0
            + p[3] * (9.0 - w2) / 362_880.0
            - p[4] * (11.0 - w2) / 39_916_800.0
            + p[5] * (13.0 - w2) / 6_227_020_800.0
            - p[6] * (15.0 - w2) / 1_307_674_368_000.0
            + p[7] * (17.0 - w2) / 355_687_428_096_000.0
            - p[8] * (19.0 - w2) / 121_645_100_408_832_000.0
            + p[9] * (21.0 - w2) / 51_090_942_171_709_440_000.0;

        (x, y, z)
    };

    let h1 = 2.0 * ws * (PI - ws_r.acos());
    let h2 = (2.0 * y * z + 2.0 * r2 * x * x) / (x.sqrt() * (z * z + r2 * x * x).sqrt());
    let h3 = -2.0 * y * c / x.sqrt();

    let mut result = h1 + (h2 + h3) / r;

    if blend {
        result = (result * (r_limit_2 - r) + f_raw(w, r) * (r - r_limit_1))
            / (r_limit_2 - r_limit_1);
    }

    Ok(a * result)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn f_vanishing_weight_leaves_the_diameter() {
        // w = 0: the closed form collapses to 2r.
        assert_relative_eq!(f(0.0, 1.0).unwrap(), 2.0);
        assert_relative_eq!(f(0.0, 2.5).unwrap(), 5.0);
    }

    #[test]
    fn f_full_weight_gives_the_circumference() {
        // w = 1: acos(1) = 0, so f(1, r) = 2*pi*r.
        assert_relative_eq!(f(1.0, 1.0).unwrap(), 2.0 * PI);
        assert_relative_eq!(f(1.0, 2.5).unwrap(), 5.0 * PI);
    }

    #[test]
    fn f_is_linear_in_r() {
        let one = f(0.5, 1.0).unwrap();
        let three = f(0.5, 3.0).unwrap();
        assert_relative_eq!(three, 3.0 * one, epsilon = 1e-12);
    }

    #[test]
    fn g_matches_disk_of_summed_radii() {
        assert_relative_eq!(g(0.0, 1.0).unwrap(), PI);
        assert_relative_eq!(g(1.0, 1.0).unwrap(), 4.0 * PI);
        assert_relative_eq!(g(0.5, 2.0).unwrap(), PI * 4.0 * 2.25);
    }

    #[test]
    fn h_flattens_to_f_for_small_r() {
        // Well below the series threshold the sphere is a plane.
        let r = 1.0e-7;
        assert_relative_eq!(
            h(0.3, r, 1.0).unwrap(),
            f(0.3, r).unwrap(),
            epsilon = 1e-18
        );
    }

    #[test]
    fn h_at_zero_distance() {
        assert_eq!(h(0.5, 0.0, 1.0).unwrap(), 0.0);
        assert_eq!(h(1.0, 0.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn h_near_zero_with_unit_w() {
        let lim = 4.0 / 3.0_f64.sqrt();
        assert_relative_eq!(
            h(1.0, 1.0e-12, 1.0).unwrap(),
            lim + 2.0 * PI * 1.0e-12,
            epsilon = 1e-12
        );
    }

    #[test]
    fn h_scales_with_sphere_radius() {
        let unit = h(0.4, 0.7, 1.0).unwrap();
        let scaled = h(0.4, 2.1, 3.0).unwrap();
        assert_relative_eq!(scaled, 3.0 * unit, epsilon = 1e-10);
    }

    #[test]
    fn h_continuous_across_blend_band() {
        // Values straddling the 1e-5..2e-5 blending interval must agree
        // to many digits.
        let below = h(0.9, 0.9e-5, 1.0).unwrap();
        let above = h(0.9, 2.1e-5, 1.0).unwrap();
        let per_r_below = below / 0.9e-5;
        let per_r_above = above / 2.1e-5;
        assert_relative_eq!(per_r_below, per_r_above, epsilon = 1e-6);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(f(-0.1, 1.0).is_err());
        assert!(f(1.1, 1.0).is_err());
        assert!(f(0.5, -1.0).is_err());
        assert!(g(f64::NAN, 1.0).is_err());
        assert!(h(0.5, 1.0, 0.0).is_err());
        assert!(h(0.5, 4.0, 1.0).is_err()); // r > pi*a
    }
}
