//! Perimeter functions of unbounded 3-space.
//!
//! The "perimeter" of a volume in 3-space is the area of the surface
//! enclosing it; the optimum is a sphere.

use std::f64::consts::PI;

use crate::error::{in_range, not_nan};
use crate::Result;

/// Smallest surface area enclosing volume `z`.
///
/// # Errors
///
/// NaN or negative `z`.
pub fn pf_3d(z: f64) -> Result<f64> {
    not_nan(z, "pf_3d", "z")?;
    in_range(0.0 <= z, z, "pf_3d", "z")?;

    Ok((6.0 * PI.sqrt() * z).powf(2.0 / 3.0))
}

/// Largest volume a closed surface of area `p` encloses.
///
/// # Errors
///
/// NaN or negative `p`.
pub fn ipf_3d(p: f64) -> Result<f64> {
    not_nan(p, "ipf_3d", "p")?;
    in_range(0.0 <= p, p, "ipf_3d", "p")?;

    Ok(((p / (36.0 * PI)) * p * p).sqrt())
}
