//! Perimeter functions of the unbounded plane and of a wedge.

use std::f64::consts::PI;

use crate::error::{in_range, not_nan};
use crate::Result;

/// Shortest curve enclosing area `z` in the plane: a circle.
///
/// # Errors
///
/// NaN or negative `z`.
pub fn pf_plane(z: f64) -> Result<f64> {
    not_nan(z, "pf_plane", "z")?;
    in_range(0.0 <= z, z, "pf_plane", "z")?;

    Ok(2.0 * PI.sqrt() * z.sqrt())
}

/// Largest area a closed curve of length `p` encloses in the plane.
///
/// # Errors
///
/// NaN or negative `p`.
pub fn ipf_plane(p: f64) -> Result<f64> {
    not_nan(p, "ipf_plane", "p")?;
    in_range(0.0 <= p, p, "ipf_plane", "p")?;

    Ok((p / (4.0 * PI)) * p)
}

/// Shortest curve cutting area `z` off an infinite wedge of opening
/// angle `theta`.
///
/// For `theta <= pi` the optimum is a circular arc centered at the
/// apex; beyond `pi` the arc reaches a half circle and widening the
/// wedge gains nothing.
///
/// # Errors
///
/// NaN arguments, negative `z`, or `theta` outside `(0, 2*pi)`.
pub fn pf_angle(z: f64, theta: f64) -> Result<f64> {
    not_nan(z, "pf_angle", "z")?;
    not_nan(theta, "pf_angle", "theta")?;
    in_range(0.0 <= z, z, "pf_angle", "z")?;
    in_range(0.0 < theta && theta < 2.0 * PI, theta, "pf_angle", "theta")?;

    Ok((2.0 * theta.min(PI)).sqrt() * z.sqrt())
}

/// Largest area an arc of length `p` cuts off a wedge of opening
/// angle `theta`.
///
/// # Errors
///
/// NaN arguments, negative `p`, or `theta` outside `(0, 2*pi)`.
pub fn ipf_angle(p: f64, theta: f64) -> Result<f64> {
    not_nan(p, "ipf_angle", "p")?;
    not_nan(theta, "ipf_angle", "theta")?;
    in_range(0.0 <= p, p, "ipf_angle", "p")?;
    in_range(0.0 < theta && theta < 2.0 * PI, theta, "ipf_angle", "theta")?;

    Ok(p / (2.0 * theta.min(PI)) * p)
}
