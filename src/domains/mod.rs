//! Perimeter functions of canonical domains.
//!
//! For a domain of area `A`, the perimeter function `pf(z)` is the
//! length of the shortest curve dividing the domain into a part of
//! area `z` and a part of area `A - z`. The inverse `ipf(p)` is the
//! largest area that a curve of length `p` can cut off. Outer
//! variants (`opf`, `iopf`) measure curves surrounding the domain
//! from outside.
//!
//! All functions validate their arguments and return
//! [`PerifnError::OutOfRange`](crate::PerifnError) on violation; chain
//! [`OrNan`](crate::OrNan) to get the quiet-NaN convention instead.

pub mod ball;
pub mod circle;
pub mod gain;
pub mod plane;
pub mod rectangle;
pub mod space;
pub mod sphere;

pub use ball::pf_sphere_3d;
pub use circle::{ipf_circle, iopf_circle, opf_circle, pf_circle};
pub use gain::{f, g, h};
pub use plane::{ipf_angle, ipf_plane, pf_angle, pf_plane};
pub use rectangle::{ipf_rectangle, iopf_rectangle, opf_rectangle, pf_rectangle};
pub use space::{ipf_3d, pf_3d};
pub use sphere::{ipf_sphere, pf_sphere};
