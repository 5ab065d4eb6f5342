//! Perimeter functions of convex planar domains.
//!
//! For a convex region of area `A` and an area `0 <= z <= A`, the
//! perimeter function `pf(z)` is the length of the shortest curve that
//! divides the region into parts of area `z` and `A - z`. The crate
//! provides closed-form or series-backed perimeter functions for the
//! canonical domains (half plane, wedge, disk, rectangle, sphere,
//! 3-space, ball) together with their inverses, and a full piecewise
//! construction for arbitrary convex polygons including the extraction
//! of the shortest bisecting curve.

pub mod domains;
pub mod error;
pub mod math;
pub mod perimeter;
pub mod polygon;

pub use error::{OrNan, PerifnError, Result};
pub use perimeter::{BisectingCurve, ConvexPolygonPf};
pub use polygon::ConvexPolygon;
