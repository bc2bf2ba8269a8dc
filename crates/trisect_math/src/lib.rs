//! Geometry kernel of trisect: 3D vectors packed in 4-lane SIMD registers, ray-plane intersection,
//! point-in-triangle containment using a precomputed coefficient register, and a nearest-hit query over a flat set of triangles.
//!
//! All math is single precision. The only failure a query can report is "no intersection" (`None`),
//! checked construction of triangles reports [`Error::DegenerateTriangle`].

use trisect_logging::LogCategory;

pub(crate) const LOG_CAT : LogCategory = LogCategory::new("Math");

mod error;
pub use error::*;

mod numeric;
pub use numeric::*;

mod vec3;
pub use vec3::*;

mod ray;
pub use ray::*;

mod plane;
pub use plane::*;

mod triangle;
pub use triangle::*;

mod intersections;
pub use intersections::*;
