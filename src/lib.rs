//! 2D and 3D vector primitives with an epsilon equality policy, plus the
//! implicit 2D line built on top of them.

pub mod error;
pub mod geometry;
pub mod math;

#[cfg(test)]
mod test_util;

pub use error::{FormatError, GeometryError, PlanarError, Result};
pub use geometry::Linear2D;
pub use math::{Scalar, Vector2, Vector3, EPSILON};
