use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{Scalar, Vector2, Vector3};

/// An infinite line in the 2D plane in implicit form `a·x + b·y + c = 0`.
///
/// The coefficients are stored as a [`Vector3`] `(a, b, c)`. The two points
/// used to build the line are not kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear2D {
    coefficients: Vector3,
}

impl Linear2D {
    /// Creates the line through `p0` and `p1`.
    ///
    /// `a = p1.y − p0.y`, `b = p0.x − p1.x`, `c = p0.y·p1.x − p0.x·p1.y`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the two points are equal
    /// within epsilon.
    pub fn new(p0: &Vector2, p1: &Vector2) -> Result<Self> {
        if p0.equal(p1) {
            tracing::debug!(%p0, %p1, "line through coincident points");
            return Err(GeometryError::Degenerate(format!(
                "no unique line through coincident points {p0} and {p1}"
            ))
            .into());
        }

        let a = p1.y() - p0.y();
        let b = p0.x() - p1.x();
        let c = p0.y() * p1.x() - p0.x() * p1.y();
        Ok(Self {
            coefficients: Vector3::new(a, b, c),
        })
    }

    /// Returns `(a, b, c)`.
    #[must_use]
    pub fn coefficients(&self) -> &Vector3 {
        &self.coefficients
    }

    /// Returns the x coefficient `a`.
    #[must_use]
    pub fn a(&self) -> Scalar {
        self.coefficients.x()
    }

    /// Returns the y coefficient `b`.
    #[must_use]
    pub fn b(&self) -> Scalar {
        self.coefficients.y()
    }

    /// Returns the constant term `c`.
    #[must_use]
    pub fn c(&self) -> Scalar {
        self.coefficients.z()
    }
}

impl fmt::Display for Linear2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x + {}y + {} = 0", self.a(), self.b(), self.c())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::PlanarError;
    use crate::math::{is_zero, EPSILON};
    use crate::test_util::init_tracing;

    fn on_line(line: &Linear2D, p: &Vector2) -> bool {
        is_zero(line.a() * p.x() + line.b() * p.y() + line.c())
    }

    #[test]
    fn horizontal_line() {
        let line = Linear2D::new(&Vector2::new(0.0, 0.0), &Vector2::new(2.0, 0.0)).unwrap();
        assert_eq!(*line.coefficients(), Vector3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn vertical_line() {
        let line = Linear2D::new(&Vector2::new(3.0, -1.0), &Vector2::new(3.0, 4.0)).unwrap();
        assert_abs_diff_eq!(line.a(), 5.0);
        assert_abs_diff_eq!(line.b(), 0.0);
        assert_abs_diff_eq!(line.c(), -15.0);
        assert!(on_line(&line, &Vector2::new(3.0, 100.0)));
    }

    #[test]
    fn both_points_satisfy_equation() {
        let p0 = Vector2::new(1.0, 2.0);
        let p1 = Vector2::new(-3.0, 0.5);
        let line = Linear2D::new(&p0, &p1).unwrap();
        assert!(on_line(&line, &p0));
        assert!(on_line(&line, &p1));
        assert!(!on_line(&line, &Vector2::new(0.0, 0.0)));
    }

    #[test]
    fn coincident_points_rejected() {
        init_tracing();
        let p = Vector2::new(1.0, 1.0);
        let err = Linear2D::new(&p, &p.clone()).unwrap_err();
        assert!(matches!(
            err,
            PlanarError::Geometry(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn nearly_coincident_points_rejected() {
        let p0 = Vector2::new(1.0, 1.0);
        let p1 = Vector2::new(1.0 + EPSILON / 4.0, 1.0);
        assert!(Linear2D::new(&p0, &p1).is_err());
    }

    #[test]
    fn distinct_points_accepted() {
        // A check against the same point twice would reject every input.
        let p0 = Vector2::new(1.0, 1.0);
        let p1 = Vector2::new(2.0, 1.0);
        assert!(Linear2D::new(&p0, &p1).is_ok());
    }

    #[test]
    fn display() {
        let line = Linear2D::new(&Vector2::new(0.0, 0.0), &Vector2::new(1.0, 1.0)).unwrap();
        assert_eq!(line.to_string(), "1x + -1y + 0 = 0");
    }
}
