mod codec;
pub mod vector2;
pub mod vector3;

pub use vector2::Vector2;
pub use vector3::Vector3;

/// Scalar type shared by every vector and line.
pub type Scalar = f32;

/// Global tolerance for scalar equality and degeneracy checks.
///
/// Two scalars are equal when their absolute difference is below this value.
pub const EPSILON: Scalar = 1e-6;

/// Returns whether `v` is within [`EPSILON`] of zero.
#[must_use]
pub fn is_zero(v: Scalar) -> bool {
    v.abs() < EPSILON
}

/// Returns the smaller of `a` and `b`.
#[must_use]
pub fn min(a: Scalar, b: Scalar) -> Scalar {
    if a < b { a } else { b }
}

/// Returns the larger of `a` and `b`.
#[must_use]
pub fn max(a: Scalar, b: Scalar) -> Scalar {
    if a > b { a } else { b }
}

/// Componentwise minimum of two vectors.
#[must_use]
pub fn min_vec2(v1: &Vector2, v2: &Vector2) -> Vector2 {
    Vector2::new(min(v1.x(), v2.x()), min(v1.y(), v2.y()))
}

/// Componentwise maximum of two vectors.
#[must_use]
pub fn max_vec2(v1: &Vector2, v2: &Vector2) -> Vector2 {
    Vector2::new(max(v1.x(), v2.x()), max(v1.y(), v2.y()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_zero_below_epsilon() {
        assert!(is_zero(0.0));
        assert!(is_zero(5e-7));
        assert!(is_zero(-5e-7));
    }

    #[test]
    fn is_zero_at_or_above_epsilon() {
        assert!(!is_zero(EPSILON));
        assert!(!is_zero(-2.0 * EPSILON));
        assert!(!is_zero(1.0));
    }

    #[test]
    fn scalar_min_max() {
        assert!((min(1.0, 2.0) - 1.0).abs() < EPSILON);
        assert!((min(-3.0, 2.0) + 3.0).abs() < EPSILON);
        assert!((max(1.0, 2.0) - 2.0).abs() < EPSILON);
        assert!((max(4.0, 4.0) - 4.0).abs() < EPSILON);
    }

    #[test]
    fn vec2_min_max_componentwise() {
        let a = Vector2::new(1.0, 5.0);
        let b = Vector2::new(3.0, -2.0);

        assert!(min_vec2(&a, &b).equal(&Vector2::new(1.0, -2.0)));
        assert!(max_vec2(&a, &b).equal(&Vector2::new(3.0, 5.0)));
        // Inputs are untouched.
        assert!(a.equal(&Vector2::new(1.0, 5.0)));
        assert!(b.equal(&Vector2::new(3.0, -2.0)));
    }
}
