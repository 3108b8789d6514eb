use std::cell::Cell;
use std::fmt;
use std::io::{BufRead, Write};
use std::ops::{AddAssign, MulAssign, Neg, SubAssign};
use std::str::FromStr;

use nalgebra::Rotation2;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GeometryError, PlanarError, Result};

use super::{codec, is_zero, Scalar, Vector3};

const KIND: &str = "Vector2";

/// Magnitude values computed together from the same components.
#[derive(Debug, Clone, Copy)]
struct MagnitudeCache {
    squared: Scalar,
    magnitude: Scalar,
}

/// A point or direction in the 2D plane.
///
/// The magnitude and the unit direction are memoized. Every mutation goes
/// through a method that clears the affected cache, so a stale value is never
/// observable. The caches use interior mutability, which makes `Vector2`
/// `Send` but not `Sync`: an instance has a single owner, and [`Clone`] is the
/// way to hand a copy to someone else.
///
/// Equality (both [`Vector2::equal`] and `==`) compares components within
/// [`EPSILON`](super::EPSILON).
pub struct Vector2 {
    x: Scalar,
    y: Scalar,
    /// `None` means dirty.
    magnitude: Cell<Option<MagnitudeCache>>,
    /// Components of the unit vector, `None` means dirty.
    normalized: Cell<Option<(Scalar, Scalar)>>,
}

impl Vector2 {
    /// Creates a new vector.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self {
            x,
            y,
            magnitude: Cell::new(None),
            normalized: Cell::new(None),
        }
    }

    /// Creates the zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Projects a 3D vector onto the ground plane, taking its `x` and `z`.
    #[must_use]
    pub fn from_vector3(v: &Vector3) -> Self {
        Self::new(v.x(), v.z())
    }

    /// Returns the x component.
    #[must_use]
    pub fn x(&self) -> Scalar {
        self.x
    }

    /// Returns the y component.
    #[must_use]
    pub fn y(&self) -> Scalar {
        self.y
    }

    /// Sets the x component.
    pub fn set_x(&mut self, x: Scalar) {
        self.x = x;
        self.invalidate();
    }

    /// Sets the y component.
    pub fn set_y(&mut self, y: Scalar) {
        self.y = y;
        self.invalidate();
    }

    /// Sets both components at once.
    pub fn set(&mut self, x: Scalar, y: Scalar) {
        self.x = x;
        self.y = y;
        self.invalidate();
    }

    /// Returns `x² + y²`.
    #[must_use]
    pub fn squared_magnitude(&self) -> Scalar {
        self.magnitude_cache().squared
    }

    /// Returns the Euclidean length.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        self.magnitude_cache().magnitude
    }

    /// Multiplies both components by `factor`.
    pub fn mul_scalar(&mut self, factor: Scalar) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self.invalidate();
        self
    }

    /// Alias of [`Vector2::mul_scalar`].
    pub fn scale(&mut self, factor: Scalar) -> &mut Self {
        self.mul_scalar(factor)
    }

    /// Scales the vector to unit length. A zero vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let size = self.magnitude();
        if !is_zero(size) {
            self.mul_scalar(1.0 / size);
        }
        self
    }

    /// Returns a unit-length copy without touching `self`.
    ///
    /// The result is cached until the next mutation. A zero vector yields a
    /// copy of itself.
    #[must_use]
    pub fn normalized(&self) -> Self {
        if let Some((x, y)) = self.normalized.get() {
            return Self::new(x, y);
        }
        let mut unit = self.clone();
        unit.normalize();
        self.normalized.set(Some((unit.x, unit.y)));
        unit
    }

    /// Rotates counter-clockwise by `angle` radians.
    ///
    /// `x' = x·cos − y·sin`, `y' = x·sin + y·cos`, both from the components
    /// before the rotation.
    pub fn rotate(&mut self, angle: Scalar) -> &mut Self {
        let rotated = Rotation2::new(angle) * nalgebra::Vector2::new(self.x, self.y);
        self.x = rotated.x;
        self.y = rotated.y;
        self.invalidate();
        self
    }

    /// Negates both components.
    pub fn invert(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        // Length is unchanged, only the direction flips.
        self.normalized.set(None);
        self
    }

    /// Returns whether every component is within epsilon of `other`'s.
    #[must_use]
    pub fn equal(&self, other: &Vector2) -> bool {
        is_zero(self.x - other.x) && is_zero(self.y - other.y)
    }

    /// Adds `other` to `self`.
    pub fn add(&mut self, other: &Vector2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.invalidate();
        self
    }

    /// Subtracts `other` from `self`.
    pub fn sub(&mut self, other: &Vector2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.invalidate();
        self
    }

    /// Returns the dot product `x·ox + y·oy`.
    #[must_use]
    pub fn dot(&self, other: &Vector2) -> Scalar {
        self.x * other.x + self.y * other.y
    }

    /// Cosine of the angle between `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if either vector has zero length.
    pub fn cosine(&self, other: &Vector2) -> Result<Scalar> {
        let (m1, m2) = (self.magnitude(), other.magnitude());
        if is_zero(m1) || is_zero(m2) {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self.dot(other) / (m1 * m2))
    }

    /// Angle between `self` and `other` in radians, in `[0, π]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if either vector has zero length.
    pub fn angle(&self, other: &Vector2) -> Result<Scalar> {
        let cos = self.cosine(other)?.clamp(-1.0, 1.0);
        Ok(cos.acos())
    }

    /// Distance between the two points.
    #[must_use]
    pub fn distance(&self, other: &Vector2) -> Scalar {
        self.clone().sub(other).magnitude()
    }

    /// Linear interpolation `self + t·(other − self)` for `t` in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `t` is outside `[0, 1]`.
    pub fn lerp(&self, other: &Vector2, t: Scalar) -> Result<Vector2> {
        if !(0.0..=1.0).contains(&t) {
            tracing::warn!(t, "lerp parameter not in [0, 1]");
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        let mut dir = other.clone();
        dir.sub(self).scale(t);
        let mut point = self.clone();
        point.add(&dir);
        Ok(point)
    }

    /// Encodes as `"x#y"`.
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        codec::encode_compact(&[self.x, self.y])
    }

    /// Writes `"x y\n"` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_raw<W: Write>(&self, writer: W) -> Result<()> {
        Ok(codec::write_raw(writer, &[self.x, self.y])?)
    }

    /// Encodes as `"x y\n"`.
    #[must_use]
    pub fn to_raw_bytes(&self) -> Vec<u8> {
        codec::encode_raw(&[self.x, self.y])
    }

    /// Reads one `"x y"` line from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, the line does not hold exactly two
    /// fields, or a field is not a number.
    pub fn read_raw<R: BufRead>(reader: R) -> Result<Self> {
        let [x, y] = codec::read_raw::<2, _>(KIND, reader)?;
        Ok(Self::new(x, y))
    }

    /// Decodes bytes produced by [`Vector2::to_raw_bytes`].
    ///
    /// # Errors
    ///
    /// See [`Vector2::read_raw`].
    pub fn from_raw_bytes(bytes: &[u8]) -> Result<Self> {
        Self::read_raw(bytes)
    }

    fn magnitude_cache(&self) -> MagnitudeCache {
        if let Some(cache) = self.magnitude.get() {
            return cache;
        }
        let squared = self.x * self.x + self.y * self.y;
        let cache = MagnitudeCache {
            squared,
            magnitude: squared.sqrt(),
        };
        tracing::trace!(
            x = self.x,
            y = self.y,
            magnitude = cache.magnitude,
            "magnitude recomputed"
        );
        self.magnitude.set(Some(cache));
        cache
    }

    fn invalidate(&mut self) {
        self.magnitude.set(None);
        self.normalized.set(None);
    }
}

impl Clone for Vector2 {
    /// Copies the components; the copy starts with dirty caches.
    fn clone(&self) -> Self {
        Self::new(self.x, self.y)
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vector2({}, {})", self.x, self.y)
    }
}

impl AddAssign<&Vector2> for Vector2 {
    fn add_assign(&mut self, rhs: &Vector2) {
        Vector2::add(self, rhs);
    }
}

impl SubAssign<&Vector2> for Vector2 {
    fn sub_assign(&mut self, rhs: &Vector2) {
        Vector2::sub(self, rhs);
    }
}

impl MulAssign<Scalar> for Vector2 {
    fn mul_assign(&mut self, rhs: Scalar) {
        self.mul_scalar(rhs);
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(mut self) -> Vector2 {
        self.invert();
        self
    }
}

impl From<&Vector3> for Vector2 {
    fn from(v: &Vector3) -> Self {
        Self::from_vector3(v)
    }
}

impl From<nalgebra::Vector2<Scalar>> for Vector2 {
    fn from(v: nalgebra::Vector2<Scalar>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<&Vector2> for nalgebra::Vector2<Scalar> {
    fn from(v: &Vector2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl FromStr for Vector2 {
    type Err = PlanarError;

    /// Parses the compact `"x#y"` form.
    fn from_str(s: &str) -> Result<Self> {
        let [x, y] = codec::decode_compact::<2>(KIND, s)?;
        Ok(Self::new(x, y))
    }
}

impl Serialize for Vector2 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_compact_string())
    }
}

impl<'de> Deserialize<'de> for Vector2 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
