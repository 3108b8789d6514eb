use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use nalgebra::Rotation2;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PlanarError, Result};

use super::{codec, is_zero, Scalar, Vector2};

const KIND: &str = "Vector3";

/// A point or direction in 3D space.
///
/// Unlike [`Vector2`], nothing is cached: magnitudes are recomputed from the
/// current components on every call. Also serves as the coefficient triple of
/// [`Linear2D`](crate::geometry::Linear2D).
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3 {
    x: Scalar,
    y: Scalar,
    z: Scalar,
}

impl Vector3 {
    /// Creates a new vector.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Creates the zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Lifts a 2D vector off the ground plane: `(x, y)` becomes `(x, 0, y)`.
    #[must_use]
    pub fn from_vector2(v: &Vector2) -> Self {
        Self::new(v.x(), 0.0, v.y())
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

    /// Returns the z component.
    #[must_use]
    pub fn z(&self) -> Scalar {
        self.z
    }

    /// Sets the x component.
    pub fn set_x(&mut self, x: Scalar) {
        self.x = x;
    }

    /// Sets the y component.
    pub fn set_y(&mut self, y: Scalar) {
        self.y = y;
    }

    /// Sets the z component.
    pub fn set_z(&mut self, z: Scalar) {
        self.z = z;
    }

    /// Sets all three components at once.
    pub fn set(&mut self, x: Scalar, y: Scalar, z: Scalar) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Returns `x² + y² + z²`.
    #[must_use]
    pub fn squared_magnitude(&self) -> Scalar {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the Euclidean length.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        self.squared_magnitude().sqrt()
    }

    /// Multiplies every component by `factor`.
    pub fn mul_scalar(&mut self, factor: Scalar) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
        self
    }

    /// Alias of [`Vector3::mul_scalar`].
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

    /// Rotates the `(x, y)` pair counter-clockwise by `angle` radians about
    /// the z axis. `z` does not take part and is untouched.
    pub fn rotate(&mut self, angle: Scalar) -> &mut Self {
        let rotated = Rotation2::new(angle) * nalgebra::Vector2::new(self.x, self.y);
        self.x = rotated.x;
        self.y = rotated.y;
        self
    }

    /// Negates every component.
    pub fn invert(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Returns whether every component is within epsilon of `other`'s.
    #[must_use]
    pub fn equal(&self, other: &Vector3) -> bool {
        is_zero(self.x - other.x) && is_zero(self.y - other.y) && is_zero(self.z - other.z)
    }

    /// Adds `other` to `self`.
    pub fn add(&mut self, other: &Vector3) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }

    /// Subtracts `other` from `self`.
    pub fn sub(&mut self, other: &Vector3) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self
    }

    /// Returns the dot product.
    #[must_use]
    pub fn dot(&self, other: &Vector3) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Encodes as `"x#y#z"`.
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        codec::encode_compact(&[self.x, self.y, self.z])
    }

    /// Writes `"x y z\n"` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_raw<W: Write>(&self, writer: W) -> Result<()> {
        Ok(codec::write_raw(writer, &[self.x, self.y, self.z])?)
    }

    /// Encodes as `"x y z\n"`.
    #[must_use]
    pub fn to_raw_bytes(&self) -> Vec<u8> {
        codec::encode_raw(&[self.x, self.y, self.z])
    }

    /// Reads one `"x y z"` line from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, the line does not hold exactly
    /// three fields, or a field is not a number.
    pub fn read_raw<R: BufRead>(reader: R) -> Result<Self> {
        let [x, y, z] = codec::read_raw::<3, _>(KIND, reader)?;
        Ok(Self::new(x, y, z))
    }

    /// Decodes bytes produced by [`Vector3::to_raw_bytes`].
    ///
    /// # Errors
    ///
    /// See [`Vector3::read_raw`].
    pub fn from_raw_bytes(bytes: &[u8]) -> Result<Self> {
        Self::read_raw(bytes)
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vector3({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<&Vector2> for Vector3 {
    fn from(v: &Vector2) -> Self {
        Self::from_vector2(v)
    }
}

impl From<nalgebra::Vector3<Scalar>> for Vector3 {
    fn from(v: nalgebra::Vector3<Scalar>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<Scalar> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl FromStr for Vector3 {
    type Err = PlanarError;

    /// Parses the compact `"x#y#z"` form.
    fn from_str(s: &str) -> Result<Self> {
        let [x, y, z] = codec::decode_compact::<3>(KIND, s)?;
        Ok(Self::new(x, y, z))
    }
}

impl Serialize for Vector3 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_compact_string())
    }
}

impl<'de> Deserialize<'de> for Vector3 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
