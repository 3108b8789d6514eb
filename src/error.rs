use std::num::ParseFloatError;

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the planar geometry primitives.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: Scalar,
        min: Scalar,
        max: Scalar,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while decoding the text forms of a vector.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("malformed {kind}: expected {expected} fields, found {found} in {input:?}")]
    FieldCount {
        kind: &'static str,
        expected: usize,
        found: usize,
        input: String,
    },

    #[error("malformed {kind}: field {field} = {value:?} is not a number")]
    InvalidField {
        kind: &'static str,
        field: char,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("raw stream error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
