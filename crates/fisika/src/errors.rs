use thiserror::Error;

use crate::{body::ID, math::FloatNum};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("dimension mismatch: expected {expected} elements, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("mass of a movable body must be finite and larger than zero, got {mass}")]
    InvalidMass { mass: FloatNum },

    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("invalid world config: {0}")]
    InvalidConfig(String),

    #[error("body {0} not found")]
    BodyNotFound(ID),

    #[error("no body id left to assign")]
    IdExhausted,

    #[error("incomplete builder: {0}")]
    Builder(String),
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(value: derive_builder::UninitializedFieldError) -> Self {
        Self::Builder(value.to_string())
    }
}
