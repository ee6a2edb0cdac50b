pub mod force;

use crate::{
    errors::{Error, Result},
    math::FloatNum,
};

/// Mass kept next to its inverse, a fixed body has infinite mass and zero inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mass {
    value: FloatNum,
    inv: FloatNum,
}

impl Default for Mass {
    fn default() -> Self {
        Self { value: 1., inv: 1. }
    }
}

impl Mass {
    pub fn new(value: FloatNum) -> Result<Self> {
        if !(value.is_finite() && value > 0.) {
            return Err(Error::InvalidMass { mass: value });
        }
        Ok(Self {
            value,
            inv: value.recip(),
        })
    }

    // validated later, see `BodyBuilder::build`
    pub(crate) fn unchecked(value: FloatNum) -> Self {
        Self {
            value,
            inv: value.recip(),
        }
    }

    pub const fn infinite() -> Self {
        Self {
            value: FloatNum::INFINITY,
            inv: 0.,
        }
    }

    #[inline]
    pub fn value(&self) -> FloatNum {
        self.value
    }

    #[inline]
    pub fn inv(&self) -> FloatNum {
        self.inv
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.inv == 0.
    }
}
