use std::ops::Not;

use super::{kind::Free, vector::Vector};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisDirection {
    X,
    Y,
}

impl AxisDirection {
    // index of the axis inside a 2d vector
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            AxisDirection::X => 0,
            AxisDirection::Y => 1,
        }
    }
}

impl Not for AxisDirection {
    type Output = Self;
    fn not(self) -> Self::Output {
        use AxisDirection::*;
        match self {
            X => Y,
            Y => X,
        }
    }
}

impl From<AxisDirection> for Vector<Free> {
    fn from(axis: AxisDirection) -> Self {
        use AxisDirection::*;
        match axis {
            X => (1., 0.).into(),
            Y => (0., 1.).into(),
        }
    }
}

#[cfg(test)]
mod tests {

    use std::mem::size_of;

    use super::*;

    #[test]
    fn test_axis_direction_size() {
        assert_eq!(size_of::<AxisDirection>(), size_of::<u8>());
    }

    #[test]
    fn test_axis_unit_vector() {
        let x: Vector = AxisDirection::X.into();
        let y: Vector = (!AxisDirection::X).into();
        assert_eq!(x, Vector::new(1., 0.));
        assert_eq!(y, Vector::new(0., 1.));
        assert_eq!(x.dot(&y), 0.);
    }
}
