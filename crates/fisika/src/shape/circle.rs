use std::f64::consts::PI;

use super::Geometry;
use crate::math::FloatNum;

// drag coefficient of a sphere
pub const DEFAULT_CIRCLE_DRAG_COEFFICIENT: FloatNum = 0.47;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    radius: FloatNum,
    #[cfg_attr(feature = "serde", serde(default = "default_drag_coefficient"))]
    drag_coefficient: FloatNum,
}

#[cfg(feature = "serde")]
fn default_drag_coefficient() -> FloatNum {
    DEFAULT_CIRCLE_DRAG_COEFFICIENT
}

impl Circle {
    #[inline]
    pub fn new(radius: FloatNum) -> Self {
        Self {
            radius,
            drag_coefficient: DEFAULT_CIRCLE_DRAG_COEFFICIENT,
        }
    }

    #[inline]
    pub fn with_drag_coefficient(mut self, drag_coefficient: FloatNum) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    #[inline]
    pub fn radius(&self) -> FloatNum {
        self.radius
    }
}

impl Geometry for Circle {
    // π·r²
    fn frontal_area(&self) -> FloatNum {
        PI * self.radius.powi(2)
    }

    fn drag_coefficient(&self) -> FloatNum {
        self.drag_coefficient
    }

    fn extent(&self) -> (FloatNum, FloatNum) {
        let diameter = self.radius * 2.;
        (diameter, diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vector::Vector;

    #[test]
    fn test_circle_geometry() {
        let circle = Circle::new(0.5);
        assert!((circle.frontal_area() - PI * 0.25).abs() < 1e-12);
        assert_eq!(circle.extent(), (1., 1.));
        assert_eq!(circle.half_extent(), Vector::new(0.5, 0.5));
        assert_eq!(circle.drag_coefficient(), DEFAULT_CIRCLE_DRAG_COEFFICIENT);
        assert_eq!(circle.with_drag_coefficient(0.1).drag_coefficient(), 0.1);
    }
}
