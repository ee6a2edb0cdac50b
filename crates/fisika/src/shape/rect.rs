use super::Geometry;
use crate::math::FloatNum;

// drag coefficient of a cube facing the flow
pub const DEFAULT_RECT_DRAG_COEFFICIENT: FloatNum = 1.05;

// common shape, axis aligned rectangle centered on the body position
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    width: FloatNum,
    height: FloatNum,
    #[cfg_attr(feature = "serde", serde(default = "default_drag_coefficient"))]
    drag_coefficient: FloatNum,
}

#[cfg(feature = "serde")]
fn default_drag_coefficient() -> FloatNum {
    DEFAULT_RECT_DRAG_COEFFICIENT
}

impl Rect {
    #[inline]
    pub fn new(width: FloatNum, height: FloatNum) -> Self {
        Self {
            width,
            height,
            drag_coefficient: DEFAULT_RECT_DRAG_COEFFICIENT,
        }
    }

    #[inline]
    pub fn with_drag_coefficient(mut self, drag_coefficient: FloatNum) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    pub fn width(&self) -> FloatNum {
        self.width
    }

    pub fn height(&self) -> FloatNum {
        self.height
    }
}

impl Geometry for Rect {
    fn frontal_area(&self) -> FloatNum {
        self.width * self.height
    }

    fn drag_coefficient(&self) -> FloatNum {
        self.drag_coefficient
    }

    fn extent(&self) -> (FloatNum, FloatNum) {
        (self.width, self.height)
    }
}
