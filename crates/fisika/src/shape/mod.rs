pub mod circle;
pub mod rect;

pub use circle::Circle;
pub use rect::Rect;

use crate::{
    errors::{Error, Result},
    math::{axis::AxisDirection, vector::Vector, FloatNum, Position},
};

/// Geometry a body exposes to the drag model and to the collision system.
pub trait Geometry {
    // area facing the flow, used by the drag equation
    fn frontal_area(&self) -> FloatNum;

    fn drag_coefficient(&self) -> FloatNum;

    // (width, height) of the axis aligned bounding box
    fn extent(&self) -> (FloatNum, FloatNum);

    fn half_extent(&self) -> Vector {
        let (width, height) = self.extent();
        (width * 0.5, height * 0.5).into()
    }

    fn projection_on_axis(&self, center: &Position, axis: AxisDirection) -> (FloatNum, FloatNum) {
        let index = axis.index();
        let center = center.elements()[index];
        let half = self.half_extent().elements()[index];
        (center - half, center + half)
    }
}

/// Shape of a body, the rendering side switches on the variant to draw it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum Shape {
    Circle(Circle),
    Rect(Rect),
}

impl Shape {
    #[inline]
    pub fn circle(radius: FloatNum) -> Self {
        Circle::new(radius).into()
    }

    #[inline]
    pub fn rect(width: FloatNum, height: FloatNum) -> Self {
        Rect::new(width, height).into()
    }

    #[inline]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(circle) => Some(circle),
            Shape::Rect(_) => None,
        }
    }

    #[inline]
    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Shape::Rect(rect) => Some(rect),
            Shape::Circle(_) => None,
        }
    }

    pub fn with_drag_coefficient(self, drag_coefficient: FloatNum) -> Self {
        match self {
            Shape::Circle(circle) => circle.with_drag_coefficient(drag_coefficient).into(),
            Shape::Rect(rect) => rect.with_drag_coefficient(drag_coefficient).into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let (width, height) = self.extent();
        if !(width.is_finite() && height.is_finite() && width > 0. && height > 0.) {
            return Err(Error::InvalidShape(format!(
                "extent must be finite and positive, got {width} x {height}"
            )));
        }

        let drag_coefficient = self.drag_coefficient();
        if !(drag_coefficient.is_finite() && drag_coefficient >= 0.) {
            return Err(Error::InvalidShape(format!(
                "drag coefficient must be finite and not negative, got {drag_coefficient}"
            )));
        }

        Ok(())
    }
}

impl Geometry for Shape {
    fn frontal_area(&self) -> FloatNum {
        match self {
            Shape::Circle(circle) => circle.frontal_area(),
            Shape::Rect(rect) => rect.frontal_area(),
        }
    }

    fn drag_coefficient(&self) -> FloatNum {
        match self {
            Shape::Circle(circle) => circle.drag_coefficient(),
            Shape::Rect(rect) => rect.drag_coefficient(),
        }
    }

    fn extent(&self) -> (FloatNum, FloatNum) {
        match self {
            Shape::Circle(circle) => circle.extent(),
            Shape::Rect(rect) => rect.extent(),
        }
    }
}

impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Shape::Circle(value)
    }
}

impl From<Rect> for Shape {
    fn from(value: Rect) -> Self {
        Shape::Rect(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(Shape::circle(1.).validate().is_ok());
        assert!(matches!(
            Shape::circle(0.).validate(),
            Err(Error::InvalidShape(_))
        ));
        assert!(matches!(
            Shape::rect(1., -2.).validate(),
            Err(Error::InvalidShape(_))
        ));
        assert!(matches!(
            Shape::rect(1., 1.).with_drag_coefficient(-0.1).validate(),
            Err(Error::InvalidShape(_))
        ));
        assert!(matches!(
            Shape::circle(FloatNum::NAN).validate(),
            Err(Error::InvalidShape(_))
        ));
    }

    #[test]
    fn test_projection_on_axis() {
        let rect = Shape::rect(4., 2.);
        let center = Position::new(10., 20.);
        assert_eq!(rect.projection_on_axis(&center, AxisDirection::X), (8., 12.));
        assert_eq!(rect.projection_on_axis(&center, AxisDirection::Y), (19., 21.));

        let circle = Shape::circle(0.5);
        assert_eq!(
            circle.projection_on_axis(&center, AxisDirection::Y),
            (19.5, 20.5)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_shape_serde() {
        let shape: Shape = serde_json::from_str(r#"{ "type": "circle", "radius": 0.5 }"#).unwrap();
        assert_eq!(shape, Shape::circle(0.5));

        let shape: Shape = serde_json::from_str(
            r#"{ "type": "rect", "width": 2.0, "height": 1.0, "drag_coefficient": 0.8 }"#,
        )
        .unwrap();
        assert_eq!(shape, Shape::rect(2., 1.).with_drag_coefficient(0.8));
    }
}
