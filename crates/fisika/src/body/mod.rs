pub(crate) mod store;

use derive_builder::Builder;

use crate::{
    errors::{Error, Result},
    math::{FloatNum, Force, Momentum, Position, Velocity},
    meta::{
        force::{AccelerationGroup, ForceGroup},
        Mass,
    },
    shape::{Geometry, Shape},
};

pub type ID = u32;

/// Rigid body simulated by the world.
///
/// Bodies are created through [`BodyBuilder`], the world assigns the id when the body
/// is added. A fixed body has infinite mass and is always at rest, integration and
/// collision response never touch its position.
///
/// ```
/// use fisika::prelude::*;
///
/// let ball = BodyBuilder::default()
///     .shape(Shape::circle(0.5))
///     .mass(2.)
///     .position((1., 1.))
///     .build()
///     .unwrap();
/// assert_eq!(ball.mass(), 2.);
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(
    pattern = "owned",
    build_fn(private, name = "fallible_build", error = "Error")
)]
pub struct Body {
    #[builder(setter(skip))]
    id: ID,
    #[builder(setter(custom), default)]
    mass: Mass,
    #[builder(setter(into))]
    shape: Shape,
    #[builder(setter(into), default)]
    position: Position,
    #[builder(setter(into), default)]
    velocity: Velocity,
    #[builder(default)]
    is_fixed: bool,
    #[builder(default)]
    forces: ForceGroup,
    #[builder(default)]
    accelerations: AccelerationGroup,
    #[builder(setter(skip))]
    contact_count: u16,
    #[builder(setter(skip))]
    is_grounded: bool,
}

impl BodyBuilder {
    pub fn mass(mut self, mass: FloatNum) -> Self {
        self.mass = Some(Mass::unchecked(mass));
        self
    }

    pub fn build(self) -> Result<Body> {
        let mut body = self.fallible_build()?;

        body.shape.validate()?;

        if body.is_fixed {
            body.mass = Mass::infinite();
            body.velocity = Velocity::zero();
        } else {
            body.mass = Mass::new(body.mass.value())?;
        }

        Ok(body)
    }
}

/// Axis aligned bounding box, y grows downward so `top < bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub left: FloatNum,
    pub top: FloatNum,
    pub right: FloatNum,
    pub bottom: FloatNum,
}

impl Aabb {
    pub fn from_center(center: &Position, shape: &impl Geometry) -> Self {
        let half = shape.half_extent();
        Self {
            left: center.x() - half.x(),
            top: center.y() - half.y(),
            right: center.x() + half.x(),
            bottom: center.y() + half.y(),
        }
    }

    pub fn width(&self) -> FloatNum {
        self.right - self.left
    }

    pub fn height(&self) -> FloatNum {
        self.bottom - self.top
    }

    // top left, top right, bottom right, bottom left
    pub fn corners(&self) -> [Position; 4] {
        [
            Position::new(self.left, self.top),
            Position::new(self.right, self.top),
            Position::new(self.right, self.bottom),
            Position::new(self.left, self.bottom),
        ]
    }

    /// Overlap on the x and y axis, `None` unless the boxes overlap strictly on both.
    pub fn overlap(&self, other: &Aabb) -> Option<(FloatNum, FloatNum)> {
        let x = self.right.min(other.right) - self.left.max(other.left);
        let y = self.bottom.min(other.bottom) - self.top.max(other.top);
        (x > 0. && y > 0.).then_some((x, y))
    }
}

impl Body {
    #[inline]
    pub fn id(&self) -> ID {
        self.id
    }

    pub(crate) fn inject_id(&mut self, id: ID) {
        self.id = id;
    }

    /// mass of the body, infinite for a fixed body
    #[inline]
    pub fn mass(&self) -> FloatNum {
        self.mass.value()
    }

    #[inline]
    pub fn inv_mass(&self) -> FloatNum {
        self.mass.inv()
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn set_position(&mut self, position: impl Into<Position>) -> &mut Self {
        self.position = position.into();
        self
    }

    #[inline]
    pub fn velocity(&self) -> &Velocity {
        &self.velocity
    }

    /// A fixed body stays at rest, its velocity is always zero.
    pub fn set_velocity(&mut self, velocity: impl Into<Velocity>) -> &mut Self {
        self.velocity = if self.is_fixed {
            Velocity::zero()
        } else {
            velocity.into()
        };
        self
    }

    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.is_fixed
    }

    pub fn forces(&self) -> &ForceGroup {
        &self.forces
    }

    pub fn forces_mut(&mut self) -> &mut ForceGroup {
        &mut self.forces
    }

    pub fn accelerations(&self) -> &AccelerationGroup {
        &self.accelerations
    }

    pub fn accelerations_mut(&mut self) -> &mut AccelerationGroup {
        &mut self.accelerations
    }

    /// number of contacts found in the last collision pass
    pub fn contact_count(&self) -> u16 {
        self.contact_count
    }

    /// whether the body rested on top of a fixed rect in the last collision pass
    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    pub(crate) fn reset_contacts(&mut self) {
        self.contact_count = 0;
        self.is_grounded = false;
    }

    pub(crate) fn record_contact(&mut self) {
        self.contact_count = self.contact_count.saturating_add(1);
    }

    pub(crate) fn mark_grounded(&mut self) {
        self.is_grounded = true;
    }

    /// Drag opposing the motion, `-0.5 * ρ * Cd * A * |v|² * v̂`.
    pub fn drag(&self, density: FloatNum) -> Force {
        let factor = -0.5 * density * self.shape.drag_coefficient() * self.shape.frontal_area();
        (self.velocity.power(2.) * factor).retag()
    }

    pub fn kinetic_energy(&self) -> FloatNum {
        if self.is_fixed {
            return 0.;
        }
        0.5 * self.mass() * self.velocity.magnitude_squared()
    }

    pub fn momentum(&self) -> Momentum {
        if self.is_fixed {
            return Momentum::zero();
        }
        self.velocity.momentum(self.mass())
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(&self.position, &self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::num::is_approx_eq;

    fn ball() -> BodyBuilder {
        BodyBuilder::default().shape(Shape::circle(1.)).mass(2.)
    }

    #[test]
    fn test_build_body() {
        let body = ball().position((3., 4.)).velocity((1., 0.)).build().unwrap();
        assert_eq!(body.id(), 0);
        assert_eq!(body.mass(), 2.);
        assert_eq!(body.inv_mass(), 0.5);
        assert_eq!(body.position(), &Position::new(3., 4.));
        assert_eq!(body.velocity(), &Velocity::new(1., 0.));
        assert!(!body.is_fixed());
        assert!(!body.is_grounded());
        assert_eq!(body.contact_count(), 0);
    }

    #[test]
    fn test_build_invalid_body() {
        let missing_shape = BodyBuilder::default().mass(1.).build();
        assert!(matches!(missing_shape, Err(Error::Builder(_))));

        let zero_mass = ball().mass(0.).build();
        assert!(matches!(zero_mass, Err(Error::InvalidMass { mass }) if mass == 0.));

        let negative_mass = ball().mass(-3.).build();
        assert!(matches!(negative_mass, Err(Error::InvalidMass { .. })));

        let bad_shape = BodyBuilder::default().shape(Shape::rect(0., 1.)).build();
        assert!(matches!(bad_shape, Err(Error::InvalidShape(_))));
    }

    #[test]
    fn test_fixed_body_has_infinite_mass() {
        // mass of a fixed body is ignored
        let ground = BodyBuilder::default()
            .shape(Shape::rect(10., 1.))
            .mass(0.)
            .is_fixed(true)
            .velocity((1., 1.))
            .build()
            .unwrap();
        assert!(ground.mass().is_infinite());
        assert_eq!(ground.inv_mass(), 0.);
        assert!(ground.velocity().is_zero());
        assert_eq!(ground.kinetic_energy(), 0.);
        assert!(ground.momentum().is_zero());
    }

    #[test]
    fn test_fixed_body_stays_at_rest() {
        let mut ground = BodyBuilder::default()
            .shape(Shape::rect(10., 1.))
            .is_fixed(true)
            .build()
            .unwrap();
        ground.set_velocity((3., 0.));
        assert!(ground.velocity().is_zero());

        let mut body = ball().build().unwrap();
        body.set_velocity((3., 0.));
        assert_eq!(body.velocity(), &Velocity::new(3., 0.));
    }

    #[test]
    fn test_drag() {
        let body = ball().velocity((2., 0.)).build().unwrap();
        let drag = body.drag(1.2);
        // 0.5 * 1.2 * 0.47 * π * 4
        let expected = 0.5 * 1.2 * 0.47 * std::f64::consts::PI * 4.;
        assert!(is_approx_eq(drag.x(), -expected, 1e-9));
        assert_eq!(drag.y(), 0.);

        let resting = ball().build().unwrap();
        assert!(resting.drag(1.2).is_zero());
        assert!(body.drag(0.).is_zero());
    }

    #[test]
    fn test_energy_and_momentum() {
        let body = ball().velocity((3., -4.)).build().unwrap();
        assert_eq!(body.kinetic_energy(), 25.);
        assert_eq!(body.momentum(), Momentum::new(6., -8.));
    }

    #[test]
    fn test_aabb() {
        let body = BodyBuilder::default()
            .shape(Shape::rect(4., 2.))
            .position((10., 5.))
            .build()
            .unwrap();
        let aabb = body.aabb();
        assert_eq!(aabb.left, 8.);
        assert_eq!(aabb.top, 4.);
        assert_eq!(aabb.right, 12.);
        assert_eq!(aabb.bottom, 6.);
        assert_eq!((aabb.width(), aabb.height()), (4., 2.));
        assert_eq!(aabb.corners()[2], Position::new(12., 6.));

        let other = Aabb {
            left: 11.,
            top: 5.5,
            right: 20.,
            bottom: 10.,
        };
        assert_eq!(aabb.overlap(&other), Some((1., 0.5)));

        // touching edges do not overlap
        let touching = Aabb {
            left: 12.,
            ..other
        };
        assert_eq!(aabb.overlap(&touching), None);
    }
}
