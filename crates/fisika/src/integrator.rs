//! Semi-implicit Euler integration of the bodies of a world.

use tracing::warn;

use crate::{
    body::Body,
    math::{Acceleration, FloatNum, Force},
    meta::force::{AccelerationGroup, ForceGroup},
};

/// What every movable body of a world is exposed to during one step.
#[derive(Clone, Copy, Debug, Default)]
pub struct Environment {
    pub force: Force,
    pub acceleration: Acceleration,
    pub density: FloatNum,
}

impl Environment {
    pub fn new(
        global_forces: &ForceGroup,
        global_accelerations: &AccelerationGroup,
        density: FloatNum,
    ) -> Self {
        Self {
            force: global_forces.sum(),
            acceleration: global_accelerations.sum(),
            density,
        }
    }
}

/// Advance one body by `delta_time`.
///
/// ```text
/// F  = Σ global forces + drag + Σ body forces
/// a  = F / m + Σ global accelerations + Σ body accelerations
/// v' = v + a * Δt
/// p' = p + v' * Δt
/// ```
///
/// The new velocity moves the body, not the old one. Temporary forces and accelerations
/// of the body are consumed. Fixed bodies are left as they are.
pub fn integrate(body: &mut Body, environment: &Environment, delta_time: FloatNum) {
    if body.is_fixed() {
        return;
    }

    let force = environment.force + body.drag(environment.density) + body.forces().sum();

    let acceleration = force.over_mass(body.mass())
        + environment.acceleration
        + body.accelerations().sum();

    let velocity = *body.velocity() + acceleration.velocity_change(delta_time);
    let position = *body.position() + velocity.displacement(delta_time);

    if !(velocity.is_finite() && position.is_finite()) {
        warn!(
            id = body.id(),
            %position,
            %velocity,
            delta_time,
            "integration produced a non finite state"
        );
    }

    body.set_velocity(velocity).set_position(position);

    body.forces_mut().retain_permanent();
    body.accelerations_mut().retain_permanent();
}

pub fn integrate_all<'a>(
    bodies: impl IntoIterator<Item = &'a mut Body>,
    environment: &Environment,
    delta_time: FloatNum,
) {
    bodies
        .into_iter()
        .for_each(|body| integrate(body, environment, delta_time));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        body::BodyBuilder,
        math::{num::is_approx_eq, Position, Velocity},
        meta::force::ForceEntry,
        shape::Shape,
    };

    fn gravity() -> Environment {
        Environment {
            acceleration: Acceleration::new(0., 9.81),
            ..Default::default()
        }
    }

    #[test]
    fn test_free_fall_one_step() {
        let mut body = BodyBuilder::default()
            .shape(Shape::circle(0.5))
            .mass(3.)
            .position((2., 10.))
            .build()
            .unwrap();

        integrate(&mut body, &gravity(), 0.02);

        assert!(body
            .velocity()
            .abs_diff_eq(&Velocity::new(0., 0.1962), 1e-12));
        assert!(body
            .position()
            .abs_diff_eq(&Position::new(2., 10.003924), 1e-12));
    }

    #[test]
    fn test_force_is_scaled_by_mass() {
        let mut body = BodyBuilder::default()
            .shape(Shape::rect(1., 1.))
            .mass(4.)
            .build()
            .unwrap();
        body.forces_mut().insert("push", (8., 0.));

        let environment = Environment {
            force: Force::new(0., -4.),
            ..Default::default()
        };
        integrate(&mut body, &environment, 0.5);

        // a = (2, -1)
        assert_eq!(body.velocity(), &Velocity::new(1., -0.5));
        assert_eq!(body.position(), &Position::new(0.5, -0.25));
    }

    #[test]
    fn test_temporary_force_is_consumed() {
        let mut body = BodyBuilder::default()
            .shape(Shape::circle(1.))
            .mass(1.)
            .build()
            .unwrap();
        body.forces_mut()
            .add(ForceEntry::temporary("jump", (0., -100.)));
        body.forces_mut().insert("move", (1., 0.));

        integrate(&mut body, &Environment::default(), 0.1);
        assert!(is_approx_eq(body.velocity().y(), -10., 1e-12));
        assert!(!body.forces().has("jump"));
        assert!(body.forces().has("move"));

        integrate(&mut body, &Environment::default(), 0.1);
        assert!(is_approx_eq(body.velocity().y(), -10., 1e-12));
        assert!(is_approx_eq(body.velocity().x(), 0.2, 1e-12));
    }

    #[test]
    fn test_drag_slows_down() {
        let mut body = BodyBuilder::default()
            .shape(Shape::circle(0.5))
            .mass(1.)
            .velocity((10., 0.))
            .build()
            .unwrap();
        let environment = Environment {
            density: 1.2,
            ..Default::default()
        };
        for _ in 0..10 {
            let before = body.velocity().x();
            integrate(&mut body, &environment, 0.02);
            assert!(body.velocity().x() < before);
            assert!(body.velocity().x() > 0.);
        }
    }

    #[test]
    fn test_fixed_body_is_skipped() {
        let mut ground = BodyBuilder::default()
            .shape(Shape::rect(10., 1.))
            .is_fixed(true)
            .position((5., 20.))
            .build()
            .unwrap();
        ground.forces_mut().insert("push", (100., 0.));

        integrate(&mut ground, &gravity(), 0.02);
        assert_eq!(ground.position(), &Position::new(5., 20.));
        assert!(ground.velocity().is_zero());
    }
}
