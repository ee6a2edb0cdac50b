pub mod config;

use tracing::{debug, trace};

use crate::{
    body::{store::BodyStore, Body, ID},
    collision::{bounds::keep_inside, resolve_collisions},
    errors::{Error, Result},
    integrator::{integrate_all, Environment},
    math::{FloatNum, Momentum, Position, Velocity},
    meta::force::{AccelerationGroup, ForceGroup},
    shape::Shape,
};

use self::config::WorldConfig;

/// Snapshot of a body, what a renderer needs to draw it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyState {
    pub id: ID,
    pub position: Position,
    pub velocity: Velocity,
    pub shape: Shape,
}

impl From<&Body> for BodyState {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id(),
            position: *body.position(),
            velocity: *body.velocity(),
            shape: body.shape().clone(),
        }
    }
}

/**
 * uuid generator
 */
#[derive(Debug, Clone)]
struct IDDispatcher {
    current_id: ID,
}

impl Default for IDDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IDDispatcher {
    const fn new() -> Self {
        Self { current_id: 0 }
    }

    // ids are never reused
    fn gen_id(&mut self) -> Result<ID> {
        self.current_id = self
            .current_id
            .checked_add(1)
            .ok_or(Error::IdExhausted)?;
        Ok(self.current_id)
    }
}

/// Owns every body and advances them in time.
///
/// A driver adds bodies, injects forces between steps and reads back the state of the
/// bodies after each step:
///
/// ```
/// use fisika::prelude::*;
///
/// let mut world = World::default();
/// world.global_accelerations_mut().insert("gravity", (0., 9.81));
///
/// let ball = BodyBuilder::default()
///     .shape(Shape::circle(0.5))
///     .mass(1.)
///     .position((1., 1.))
///     .build()
///     .unwrap();
/// let id = world.add_body(ball).unwrap();
///
/// world.tick();
/// let state = world.query_state(id).unwrap();
/// assert!(state.velocity.y() > 0.);
/// ```
#[derive(Debug, Clone, Default)]
pub struct World {
    config: WorldConfig,
    store: BodyStore,
    id_dispatcher: IDDispatcher,
    global_forces: ForceGroup,
    global_accelerations: AccelerationGroup,
    frame_count: u64,
    total_duration: FloatNum,
}

impl World {
    pub fn new(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        debug!(?config, "create world");
        Ok(Self {
            config,
            ..Default::default()
        })
    }

    pub fn with_capacity(config: WorldConfig, capacity: usize) -> Result<Self> {
        let mut world = Self::new(config)?;
        world.store = BodyStore::with_capacity(capacity);
        Ok(world)
    }

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Add a body and return the id assigned to it, ids start at 1.
    ///
    /// Fails with [`Error::IdExhausted`] once every id has been handed out.
    pub fn add_body(&mut self, mut body: Body) -> Result<ID> {
        let id = self.id_dispatcher.gen_id()?;
        body.inject_id(id);
        debug!(
            id,
            shape = ?body.shape(),
            is_fixed = body.is_fixed(),
            "add body"
        );
        self.store.push(body);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn body(&self, id: ID) -> Option<&Body> {
        self.store.get(id)
    }

    pub fn body_mut(&mut self, id: ID) -> Option<&mut Body> {
        self.store.get_mut(id)
    }

    /// bodies in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.store.iter()
    }

    pub fn bodies_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.store.iter_mut()
    }

    /// forces applied to every movable body
    pub fn global_forces(&self) -> &ForceGroup {
        &self.global_forces
    }

    pub fn global_forces_mut(&mut self) -> &mut ForceGroup {
        &mut self.global_forces
    }

    /// accelerations applied to every movable body, e.g. gravity
    pub fn global_accelerations(&self) -> &AccelerationGroup {
        &self.global_accelerations
    }

    pub fn global_accelerations_mut(&mut self) -> &mut AccelerationGroup {
        &mut self.global_accelerations
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// simulated seconds since the world was created
    #[inline]
    pub fn total_duration(&self) -> FloatNum {
        self.total_duration
    }

    /// Advance the world by `delta_time` seconds.
    ///
    /// Every movable body is integrated, then contacts between bodies are resolved and
    /// finally bodies are kept inside the bounds of the world, if any.
    ///
    /// `delta_time` must be finite and larger than zero, like
    /// [`WorldConfig::time_step`].
    pub fn step(&mut self, delta_time: FloatNum) {
        debug_assert!(
            delta_time.is_finite() && delta_time > 0.,
            "delta time must be finite and positive, got {delta_time}"
        );

        self.frame_count += 1;
        self.total_duration += delta_time;

        let environment = Environment::new(
            &self.global_forces,
            &self.global_accelerations,
            self.config.density(),
        );

        integrate_all(self.store.iter_mut(), &environment, delta_time);

        let restitution = self.config.restitution();

        let mut contact_count = resolve_collisions(self.store.as_mut_slice(), restitution);

        if let Some(bounds) = self.config.bounds() {
            contact_count += self
                .store
                .iter_mut()
                .map(|body| keep_inside(body, bounds, restitution))
                .filter(|is_hit| *is_hit)
                .count();
        }

        trace!(
            frame = self.frame_count,
            delta_time,
            contact_count,
            "step"
        );
    }

    /// Advance the world by the configured time step.
    #[inline]
    pub fn tick(&mut self) {
        self.step(self.config.time_step());
    }

    pub fn query_state(&self, id: ID) -> Result<BodyState> {
        self.body(id)
            .map(BodyState::from)
            .ok_or(Error::BodyNotFound(id))
    }

    /// Put a body back at `position` moving with `velocity`.
    pub fn reset_body(
        &mut self,
        id: ID,
        position: impl Into<Position>,
        velocity: impl Into<Velocity>,
    ) -> Result<()> {
        let body = self.body_mut(id).ok_or(Error::BodyNotFound(id))?;
        body.set_position(position).set_velocity(velocity);
        Ok(())
    }

    pub fn total_momentum(&self) -> Momentum {
        self.bodies().map(Body::momentum).sum()
    }

    pub fn total_kinetic_energy(&self) -> FloatNum {
        self.bodies().map(Body::kinetic_energy).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{body::BodyBuilder, math::num::is_approx_eq};

    fn ball(position: (FloatNum, FloatNum), velocity: (FloatNum, FloatNum)) -> Body {
        BodyBuilder::default()
            .shape(Shape::circle(0.5))
            .mass(1.)
            .position(position)
            .velocity(velocity)
            .build()
            .unwrap()
    }

    #[test]
    fn test_add_body_assigns_ids() {
        let mut world = World::default();
        assert!(world.is_empty());
        let ids: Vec<_> = (0..3)
            .map(|i| {
                world
                    .add_body(ball((i as FloatNum * 2., 0.), (0., 0.)))
                    .unwrap()
            })
            .collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(world.len(), 3);
        let stored: Vec<_> = world.bodies().map(Body::id).collect();
        assert_eq!(stored, ids);
    }

    #[test]
    fn test_add_body_runs_out_of_ids() {
        let mut world = World::default();
        world.id_dispatcher.current_id = ID::MAX - 1;
        assert_eq!(world.add_body(ball((0., 0.), (0., 0.))), Ok(ID::MAX));
        assert_eq!(
            world.add_body(ball((2., 0.), (0., 0.))),
            Err(Error::IdExhausted)
        );
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_query_state() {
        let mut world = World::default();
        let id = world.add_body(ball((1., 2.), (3., 4.))).unwrap();
        let state = world.query_state(id).unwrap();
        assert_eq!(state.id, id);
        assert_eq!(state.position, Position::new(1., 2.));
        assert_eq!(state.velocity, Velocity::new(3., 4.));
        assert_eq!(state.shape, Shape::circle(0.5));

        assert_eq!(world.query_state(42), Err(Error::BodyNotFound(42)));
    }

    #[test]
    fn test_step_counts_frames() {
        let config = config::WorldConfigBuilder::default()
            .time_step(0.01)
            .build()
            .unwrap();
        let mut world = World::new(config).unwrap();
        for _ in 0..10 {
            world.tick();
        }
        world.step(0.05);
        assert_eq!(world.frame_count(), 11);
        assert!(is_approx_eq(world.total_duration(), 0.15, 1e-12));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "delta time must be finite and positive")]
    fn test_step_rejects_invalid_delta_time() {
        let mut world = World::default();
        world.step(FloatNum::NAN);
    }

    #[test]
    fn test_reset_body() {
        let mut world = World::default();
        let id = world.add_body(ball((1., 2.), (3., 4.))).unwrap();
        world.reset_body(id, (5., 5.), (0., 0.)).unwrap();
        let body = world.body(id).unwrap();
        assert_eq!(body.position(), &Position::new(5., 5.));
        assert!(body.velocity().is_zero());
        assert!(world.reset_body(7, (0., 0.), (0., 0.)).is_err());
    }

    #[test]
    fn test_diagnostics() {
        let mut world = World::default();
        world.add_body(ball((0., 0.), (2., 0.))).unwrap();
        world.add_body(ball((5., 0.), (-1., 1.))).unwrap();
        world
            .add_body(
                BodyBuilder::default()
                    .shape(Shape::rect(1., 1.))
                    .position((10., 10.))
                    .velocity((9., 9.))
                    .is_fixed(true)
                    .build()
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(world.total_momentum(), Momentum::new(1., 1.));
        assert_eq!(world.total_kinetic_energy(), 3.);
    }
}
