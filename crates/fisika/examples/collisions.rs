use fisika::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[path = "../examples_common.rs"]
mod common;

const WIDTH: FloatNum = 12.;

const HEIGHT: FloatNum = 8.;

// balls bouncing off each other and off the edges of a box
fn main() -> Result<()> {
    common::init_tracing();

    let config = WorldConfigBuilder::default()
        .time_step(0.01)
        .restitution(0.95)
        .bounds(Bounds::new(WIDTH, HEIGHT)?)
        .build()?;
    let mut world = World::new(config)?;
    world
        .global_accelerations_mut()
        .insert("gravity", (0., 9.81));

    world.add_body(
        BodyBuilder::default()
            .shape(Shape::circle(0.5))
            .mass(10.)
            .position((1., 1.))
            .velocity((4., 0.))
            .build()?,
    )?;
    world.add_body(
        BodyBuilder::default()
            .shape(Shape::circle(0.2))
            .mass(0.4)
            .position((6., 1.))
            .velocity((-4., 0.))
            .build()?,
    )?;

    // thrown in the way a mouse drag would throw them
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..4 {
        let radius = rng.gen_range(0.2..0.5);
        let mass = 4. / 3. * std::f64::consts::PI * radius * radius * radius * 4.;
        world.add_body(
            BodyBuilder::default()
                .shape(Shape::circle(radius))
                .mass(mass)
                .position((rng.gen_range(1. ..WIDTH - 1.), rng.gen_range(2. ..HEIGHT - 1.)))
                .velocity((rng.gen_range(-8. ..8.), rng.gen_range(-8. ..8.)))
                .build()?,
        )?;
    }

    common::Runner::new(1000).log_every(100).run(&mut world);

    Ok(())
}
