use fisika::prelude::*;

#[path = "../examples_common.rs"]
mod common;

// two balls falling against a constant wind, drag slows them towards terminal speed
fn main() -> Result<()> {
    common::init_tracing();

    let config = WorldConfigBuilder::default().time_step(0.02).build()?;
    let mut world = World::new(config)?;

    world
        .global_accelerations_mut()
        .insert("gravity", (0., 9.81));
    world.global_forces_mut().insert("wind", (-10., 0.));

    world.add_body(
        BodyBuilder::default()
            .shape(Shape::circle(0.5))
            .mass(4.)
            .position((3., 1.))
            .build()?,
    )?;
    world.add_body(
        BodyBuilder::default()
            .shape(Shape::circle(0.75))
            .mass(14.)
            .position((9., 1.))
            .build()?,
    )?;

    common::Runner::new(250).run(&mut world);

    Ok(())
}
