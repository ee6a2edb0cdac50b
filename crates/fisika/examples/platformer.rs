use fisika::prelude::*;

#[path = "../examples_common.rs"]
mod common;

const WIDTH: FloatNum = 16.;

const HEIGHT: FloatNum = 10.;

// a guy walking right and jumping whenever he stands on the floor
fn main() -> Result<()> {
    common::init_tracing();

    let mut world = World::new(WorldConfig::default())?;
    world
        .global_accelerations_mut()
        .insert("gravity", (0., 9.81));

    world.add_body(
        BodyBuilder::default()
            .shape(Shape::rect(WIDTH, 0.1))
            .position((WIDTH / 2., HEIGHT - 0.05))
            .is_fixed(true)
            .build()?,
    )?;

    let guy = world.add_body(
        BodyBuilder::default()
            .shape(Shape::rect(0.73, 1.86))
            .mass(85.)
            .position((2., 8.9))
            .build()?,
    )?;

    common::Runner::new(500)
        .log_every(20)
        .on_update(move |world, frame| {
            let Some(body) = world.body_mut(guy) else {
                return;
            };

            // arrow right held for the first seconds
            let walk = if frame < 300 { 10. } else { 0. };
            body.accelerations_mut().insert("move", (walk, 0.));

            // space pressed every two seconds
            if frame % 100 == 50 && body.is_grounded() {
                body.forces_mut()
                    .add(ForceEntry::temporary("jump", (0., -20000.)));
            }
        })
        .run(&mut world);

    Ok(())
}
