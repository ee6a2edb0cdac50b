#![allow(dead_code)]

use fisika::prelude::*;
use tracing::info;

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

type UpdateFn = dyn FnMut(&mut World, u64);

/// Headless stand in for a render loop, ticks the world and logs what a renderer
/// would draw.
pub struct Runner {
    frames: u64,
    log_every: u64,
    on_update: Option<Box<UpdateFn>>,
}

impl Runner {
    pub fn new(frames: u64) -> Self {
        Self {
            frames,
            log_every: 25,
            on_update: None,
        }
    }

    pub fn log_every(mut self, log_every: u64) -> Self {
        self.log_every = log_every.max(1);
        self
    }

    // called before every tick, this is where a driver injects input
    pub fn on_update(mut self, on_update: impl FnMut(&mut World, u64) + 'static) -> Self {
        self.on_update = Some(Box::new(on_update));
        self
    }

    pub fn run(mut self, world: &mut World) {
        for frame in 0..self.frames {
            if let Some(on_update) = self.on_update.as_mut() {
                on_update(world, frame);
            }

            world.tick();

            if frame % self.log_every == 0 {
                draw(world);
            }
        }

        info!(
            frames = world.frame_count(),
            seconds = world.total_duration(),
            energy = world.total_kinetic_energy(),
            momentum = %world.total_momentum(),
            "done"
        );
    }
}

fn draw(world: &World) {
    for body in world.bodies().filter(|body| !body.is_fixed()) {
        let Ok(BodyState {
            id,
            position,
            velocity,
            shape,
        }) = world.query_state(body.id())
        else {
            continue;
        };
        let shape = match shape {
            Shape::Circle(circle) => format!("circle r={}", circle.radius()),
            Shape::Rect(rect) => format!("rect {}x{}", rect.width(), rect.height()),
        };
        info!(
            frame = world.frame_count(),
            id,
            %position,
            %velocity,
            %shape,
            grounded = body.is_grounded()
        );
    }
}
