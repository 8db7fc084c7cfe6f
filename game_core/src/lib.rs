pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod math;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::Game;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one Pong simulation step of `time.dt` seconds
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (pointer position, serve requests)
    ingest_inputs(world, input, rng, config);

    // 2. Move ball
    move_ball(world, time);

    // 3. Ball left the playfield: score and reset
    check_scoring(world, config, events);

    // 4. Top/bottom walls
    check_wall_collision(world, config, events);

    // 5. Right paddle follows the ball
    track_ball(world);

    // 6. Paddle velocities, then ball vs paddles
    derive_paddle_velocity(world, time);
    check_paddle_collisions(world, config, events);

    // Update time
    time.now += time.dt;
}

/// Helper to create a paddle entity, vertically centred beside its wall
pub fn create_paddle(world: &mut World, side: u8, config: &Config) -> hecs::Entity {
    let pos = glam::Vec2::new(config.paddle_x(side), config.height / 2.0);
    world.spawn((Paddle::new(side, pos, config.paddle_size),))
}

/// Helper to create the ball entity, at rest in the centre
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(config.center(), config.ball_size, glam::Vec2::ZERO),))
}
