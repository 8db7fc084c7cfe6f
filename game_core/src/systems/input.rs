use crate::math::SetLength;
use crate::{Ball, Config, GameRng, InputQueue, Paddle};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// Apply queued pointer and serve input
pub fn ingest_inputs(world: &mut World, input: &mut InputQueue, rng: &mut GameRng, config: &Config) {
    if let Some(y) = input.pointer_y {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == 0 {
                paddle.rect.pos.y = y;
            }
        }
    }

    if input.serve {
        serve(world, rng, config);
    }

    input.clear();
}

/// Launch a resting ball in a random direction at the initial speed.
///
/// Returns false and leaves the ball alone if it is already moving.
pub fn serve(world: &mut World, rng: &mut GameRng, config: &Config) -> bool {
    let mut served = false;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.is_at_rest() {
            continue;
        }

        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vel = Vec2::new(
            config.serve_component * dir,
            config.serve_component * rng.0.gen_range(-1.0..=1.0f32),
        );
        ball.vel = vel.with_length(config.ball_speed_initial);
        served = true;
        log::debug!("Serve: ball velocity {:?}", ball.vel);
    }
    served
}
