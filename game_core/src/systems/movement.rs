use crate::{Ball, Paddle, Time};
use hecs::World;

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.rect.pos += ball.vel * time.dt;
    }
}

/// Right paddle follows the ball's height exactly
pub fn track_ball(world: &mut World) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.rect.pos.y)
    };

    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == 1 {
            paddle.rect.pos.y = ball_y;
        }
    }
}

/// Recompute each paddle's vertical velocity from how far it moved since
/// the previous update
pub fn derive_paddle_velocity(world: &mut World, time: &Time) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.vel.y = (paddle.rect.pos.y - paddle.last_pos.y) / time.dt;
        paddle.last_pos.y = paddle.rect.pos.y;
    }
}
