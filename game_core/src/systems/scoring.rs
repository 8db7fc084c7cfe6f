use crate::{Ball, Config, Events, Paddle};
use hecs::World;

/// Check if ball left the playfield (scoring)
///
/// The side that scores is read from the ball's heading: a ball travelling
/// left was missed by the left paddle.
pub fn check_scoring(world: &mut World, config: &Config, events: &mut Events) {
    let mut scorer = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.right() < 0.0 || ball.rect.left() > config.width {
            let side: u8 = if ball.vel.x < 0.0 { 1 } else { 0 };
            scorer = Some(side);
            ball.reset(config.center());
        }
    }

    let Some(side) = scorer else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.score += 1;
            log::debug!("Paddle {} scores, now at {}", side, paddle.score);
        }
    }

    if side == 0 {
        events.left_scored = true;
    } else {
        events.right_scored = true;
    }
}
