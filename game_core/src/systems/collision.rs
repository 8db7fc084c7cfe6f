use crate::math::SetLength;
use crate::{Ball, Config, Events, Paddle, Rect};
use glam::Vec2;
use hecs::World;

/// Reflect the ball off the top and bottom walls
pub fn check_wall_collision(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hits_top = ball.vel.y < 0.0 && ball.rect.top() < 0.0;
        let hits_bottom = ball.vel.y > 0.0 && ball.rect.bottom() > config.height;
        if hits_top || hits_bottom {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off any paddle it overlaps, left paddle first.
///
/// There is no contact memory: a ball still inside a paddle on the next
/// update is bounced again.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<(u8, Rect, Vec2)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.rect, p.vel))
        .collect();
    paddles.sort_by_key(|(side, _, _)| *side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for (_side, rect, paddle_vel) in &paddles {
            if rect.overlaps(&ball.rect) {
                bounce(ball, *paddle_vel, config);
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Send the ball back faster, with spin taken from the paddle's motion.
///
/// Spin bends the direction only: speed after the horizontal boost is kept.
fn bounce(ball: &mut Ball, paddle_vel: Vec2, config: &Config) {
    ball.vel.x = -ball.vel.x * config.ball_speed_increase;
    let speed = ball.vel.length();
    ball.vel.y += paddle_vel.y * config.spin_factor;
    ball.vel.set_length(speed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, Events};

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::default(), Events::new())
    }

    fn place_ball(world: &mut World, ball: hecs::Entity, pos: Vec2, vel: Vec2) {
        let mut ball = world.get::<&mut Ball>(ball).unwrap();
        ball.rect.pos = pos;
        ball.vel = vel;
    }

    fn ball_vel(world: &World, ball: hecs::Entity) -> Vec2 {
        world.get::<&Ball>(ball).unwrap().vel
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        let ball = create_ball(&mut world, &config);
        // top edge at -1
        let half = config.ball_size.y / 2.0;
        place_ball(&mut world, ball, Vec2::new(400.0, half - 1.0), Vec2::new(80.0, -50.0));

        check_wall_collision(&mut world, &config, &mut events);

        assert_eq!(ball_vel(&world, ball), Vec2::new(80.0, 50.0));
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        let ball = create_ball(&mut world, &config);
        let half = config.ball_size.y / 2.0;
        place_ball(
            &mut world,
            ball,
            Vec2::new(400.0, config.height - half + 2.0),
            Vec2::new(-80.0, 40.0),
        );

        check_wall_collision(&mut world, &config, &mut events);

        assert_eq!(ball_vel(&world, ball), Vec2::new(-80.0, -40.0));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_leaving_wall_is_not_reflected_again() {
        let (mut world, config, mut events) = setup_world();
        let ball = create_ball(&mut world, &config);
        // Past the top edge but already heading down
        place_ball(&mut world, ball, Vec2::new(400.0, 0.0), Vec2::new(0.0, 50.0));

        check_wall_collision(&mut world, &config, &mut events);

        assert_eq!(ball_vel(&world, ball), Vec2::new(0.0, 50.0));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_still_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, 0, &config);
        let ball = create_ball(&mut world, &config);
        place_ball(
            &mut world,
            ball,
            Vec2::new(config.paddle_x(0) + 5.0, 300.0),
            Vec2::new(-100.0, 0.0),
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        let vel = ball_vel(&world, ball);
        assert!((vel.x - 105.0).abs() < 1e-3, "Got {vel:?}");
        assert!(vel.y.abs() < 1e-6);
        assert!(events.ball_hit_paddle, "Should trigger ball_hit_paddle event");
    }

    #[test]
    fn test_paddle_spin_bends_but_keeps_speed() {
        let (mut world, config, mut events) = setup_world();
        let paddle = create_paddle(&mut world, 1, &config);
        world.get::<&mut Paddle>(paddle).unwrap().vel.y = 500.0;
        let ball = create_ball(&mut world, &config);
        place_ball(
            &mut world,
            ball,
            Vec2::new(config.paddle_x(1) - 5.0, 300.0),
            Vec2::new(300.0, 400.0),
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        let vel = ball_vel(&world, ball);
        let boosted = Vec2::new(-315.0, 400.0).length();
        assert!((vel.length() - boosted).abs() < 1e-2);
        assert!(vel.x < 0.0, "Ball heads back left");
        // Downward spin steepens the descent
        assert!(vel.y / vel.x.abs() > 400.0 / 315.0);
    }

    #[test]
    fn test_no_collision_when_apart() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, 0, &config);
        create_paddle(&mut world, 1, &config);
        let ball = create_ball(&mut world, &config);
        place_ball(&mut world, ball, config.center(), Vec2::new(-100.0, 20.0));

        check_paddle_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_vel(&world, ball), Vec2::new(-100.0, 20.0));
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_touching_edge_is_not_a_hit() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, 0, &config);
        let ball = create_ball(&mut world, &config);
        let gap = (config.paddle_size.x + config.ball_size.x) / 2.0;
        place_ball(
            &mut world,
            ball,
            Vec2::new(config.paddle_x(0) + gap, 300.0),
            Vec2::new(-100.0, 0.0),
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_overlap_retriggers_every_update() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, 0, &config);
        let ball = create_ball(&mut world, &config);
        place_ball(
            &mut world,
            ball,
            Vec2::new(config.paddle_x(0), 300.0),
            Vec2::new(-100.0, 0.0),
        );

        check_paddle_collisions(&mut world, &config, &mut events);
        check_paddle_collisions(&mut world, &config, &mut events);

        let vel = ball_vel(&world, ball);
        assert!(
            (vel.x - (-100.0 * 1.05 * 1.05)).abs() < 1e-2,
            "Second overlap bounces the ball again, got {vel:?}"
        );
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, 0, &config);

        check_paddle_collisions(&mut world, &config, &mut events);
        check_wall_collision(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
