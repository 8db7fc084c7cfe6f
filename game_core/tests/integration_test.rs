use game_core::fsm::FsmState;
use game_core::*;
use glam::Vec2;

fn running_game() -> Game {
    let mut game = Game::new(Config::new(800.0, 600.0), 42);
    assert!(game.start());
    game
}

fn set_ball(game: &mut Game, pos: Vec2, vel: Vec2) {
    for (_e, ball) in game.world.query_mut::<&mut Ball>() {
        ball.rect.pos = pos;
        ball.vel = vel;
    }
}

#[test]
fn test_frames_ignored_until_started() {
    let mut game = Game::new(Config::default(), 1);
    assert_eq!(game.fsm.state(), FsmState::Idle);

    assert!(!game.frame(0.0));
    assert!(!game.frame(16.0));
    assert_eq!(game.clock.last_ms(), None, "Idle frames are not timed");

    assert!(game.start());
    assert!(!game.start(), "Already running");
    assert_eq!(game.fsm.state(), FsmState::Running);
}

#[test]
fn test_first_frame_only_records_time() {
    let mut game = running_game();
    set_ball(&mut game, Vec2::new(400.0, 300.0), Vec2::new(300.0, 0.0));

    assert!(!game.frame(1234.0));

    let ball = game.ball().unwrap();
    assert_eq!(ball.rect.pos, Vec2::new(400.0, 300.0));
    assert_eq!(game.clock.last_ms(), Some(1234.0));
}

#[test]
fn test_frame_integrates_ball_position() {
    let mut game = running_game();
    let vel = Vec2::new(250.0, -125.0);
    set_ball(&mut game, Vec2::new(400.0, 300.0), vel);

    game.frame(1000.0);
    assert!(game.frame(1020.0));

    let ball = game.ball().unwrap();
    let expected = Vec2::new(400.0, 300.0) + vel * 0.02;
    assert!((ball.rect.pos - expected).length() < 1e-3);
    assert!((game.time.now - 0.02).abs() < 1e-6);
}

#[test]
fn test_serve_then_frame_moves_ball() {
    let mut game = running_game();
    game.frame(0.0);
    game.request_serve();
    game.frame(16.0);

    let ball = game.ball().unwrap();
    assert!((ball.vel.length() - 600.0).abs() < 1e-2);
    assert!(ball.rect.pos != Vec2::new(400.0, 300.0));
}

#[test]
fn test_serve_twice_keeps_velocity() {
    let mut game = running_game();
    game.frame(0.0);
    game.request_serve();
    game.frame(16.0);
    let first = game.ball().unwrap().vel;

    game.request_serve();
    game.frame(32.0);

    let second = game.ball().unwrap().vel;
    assert_eq!(first, second, "Serving a moving ball does nothing");
}

#[test]
fn test_right_scores_and_ball_resets() {
    let mut game = running_game();
    game.frame(0.0);
    // Right edge at -1 after a 16 ms step; well clear of the left paddle
    set_ball(&mut game, Vec2::new(-13.0 + 4.8, 500.0), Vec2::new(-300.0, 0.0));

    game.frame(16.0);

    assert_eq!(game.score(), Score { left: 0, right: 1 });
    assert!(game.events.right_scored);
    let ball = game.ball().unwrap();
    assert_eq!(ball.rect.pos, Vec2::new(400.0, 300.0));
    assert!(ball.is_at_rest());

    // Nothing more happens until the next serve
    game.frame(32.0);
    assert_eq!(game.score(), Score { left: 0, right: 1 });
    assert!(!game.events.any());
}

#[test]
fn test_wall_reflection_through_update() {
    let mut game = running_game();
    // top edge at -1 once moved, heading up and away from both paddles
    set_ball(&mut game, Vec2::new(400.0, 11.0 + 0.5), Vec2::new(0.0, -50.0));

    game.update(0.01);

    let ball = game.ball().unwrap();
    assert_eq!(ball.vel, Vec2::new(0.0, 50.0));
    assert!(game.events.ball_hit_wall);
}

#[test]
fn test_right_paddle_follows_ball() {
    let mut game = running_game();
    set_ball(&mut game, Vec2::new(400.0, 150.0), Vec2::new(100.0, 100.0));

    game.update(0.1);

    let ball = game.ball().unwrap();
    let right = game.paddle(1).unwrap();
    assert_eq!(right.rect.pos.y, ball.rect.pos.y);
    assert!((right.vel.y - (160.0 - 300.0) / 0.1).abs() < 1e-2);
}

#[test]
fn test_pointer_spin_on_left_paddle() {
    let mut game = running_game();
    // Ball about to reach the left paddle
    set_ball(&mut game, Vec2::new(60.0, 300.0), Vec2::new(-400.0, 0.0));

    // Paddle swept down 20 px during a 20 ms frame
    game.pointer_moved(320.0);
    game.update(0.02);

    let ball = game.ball().unwrap();
    let left = game.paddle(0).unwrap();
    assert_eq!(left.rect.pos.y, 320.0);
    assert!((left.vel.y - 1000.0).abs() < 1e-2);
    assert!(game.events.ball_hit_paddle);
    assert!(ball.vel.x > 0.0, "Ball returned to the right");
    assert!(ball.vel.y > 0.0, "Downward sweep puts downward spin on the ball");
    assert!((ball.vel.length() - 420.0).abs() < 1e-1);
}

#[test]
fn test_render_reflects_state() {
    let mut game = running_game();
    for (_e, paddle) in game.world.query_mut::<&mut Paddle>() {
        if paddle.side == 0 {
            paddle.score = 10;
        }
    }

    let frame = game.render();

    // ball + 2 paddles + "10" + "0"
    let one = render::DIGIT_PATTERNS[1].count_ones() as usize;
    let zero = render::DIGIT_PATTERNS[0].count_ones() as usize;
    assert_eq!(frame.rects.len(), 3 + one + zero + zero);
    assert_eq!(frame.width, game.config.width);
}

#[test]
fn test_long_rally_keeps_scores_consistent() {
    let mut game = running_game();
    let mut now = 0.0;
    let mut previous = game.score();

    game.frame(now);
    for _ in 0..2000 {
        now += 16.0;
        game.request_serve();
        game.frame(now);

        let score = game.score();
        assert!(score.left >= previous.left && score.right >= previous.right);
        let gained = (score.left + score.right) - (previous.left + previous.right);
        assert!(gained <= 1, "At most one point per frame");
        if gained == 1 {
            assert!(game.events.left_scored || game.events.right_scored);
            assert!(game.ball().unwrap().is_at_rest(), "Point ends the rally");
        }
        previous = score;
    }
}
