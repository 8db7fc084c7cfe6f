use glam::Vec2;

/// Axis-aligned rectangle positioned by its centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Strict overlap test: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self {
            rect: Rect::new(pos, size),
            vel,
        }
    }

    /// Put the ball back at `center`, at rest
    pub fn reset(&mut self, center: Vec2) {
        self.rect.pos = center;
        self.vel = Vec2::ZERO;
    }

    pub fn is_at_rest(&self) -> bool {
        self.vel.x == 0.0 && self.vel.y == 0.0
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: u8, // 0 = left, 1 = right
    pub rect: Rect,
    pub vel: Vec2, // derived from movement, see `derive_paddle_velocity`
    pub score: u32,
    pub last_pos: Vec2,
}

impl Paddle {
    pub fn new(side: u8, pos: Vec2, size: Vec2) -> Self {
        Self {
            side,
            rect: Rect::new(pos, size),
            vel: Vec2::ZERO,
            score: 0,
            last_pos: pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(Vec2::new(100.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(rect.left(), 90.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.top(), 45.0);
        assert_eq!(rect.bottom(), 55.0);
    }

    #[test]
    fn test_touching_rects_do_not_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));

        let c = Rect::new(Vec2::new(9.9, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_ball_reset() {
        let mut ball = Ball::new(
            Vec2::new(5.0, 5.0),
            Vec2::splat(24.0),
            Vec2::new(300.0, -20.0),
        );
        assert!(!ball.is_at_rest());
        ball.reset(Vec2::new(400.0, 300.0));
        assert_eq!(ball.rect.pos, Vec2::new(400.0, 300.0));
        assert!(ball.is_at_rest());
    }

    #[test]
    fn test_new_paddle_is_still() {
        let paddle = Paddle::new(1, Vec2::new(760.0, 300.0), Vec2::new(24.0, 120.0));
        assert_eq!(paddle.vel, Vec2::ZERO);
        assert_eq!(paddle.last_pos, paddle.rect.pos);
        assert_eq!(paddle.score, 0);
    }
}
