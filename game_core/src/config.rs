use crate::params::Params;
use glam::Vec2;

/// Game configuration resolved for one playfield size
#[derive(Debug, Clone)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub paddle_size: Vec2,
    pub paddle_inset: f32,
    pub ball_size: Vec2,
    pub ball_speed_initial: f32,
    pub serve_component: f32,
    pub ball_speed_increase: f32,
    pub spin_factor: f32,
    pub glyph_block: f32,
    pub score_top: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Params::DEFAULT_WIDTH, Params::DEFAULT_HEIGHT)
    }
}

impl Config {
    /// Resolve sizes for a `width` x `height` playfield
    pub fn new(width: f32, height: f32) -> Self {
        let scale = width.min(height);
        Self {
            width,
            height,
            paddle_size: Vec2::new(
                scale * Params::PADDLE_WIDTH_SCALE,
                scale * Params::PADDLE_HEIGHT_SCALE,
            ),
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Vec2::splat(scale * Params::BALL_SIZE_SCALE),
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            serve_component: Params::SERVE_COMPONENT,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            spin_factor: Params::SPIN_FACTOR,
            glyph_block: scale * Params::GLYPH_BLOCK_SCALE,
            score_top: Params::SCORE_TOP,
        }
    }

    /// Shorter side of the playfield
    pub fn scale(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: u8) -> f32 {
        if side == 0 {
            self.paddle_inset // Left paddle
        } else {
            self.width - self.paddle_inset // Right paddle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new(800.0, 600.0);
        assert_eq!(config.paddle_x(0), 40.0, "Left paddle X position");
        assert_eq!(config.paddle_x(1), 760.0, "Right paddle X position");
    }

    #[test]
    fn test_sizes_follow_shorter_side() {
        let wide = Config::new(1000.0, 500.0);
        let tall = Config::new(500.0, 1000.0);
        assert_eq!(wide.scale(), 500.0);
        assert_eq!(wide.ball_size, tall.ball_size);
        assert!((wide.ball_size.x - 20.0).abs() < 1e-4);
        assert!((wide.paddle_size.y - 100.0).abs() < 1e-4);
        assert!((wide.glyph_block - 12.5).abs() < 1e-4);
    }

    #[test]
    fn test_center() {
        let config = Config::default();
        assert_eq!(config.center(), Vec2::new(400.0, 300.0));
    }
}
