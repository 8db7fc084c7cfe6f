/// Game tuning parameters for Pong
///
/// Sizes are fractions of the playfield scale (the shorter of width and
/// height), so the game looks the same on any viewport.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield used when no viewport size is known
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH_SCALE: f32 = 0.04;
    pub const PADDLE_HEIGHT_SCALE: f32 = 0.2;
    pub const PADDLE_INSET: f32 = 40.0; // px from side wall to paddle centre

    // Ball
    pub const BALL_SIZE_SCALE: f32 = 0.04;
    pub const BALL_SPEED_INITIAL: f32 = 600.0; // px per second
    pub const SERVE_COMPONENT: f32 = 200.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // horizontal boost on paddle hit
    pub const SPIN_FACTOR: f32 = 0.2; // share of paddle velocity given to the ball

    // Score glyphs
    pub const GLYPH_BLOCK_SCALE: f32 = 0.025;
    pub const SCORE_TOP: f32 = 20.0;
}
