/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Delta time for this step, seconds
    pub now: f32, // Total simulated time, seconds
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// Turns display frame timestamps into simulation deltas
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp (milliseconds) and return seconds elapsed
    /// since the previous one.
    ///
    /// The first frame has nothing to measure against and yields `None`, as
    /// does a timestamp that did not move forward.
    pub fn tick(&mut self, now_ms: f64) -> Option<f32> {
        let last = self.last_ms.replace(now_ms)?;
        let dt = ((now_ms - last) / 1000.0) as f32;
        (dt > 0.0).then_some(dt)
    }

    pub fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for paddle `side`
    pub fn get(&self, side: u8) -> u32 {
        if side == 0 {
            self.left
        } else {
            self.right
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this update
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn any(&self) -> bool {
        self.left_scored || self.right_scored || self.ball_hit_paddle || self.ball_hit_wall
    }
}

/// Pointer and serve input waiting for the next update
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub pointer_y: Option<f32>, // latest pointer position wins
    pub serve: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_pointer(&mut self, y: f32) {
        self.pointer_y = Some(y);
    }

    pub fn request_serve(&mut self) {
        self.serve = true;
    }

    pub fn clear(&mut self) {
        self.pointer_y = None;
        self.serve = false;
    }

    pub fn is_empty(&self) -> bool {
        self.pointer_y.is_none() && !self.serve
    }
}
