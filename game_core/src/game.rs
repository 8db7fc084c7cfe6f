use crate::fsm::{GameAction, GameFsm};
use crate::render::{render, Frame, GlyphSet};
use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, FrameClock, GameRng, InputQueue,
    Paddle, Score, Time,
};
use hecs::World;

/// A whole local match: simulation state plus the frame driver around it
pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub events: Events,
    pub input: InputQueue,
    pub rng: GameRng,
    pub fsm: GameFsm,
    pub clock: FrameClock,
    pub glyphs: GlyphSet,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();

        // Create paddles
        create_paddle(&mut world, 0, &config);
        create_paddle(&mut world, 1, &config);

        // Create ball, resting at the centre until served
        create_ball(&mut world, &config);

        let glyphs = GlyphSet::new(config.glyph_block);

        Self {
            world,
            time: Time::default(),
            config,
            events: Events::new(),
            input: InputQueue::new(),
            rng: GameRng::new(seed),
            fsm: GameFsm::new(),
            clock: FrameClock::new(),
            glyphs,
        }
    }

    /// Begin accepting frames. Returns false if already running.
    pub fn start(&mut self) -> bool {
        self.fsm.transition(GameAction::Start).success
    }

    /// Advance one display frame stamped `now_ms`.
    ///
    /// Returns true if the simulation stepped; the caller should then draw
    /// and react to [`Game::events`].
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self.fsm.is_running() {
            return false;
        }

        let Some(dt) = self.clock.tick(now_ms) else {
            return false;
        };

        self.update(dt);
        true
    }

    /// Run the physics for `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
        );
    }

    /// Pointer moved to `y` within the playfield
    pub fn pointer_moved(&mut self, y: f32) {
        self.input.push_pointer(y);
    }

    /// Player asked for a serve
    pub fn request_serve(&mut self) {
        self.input.request_serve();
    }

    pub fn render(&self) -> Frame {
        render(&self.world, &self.config, &self.glyphs)
    }

    pub fn score(&self) -> Score {
        let mut score = Score::new();
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            if paddle.side == 0 {
                score.left = paddle.score;
            } else {
                score.right = paddle.score;
            }
        }
        score
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: u8) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }
}
