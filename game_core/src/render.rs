//! Render step: turns the game state into a list of filled rectangles
//!
//! Nothing here touches a display. The client draws the resulting [`Frame`]
//! however it likes; tests inspect it directly.

use crate::{Ball, Config, Paddle, Rect};
use hecs::World;

/// Digits 0-9 as 3x5 block patterns, read left to right, top to bottom,
/// most significant of the 15 bits first.
pub const DIGIT_PATTERNS: [u16; 10] = [
    0b111_101_101_101_111,
    0b010_010_010_010_010,
    0b111_001_111_100_111,
    0b111_001_111_001_111,
    0b101_101_111_001_001,
    0b111_100_111_001_111,
    0b111_100_111_101_111,
    0b111_001_001_001_001,
    0b111_101_111_101_111,
    0b111_101_111_001_111,
];

pub const GLYPH_COLUMNS: usize = 3;
pub const GLYPH_ROWS: usize = 5;

/// Filled rectangle in playfield pixels, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl DrawRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

impl From<&Rect> for DrawRect {
    fn from(rect: &Rect) -> Self {
        Self::new(rect.left(), rect.top(), rect.size.x, rect.size.y)
    }
}

/// One pre-rendered digit: its lit blocks relative to the glyph origin
#[derive(Debug, Clone)]
pub struct Glyph {
    pub cells: Vec<DrawRect>,
}

impl Glyph {
    pub fn from_pattern(pattern: u16, block: f32) -> Self {
        let total = GLYPH_COLUMNS * GLYPH_ROWS;
        let cells = (0..total)
            .filter(|i| pattern & (1 << (total - 1 - i)) != 0)
            .map(|i| {
                let col = (i % GLYPH_COLUMNS) as f32;
                let row = (i / GLYPH_COLUMNS) as f32;
                DrawRect::new(col * block, row * block, block, block)
            })
            .collect();
        Self { cells }
    }
}

/// The ten digit glyphs, built once at startup
#[derive(Debug, Clone)]
pub struct GlyphSet {
    pub block: f32,
    glyphs: Vec<Glyph>,
}

impl GlyphSet {
    pub fn new(block: f32) -> Self {
        let glyphs = DIGIT_PATTERNS
            .iter()
            .map(|pattern| Glyph::from_pattern(*pattern, block))
            .collect();
        Self { block, glyphs }
    }

    /// Glyph for a single decimal digit
    pub fn digit(&self, digit: u32) -> Option<&Glyph> {
        self.glyphs.get(digit as usize)
    }

    /// Horizontal distance between neighbouring glyphs: three blocks of
    /// glyph and one of spacing
    pub fn advance(&self) -> f32 {
        self.block * (GLYPH_COLUMNS + 1) as f32
    }
}

/// Everything to draw for one display frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub rects: Vec<DrawRect>,
}

/// Build the draw list for the current state: ball, paddles, then scores
pub fn render(world: &World, config: &Config, glyphs: &GlyphSet) -> Frame {
    let mut rects = Vec::new();

    for (_e, ball) in world.query::<&Ball>().iter() {
        rects.push(DrawRect::from(&ball.rect));
    }

    let mut paddles: Vec<(u8, Rect, u32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.rect, p.score))
        .collect();
    paddles.sort_by_key(|(side, _, _)| *side);

    for (_side, rect, _score) in &paddles {
        rects.push(DrawRect::from(rect));
    }

    for (side, _rect, score) in &paddles {
        push_score(&mut rects, *side, *score, config, glyphs);
    }

    Frame {
        width: config.width,
        height: config.height,
        rects,
    }
}

/// Lay out a score centred on its third of the playfield
fn push_score(rects: &mut Vec<DrawRect>, side: u8, score: u32, config: &Config, glyphs: &GlyphSet) {
    let digits: Vec<u32> = score
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    let align = config.width / 3.0;
    let advance = glyphs.advance();
    let start = align * (side as f32 + 1.0) - advance * digits.len() as f32 / 2.0 + glyphs.block / 2.0;

    for (pos, digit) in digits.iter().enumerate() {
        let Some(glyph) = glyphs.digit(*digit) else {
            continue;
        };
        let x = start + pos as f32 * advance;
        rects.extend(glyph.cells.iter().map(|cell| cell.offset(x, config.score_top)));
    }
}
