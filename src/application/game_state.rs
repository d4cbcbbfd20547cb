use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::application::GameConfig;
use crate::domain::{decompose, random_praise, random_word, Board, POOL};

/// Seconds a correct tile stays lit
pub const CORRECT_GLOW_SECONDS: f32 = 0.15;
/// Seconds a wrong tile stays lit
pub const WRONG_GLOW_SECONDS: f32 = 0.25;
/// Seconds the praise banner stays up
pub const PRAISE_SECONDS: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// A target is active and the clock is running
    Playing,
    /// The countdown ran out; terminal
    TimeExpired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glow {
    Correct,
    Wrong,
}

/// Tile lit up by the most recent click
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub x: usize,
    pub y: usize,
    pub glow: Glow,
}

/// GameState holds everything one round needs.
/// Each step consumes the state and returns the next one, so the loop
/// owns it outright and tests can drive it without a window.
pub struct GameState {
    pub config: GameConfig,
    rng: StdRng,
    pub target: char,
    /// Jamo of `target`, in the order they must be clicked
    pub parts: Vec<char>,
    pub board: Board,
    /// How many of `parts` have been matched so far
    pub index: usize,
    pub score: u32,
    pub phase: Phase,
    /// Seconds since the round started
    pub elapsed: f32,
    pub highlight: Option<Highlight>,
    glow_timer: f32,
    pub praise: Option<&'static str>,
    praise_timer: f32,
}

impl GameState {
    /// Start a round, seeding from the config or from entropy
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(config, rng)
    }

    /// Start a round with an explicit random source
    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let target = random_word(&mut rng);
        let parts = decompose(target);
        let board = Board::for_target(&parts, &POOL, &mut rng, config.placement);
        info!(word = %target, ?parts, "round started");

        Self {
            config,
            rng,
            target,
            parts,
            board,
            index: 0,
            score: 0,
            phase: Phase::Playing,
            elapsed: 0.0,
            highlight: None,
            glow_timer: 0.0,
            praise: None,
            praise_timer: 0.0,
        }
    }

    /// Replace the current target and board (builder pattern)
    pub fn with_target(mut self, target: char, board: Board) -> Self {
        self.target = target;
        self.parts = decompose(target);
        self.board = board;
        self.index = 0;
        self
    }

    /// Component the next click has to hit
    pub fn expected(&self) -> Option<char> {
        self.parts.get(self.index).copied()
    }

    /// Whole seconds remaining, never negative
    pub fn time_left(&self) -> u32 {
        self.config.game_seconds.saturating_sub(self.elapsed.floor() as u32)
    }

    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::TimeExpired)
    }

    /// Advance clocks by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if self.is_over() {
            return self;
        }

        self.elapsed += delta_time;
        if self.time_left() == 0 {
            info!(score = self.score, "time expired");
            self.phase = Phase::TimeExpired;
        }

        if self.glow_timer > 0.0 {
            self.glow_timer -= delta_time;
            if self.glow_timer <= 0.0 {
                self.highlight = None;
            }
        }

        if self.praise_timer > 0.0 {
            self.praise_timer -= delta_time;
            if self.praise_timer <= 0.0 {
                self.praise = None;
            }
        }

        self
    }

    /// Handle a click on column `x`, row `y`
    pub fn click(mut self, x: usize, y: usize) -> Self {
        if self.is_over() {
            return self;
        }
        let (Some(letter), Some(needed)) = (self.board.get(x, y), self.expected()) else {
            return self;
        };

        if letter == needed {
            debug!(x, y, %letter, index = self.index, "correct tile");
            self.light(x, y, Glow::Correct, CORRECT_GLOW_SECONDS);
            self.index += 1;

            if self.index >= self.parts.len() {
                self.complete_word();
            }
        } else {
            debug!(x, y, %letter, %needed, "wrong tile");
            self.light(x, y, Glow::Wrong, WRONG_GLOW_SECONDS);
            self.index = 0;
        }

        self
    }

    fn light(&mut self, x: usize, y: usize, glow: Glow, seconds: f32) {
        self.highlight = Some(Highlight { x, y, glow });
        self.glow_timer = seconds;
    }

    /// Score the finished word and deal the next one
    fn complete_word(&mut self) {
        self.score += 1;
        self.praise = Some(random_praise(&mut self.rng));
        self.praise_timer = PRAISE_SECONDS;
        info!(word = %self.target, score = self.score, "word completed");

        self.target = random_word(&mut self.rng);
        self.parts = decompose(self.target);
        self.board = Board::for_target(&self.parts, &POOL, &mut self.rng, self.config.placement);
        self.index = 0;
        debug!(word = %self.target, parts = ?self.parts, "next target");
    }
}
