pub mod jamo;
mod board;
mod words;

pub use jamo::{compose, decompose, is_syllable, POOL};
pub use board::{
    Board, Placement, ensure_components, ensure_components_reserved, GRID_SIZE, CELL_COUNT,
};
pub use words::{random_praise, random_word, PRAISE, WORDS};
