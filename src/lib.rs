// Domain layer - Hangul letters and boards
pub mod domain;

// Application layer - Round state and configuration
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Board, Placement, decompose, compose, POOL};
pub use application::{GameConfig, GameState, Phase};
