mod config;
mod game_state;
mod pacer;

pub use config::GameConfig;
pub use game_state::{
    GameState, Phase, Glow, Highlight,
    CORRECT_GLOW_SECONDS, WRONG_GLOW_SECONDS, PRAISE_SECONDS,
};
pub use pacer::FramePacer;
