use macroquad::prelude::*;
use crate::application::{GameConfig, GameState};
use crate::domain::GRID_SIZE;

/// Map a pixel position to a board cell.
/// Clicks on the header band or past the board edges map to nothing.
pub fn cell_at(config: &GameConfig, mouse_x: f32, mouse_y: f32) -> Option<(usize, usize)> {
    if mouse_x < 0.0 || mouse_y < config.top_offset {
        return None;
    }

    let x = (mouse_x / config.cell_size).floor() as usize;
    let y = ((mouse_y - config.top_offset) / config.cell_size).floor() as usize;

    (x < GRID_SIZE && y < GRID_SIZE).then_some((x, y))
}

/// Feed this frame's left click, if any, to the game.
/// macroquad reports button state per frame, so two presses landing in the
/// same frame count as one click.
pub fn process_click(state: GameState) -> GameState {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return state;
    }

    let (mx, my) = mouse_position();
    match cell_at(&state.config, mx, my) {
        Some((x, y)) => state.click(x, y),
        None => state,
    }
}

/// Whether the player asked to close the window (or pressed Escape)
pub fn quit_requested() -> bool {
    is_quit_requested() || is_key_pressed(KeyCode::Escape)
}
