mod fonts;

pub use fonts::load_hangul_font;

use macroquad::prelude::*;
use crate::application::{GameConfig, GameState, Glow, Highlight};
use crate::domain::Board;

const TILE_COLOR: Color = Color::new(235.0 / 255.0, 235.0 / 255.0, 235.0 / 255.0, 1.0);
const CORRECT_COLOR: Color = Color::new(100.0 / 255.0, 1.0, 120.0 / 255.0, 1.0);
const WRONG_COLOR: Color = Color::new(1.0, 100.0 / 255.0, 100.0 / 255.0, 1.0);
const TARGET_COLOR: Color = Color::new(0.0, 80.0 / 255.0, 200.0 / 255.0, 1.0);
const TIMER_COLOR: Color = Color::new(200.0 / 255.0, 0.0, 0.0, 1.0);
const PRAISE_COLOR: Color = Color::new(20.0 / 255.0, 150.0 / 255.0, 20.0 / 255.0, 1.0);

/// Draw text with its top-left corner at (x, y)
fn draw_label(text: &str, x: f32, y: f32, size: u16, color: Color, font: Option<&Font>) {
    let dims = measure_text(text, font, size, 1.0);
    draw_text_ex(
        text,
        x,
        y + dims.offset_y,
        TextParams {
            font,
            font_size: size,
            color,
            ..Default::default()
        },
    );
}

/// Draw text horizontally centred on `center_x`
fn draw_centered(text: &str, center_x: f32, y: f32, size: u16, color: Color, font: Option<&Font>) {
    let dims = measure_text(text, font, size, 1.0);
    draw_label(text, center_x - dims.width / 2.0, y, size, color, font);
}

/// Title, target word, score and countdown
pub fn draw_header(state: &GameState, font: Option<&Font>) {
    let config = &state.config;
    let width = config.window_width();
    let size = config.font_size;

    let labels = [
        ("한글 조합 게임".to_owned(), 20.0, 12.0, BLACK),
        (format!("제시어: {}", state.target), 20.0, 60.0, TARGET_COLOR),
        (format!("점수: {}", state.score), width - 200.0, 12.0, BLACK),
        (format!("남은시간: {}s", state.time_left()), width - 260.0, 60.0, TIMER_COLOR),
    ];

    labels.iter().for_each(|(text, x, y, color)| {
        draw_label(text, *x, *y, size, *color, font);
    });
}

/// Praise banner after a completed word
pub fn draw_praise(state: &GameState, font: Option<&Font>) {
    if let Some(praise) = state.praise {
        let config = &state.config;
        let center = config.window_width() / 2.0;
        draw_centered(praise, center, 150.0, config.big_font_size, PRAISE_COLOR, font);
    }
}

/// Draw the letter tiles, lighting the last clicked one
pub fn draw_board(
    board: &Board,
    highlight: Option<Highlight>,
    config: &GameConfig,
    font: Option<&Font>,
) {
    let cell = config.cell_size;

    for (x, y, letter) in board.iter_cells() {
        let left = x as f32 * cell;
        let top = y as f32 * cell + config.top_offset;

        let color = match highlight {
            Some(h) if (h.x, h.y) == (x, y) => match h.glow {
                Glow::Correct => CORRECT_COLOR,
                Glow::Wrong => WRONG_COLOR,
            },
            _ => TILE_COLOR,
        };

        draw_rectangle(left, top, cell, cell, color);
        draw_rectangle_lines(left, top, cell, cell, 2.0, BLACK);

        let text = letter.to_string();
        let dims = measure_text(&text, font, config.font_size, 1.0);
        draw_label(
            &text,
            left + (cell - dims.width) / 2.0,
            top + (cell - dims.height) / 2.0,
            config.font_size,
            BLACK,
            font,
        );
    }
}

/// One full frame of the running game
pub fn draw_frame(state: &GameState, font: Option<&Font>) {
    clear_background(WHITE);
    draw_header(state, font);
    draw_praise(state, font);
    draw_board(&state.board, state.highlight, &state.config, font);
}

/// Final score screen
pub fn draw_end_screen(config: &GameConfig, score: u32, font: Option<&Font>) {
    clear_background(WHITE);
    let text = format!("게임 종료! 점수: {score}");
    let (center_x, center_y) = (config.window_width() / 2.0, config.window_height() / 2.0);
    draw_centered(&text, center_x, center_y, config.font_size, BLACK, font);
}
