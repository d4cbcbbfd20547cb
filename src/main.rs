use macroquad::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use hangul_grid::{
    GameConfig, GameState,
    application::FramePacer,
    rendering, input,
};

fn window_conf() -> Conf {
    let config = GameConfig::default();
    Conf {
        window_title: "Hangul Grid Game".to_owned(),
        window_width: config.window_width() as i32,
        window_height: config.window_height() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GameConfig::from_env().unwrap_or_else(|e| {
        warn!("ignoring environment overrides: {e:#}");
        GameConfig::default()
    });
    info!(?config, "starting");

    let font = rendering::load_hangul_font(&config).await;
    let mut state = GameState::new(config);
    let mut pacer = FramePacer::new(state.config.target_fps, get_time());

    prevent_quit();

    while !state.is_over() {
        if input::quit_requested() {
            info!(score = state.score, "quit requested");
            return;
        }

        state = state.tick(get_frame_time());
        state = input::process_click(state);

        rendering::draw_frame(&state, font.as_ref());

        pacer.wait(get_time());
        next_frame().await;
    }

    info!(score = state.score, "game over");
    let shown_since = get_time();
    while get_time() - shown_since < state.config.end_screen_seconds as f64 {
        if input::quit_requested() {
            break;
        }
        rendering::draw_end_screen(&state.config, state.score, font.as_ref());
        next_frame().await;
    }
}
