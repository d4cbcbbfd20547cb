use anyhow::{anyhow, Result};
use macroquad::prelude::*;
use tracing::{info, warn};

use crate::application::GameConfig;

async fn load_font(path: &str) -> Result<Font> {
    load_ttf_font(path)
        .await
        .map_err(|e| anyhow!("failed to load font {path}: {e:?}"))
}

/// Load the first usable Hangul font.
///
/// Tries the configured font, then each fallback in turn. When nothing loads
/// the built-in font is used (`None`), which has no Hangul glyphs but keeps
/// the game running.
pub async fn load_hangul_font(config: &GameConfig) -> Option<Font> {
    for path in config.font_candidates() {
        match load_font(path).await {
            Ok(font) => {
                info!(path, "font loaded");
                return Some(font);
            }
            Err(e) => warn!("{e:#}"),
        }
    }

    warn!("no Hangul font found, using built-in font");
    None
}
