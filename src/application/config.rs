//! Game configuration: layout, pacing, fonts and randomness.
//!
//! Defaults reproduce the classic layout. A few knobs can be overridden from
//! the environment for play-testing.

use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::env::VarError;
use crate::domain::{Placement, GRID_SIZE};

pub const ENV_SEED: &str = "HANGUL_GRID_SEED";
pub const ENV_FONT: &str = "HANGUL_GRID_FONT";
pub const ENV_SECONDS: &str = "HANGUL_GRID_SECONDS";
pub const ENV_PLACEMENT: &str = "HANGUL_GRID_PLACEMENT";

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Pixel size of one tile
    pub cell_size: f32,
    /// Header band above the board
    pub top_offset: f32,
    pub target_fps: u32,
    /// Total playing time in whole seconds
    pub game_seconds: u32,
    pub font_size: u16,
    pub big_font_size: u16,
    /// Font tried first
    pub font_path: String,
    /// Fonts tried in order when the primary one fails to load
    pub fallback_font_paths: Vec<String>,
    /// Fixed seed for reproducible boards (None = seeded from entropy)
    pub seed: Option<u64>,
    pub placement: Placement,
    /// Seconds the end screen stays up
    pub end_screen_seconds: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 120.0,
            top_offset: 260.0,
            target_fps: 30,
            game_seconds: 60,
            font_size: 44,
            big_font_size: 60,
            font_path: "C:/Windows/Fonts/malgun.ttf".to_owned(),
            fallback_font_paths: vec![
                "/usr/share/fonts/truetype/nanum/NanumGothic.ttf".to_owned(),
                "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".to_owned(),
                "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc".to_owned(),
                "/System/Library/Fonts/Supplemental/AppleGothic.ttf".to_owned(),
            ],
            seed: None,
            placement: Placement::Overwrite,
            end_screen_seconds: 2.5,
        }
    }
}

/// Unset variables are absent; anything else unreadable is an error
fn env_value(key: &str, value: Result<String, VarError>) -> Result<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("{key} is not valid Unicode")),
    }
}

impl GameConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self> {
        let mut vars = HashMap::new();
        for key in [ENV_SEED, ENV_FONT, ENV_SECONDS, ENV_PLACEMENT] {
            if let Some(value) = env_value(key, std::env::var(key))? {
                vars.insert(key, value);
            }
        }
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Build from an arbitrary key lookup (testable without touching the process env)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw.trim().parse::<u64>()
                .with_context(|| format!("{ENV_SEED} must be an unsigned integer, got {raw:?}"))?;
            config.seed = Some(seed);
        }

        if let Some(path) = lookup(ENV_FONT) {
            let path = path.trim();
            if !path.is_empty() {
                // The configured font goes first; the old primary becomes a fallback
                let previous = std::mem::replace(&mut config.font_path, path.to_owned());
                config.fallback_font_paths.insert(0, previous);
            }
        }

        if let Some(raw) = lookup(ENV_SECONDS) {
            let seconds = raw.trim().parse::<u32>()
                .with_context(|| format!("{ENV_SECONDS} must be a whole number of seconds, got {raw:?}"))?;
            if seconds == 0 {
                return Err(anyhow!("{ENV_SECONDS} must be greater than zero"));
            }
            config.game_seconds = seconds;
        }

        if let Some(raw) = lookup(ENV_PLACEMENT) {
            config.placement = Placement::all()
                .into_iter()
                .find(|p| p.name().eq_ignore_ascii_case(raw.trim()))
                .ok_or_else(|| anyhow!("{ENV_PLACEMENT} must be 'overwrite' or 'reserved', got {raw:?}"))?;
        }

        Ok(config)
    }

    pub fn window_width(&self) -> f32 {
        self.cell_size * GRID_SIZE as f32
    }

    pub fn window_height(&self) -> f32 {
        self.cell_size * GRID_SIZE as f32 + self.top_offset
    }

    /// Font candidates in load order
    pub fn font_candidates(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.font_path.as_str())
            .chain(self.fallback_font_paths.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_layout() {
        let config = GameConfig::default();
        assert_eq!(config.window_width(), 600.0);
        assert_eq!(config.window_height(), 860.0);
        assert_eq!(config.game_seconds, 60);
        assert_eq!(config.placement, Placement::Overwrite);
    }

    #[test]
    fn test_empty_env_gives_defaults() {
        assert_eq!(GameConfig::from_lookup(lookup(&[])).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::from_lookup(lookup(&[
            (ENV_SEED, "1234"),
            (ENV_SECONDS, "30"),
            (ENV_PLACEMENT, "Reserved"),
            (ENV_FONT, "/tmp/font.ttf"),
        ])).unwrap();
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.game_seconds, 30);
        assert_eq!(config.placement, Placement::Reserved);
        let fonts: Vec<&str> = config.font_candidates().collect();
        assert_eq!(fonts[0], "/tmp/font.ttf");
        assert_eq!(fonts[1], "C:/Windows/Fonts/malgun.ttf");
    }

    #[test]
    fn test_env_value_only_treats_missing_as_unset() {
        assert_eq!(env_value(ENV_SEED, Ok("7".to_owned())).unwrap(), Some("7".to_owned()));
        assert_eq!(env_value(ENV_SEED, Err(VarError::NotPresent)).unwrap(), None);

        let err = env_value(ENV_FONT, Err(VarError::NotUnicode(OsString::from("font"))))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_FONT));
    }

    #[test]
    fn test_bad_values_are_errors() {
        assert!(GameConfig::from_lookup(lookup(&[(ENV_SEED, "abc")])).is_err());
        assert!(GameConfig::from_lookup(lookup(&[(ENV_SECONDS, "0")])).is_err());
        assert!(GameConfig::from_lookup(lookup(&[(ENV_PLACEMENT, "random")])).is_err());
    }
}
