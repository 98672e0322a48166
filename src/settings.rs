//! User settings and preferences
//!
//! Persisted as JSON next to the binary. Any read or parse failure falls
//! back to defaults - settings are never worth crashing over.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which of the two games to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    #[default]
    Breakout,
    Skiing,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Breakout => "Breakout",
            Variant::Skiing => "Skiing",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakout" | "bricks" => Some(Variant::Breakout),
            "skiing" | "ski" => Some(Variant::Skiing),
            _ => None,
        }
    }

    /// Fixed tick rate for this variant
    pub fn fps(&self) -> u32 {
        match self {
            Variant::Breakout => BREAKOUT_FPS,
            Variant::Skiing => SKI_FPS,
        }
    }

    /// Logical screen height for this variant
    pub fn screen_height(&self) -> f32 {
        match self {
            Variant::Breakout => BREAKOUT_SCREEN_HEIGHT,
            Variant::Skiing => SKI_SCREEN_HEIGHT,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which game to launch
    pub variant: Variant,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === HUD ===
    /// Show tick-rate counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::Breakout,
            master_volume: 0.8,
            sfx_volume: 1.0,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Default settings file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "ceiling-break-settings.json";

    /// Load from `path`, defaulting on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file unreadable ({err}); using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file; using defaults");
                Self::default()
            }
        }
    }

    /// Save to `path`. Failure is logged, not propagated.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("could not save settings: {err}");
                } else {
                    log::info!("settings saved to {}", path.display());
                }
            }
            Err(err) => log::warn!("could not serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.variant, Variant::Breakout);
        assert_eq!(s.master_volume, 0.8);
        assert!(!s.show_fps);
    }

    #[test]
    fn test_variant_parameters() {
        assert_eq!(Variant::Breakout.fps(), 15);
        assert_eq!(Variant::Breakout.screen_height(), 700.0);
        assert_eq!(Variant::Skiing.fps(), 30);
        assert_eq!(Variant::Skiing.screen_height(), 800.0);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(Variant::from_str("breakout"), Some(Variant::Breakout));
        assert_eq!(Variant::from_str("SKI"), Some(Variant::Skiing));
        assert_eq!(Variant::from_str("pinball"), None);
    }

    #[test]
    fn test_json_round_trip() {
        let mut s = Settings::default();
        s.variant = Variant::Skiing;
        s.sfx_volume = 0.5;
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let back: Settings = serde_json::from_str(r#"{"variant":"Skiing"}"#).unwrap();
        assert_eq!(back.variant, Variant::Skiing);
        assert_eq!(back.master_volume, 0.8);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let s = Settings::load(Path::new("/definitely/not/here.json"));
        assert_eq!(s, Settings::default());
    }
}
