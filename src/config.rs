//! Player-adjustable settings persisted to `gamedata/config.json`.
//!
//! [`Settings`] mirrors the defaults in [`crate::constants`].  At startup
//! [`load_or_default`] reads the JSON file; a missing file silently yields the
//! defaults, and a malformed one is rejected as a whole (logged, then
//! defaults) so the game never runs on a half-initialised configuration.
//! The settings menu mutates the values in place through the `cycle_*`
//! methods and [`save`] writes the whole file back when the game quits.
//!
//! ## File format
//!
//! ```json
//! {"FPS":60,"ballVel":10,"pVel":6,"p1Color":[255,255,255],
//!  "p2Color":[255,255,255],"ballColor":[139,69,19]}
//! ```
//!
//! Set `PONG_SETTINGS` to read and write a different file.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::body::Rgb;
use crate::constants::*;
use crate::error::{PongError, PongResult};

/// Persisted game settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Fixed tick rate.  Everything moves a constant distance per tick, so
    /// this also scales the overall game speed.
    #[serde(rename = "FPS")]
    pub fps: u32,
    /// Ball speed in pixels per tick, applied to both axes.
    #[serde(rename = "ballVel")]
    pub ball_speed: i32,
    /// Paddle speed in pixels per tick.
    #[serde(rename = "pVel")]
    pub paddle_speed: i32,
    #[serde(rename = "p1Color")]
    pub p1_color: Rgb,
    #[serde(rename = "p2Color")]
    pub p2_color: Rgb,
    #[serde(rename = "ballColor")]
    pub ball_color: Rgb,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            ball_speed: DEFAULT_BALL_SPEED,
            paddle_speed: DEFAULT_PADDLE_SPEED,
            p1_color: WHITE,
            p2_color: WHITE,
            ball_color: BROWN,
        }
    }
}

impl Settings {
    /// Ball speed: anything above 15 wraps to 3, otherwise +1.
    pub fn cycle_ball_speed(&mut self) {
        self.ball_speed = cycle_speed(self.ball_speed, BALL_SPEED_WRAP);
    }

    /// Paddle speed: anything above 12 wraps to 3, otherwise +1.
    pub fn cycle_paddle_speed(&mut self) {
        self.paddle_speed = cycle_speed(self.paddle_speed, PADDLE_SPEED_WRAP);
    }

    pub fn cycle_p1_color(&mut self) {
        self.p1_color = next_palette_color(self.p1_color);
    }

    pub fn cycle_p2_color(&mut self) {
        self.p2_color = next_palette_color(self.p2_color);
    }

    pub fn cycle_ball_color(&mut self) {
        self.ball_color = next_palette_color(self.ball_color);
    }

    /// Reject values the simulation cannot run with.
    ///
    /// Colours are deliberately not checked against [`PALETTE`]: any RGB
    /// triple renders fine, and cycling from an unknown colour restarts at
    /// the first palette entry.
    pub fn validate(&self) -> PongResult<()> {
        if self.fps == 0 || self.fps > 1000 {
            return Err(PongError::InvalidSetting {
                key: "FPS",
                value: i64::from(self.fps),
                expected: "1..=1000",
            });
        }
        check_speed("ballVel", self.ball_speed, BALL_SPEED_WRAP, "3..=16")?;
        check_speed("pVel", self.paddle_speed, PADDLE_SPEED_WRAP, "3..=13")?;
        Ok(())
    }
}

/// Speeds must lie on the cycle the settings menu walks: `SPEED_MIN` up to
/// one past the wrap threshold.
fn check_speed(
    key: &'static str,
    value: i32,
    wrap_above: i32,
    expected: &'static str,
) -> PongResult<()> {
    if (SPEED_MIN..=wrap_above + 1).contains(&value) {
        Ok(())
    } else {
        Err(PongError::InvalidSetting {
            key,
            value: i64::from(value),
            expected,
        })
    }
}

fn cycle_speed(current: i32, wrap_above: i32) -> i32 {
    if current > wrap_above {
        SPEED_MIN
    } else {
        current + 1
    }
}

/// The palette entry after `current`; the last entry (or a colour that is not
/// in the palette at all) wraps to the first.
pub fn next_palette_color(current: Rgb) -> Rgb {
    match PALETTE.iter().position(|c| *c == current) {
        Some(i) if i + 1 < PALETTE.len() => PALETTE[i + 1],
        _ => PALETTE[0],
    }
}

/// Settings file location: `$PONG_SETTINGS` if set, else
/// `gamedata/config.json` under the game's base directory.
pub fn settings_path() -> PathBuf {
    std::env::var_os(SETTINGS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(default_settings_path)
}

/// `gamedata/config.json` next to the game, resolved against the same base
/// directory Bevy's asset server uses rather than the working directory.
pub fn default_settings_path() -> PathBuf {
    FileAssetReader::get_base_path().join(DEFAULT_SETTINGS_PATH)
}

/// Read settings from `path`.
///
/// Returns `Ok(None)` when the file does not exist.  Every key must be
/// present; a partial file is an error rather than a mix of file values and
/// defaults.
pub fn load(path: &Path) -> PongResult<Option<Settings>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).map_err(|source| PongError::SettingsRead {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings =
        serde_json::from_str(&contents).map_err(|source| PongError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
    settings.validate()?;
    Ok(Some(settings))
}

/// Load settings, falling back to defaults when the file is missing or bad.
pub fn load_or_default(path: &Path) -> Settings {
    match load(path) {
        Ok(Some(settings)) => {
            info!("Loaded settings from {}", path.display());
            settings
        }
        Ok(None) => {
            info!("No {} found; using default settings", path.display());
            Settings::default()
        }
        Err(err) => {
            warn!("{err}; using default settings");
            Settings::default()
        }
    }
}

/// Write the whole settings file, creating its parent directory if needed.
pub fn save(path: &Path, settings: &Settings) -> PongResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| PongError::SettingsWrite {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string(settings).map_err(PongError::SettingsSerialize)?;
    fs::write(path, json).map_err(|source| PongError::SettingsWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("pong-config-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn ball_speed_above_wrap_resets_to_minimum() {
        let mut settings = Settings {
            ball_speed: 16,
            ..Settings::default()
        };
        settings.cycle_ball_speed();
        assert_eq!(settings.ball_speed, 3);
    }

    #[test]
    fn ball_speed_at_wrap_still_increments() {
        let mut settings = Settings {
            ball_speed: 15,
            ..Settings::default()
        };
        settings.cycle_ball_speed();
        assert_eq!(settings.ball_speed, 16);
    }

    #[test]
    fn paddle_speed_wraps_after_thirteen() {
        let mut settings = Settings {
            paddle_speed: 12,
            ..Settings::default()
        };
        settings.cycle_paddle_speed();
        assert_eq!(settings.paddle_speed, 13);
        settings.cycle_paddle_speed();
        assert_eq!(settings.paddle_speed, 3);
    }

    #[test]
    fn last_palette_color_cycles_to_first() {
        let mut settings = Settings {
            p2_color: BLUE,
            ..Settings::default()
        };
        settings.cycle_p2_color();
        assert_eq!(settings.p2_color, WHITE);
    }

    #[test]
    fn palette_cycle_visits_every_color_in_order() {
        let mut color = PALETTE[0];
        for expected in PALETTE.iter().skip(1) {
            color = next_palette_color(color);
            assert_eq!(color, *expected);
        }
    }

    #[test]
    fn unknown_color_cycles_to_first_palette_entry() {
        let mut settings = Settings::default();
        assert_eq!(settings.ball_color, BROWN);
        settings.cycle_ball_color();
        assert_eq!(settings.ball_color, PALETTE[0]);
    }

    #[test]
    fn json_uses_legacy_key_names() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["FPS"], 60);
        assert_eq!(json["ballVel"], 10);
        assert_eq!(json["pVel"], 6);
        assert_eq!(json["ballColor"], serde_json::json!([139, 69, 19]));
    }

    #[test]
    fn save_then_load_reproduces_settings() {
        let path = temp_path("roundtrip/config.json");
        let settings = Settings {
            fps: 75,
            ball_speed: 14,
            paddle_speed: 9,
            p1_color: PINK,
            p2_color: GREEN,
            ball_color: RED,
        };
        save(&path, &settings).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, Some(settings));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let path = temp_path("does-not-exist.json");
        assert!(load(&path).unwrap().is_none());
        assert_eq!(load_or_default(&path), Settings::default());
    }

    #[test]
    fn partial_file_is_rejected_whole() {
        let path = temp_path("partial.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"FPS":30,"ballVel":12}"#).unwrap();
        assert!(matches!(load(&path), Err(PongError::SettingsParse { .. })));
        assert_eq!(load_or_default(&path), Settings::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn zero_speed_is_rejected() {
        let path = temp_path("zero-speed.json");
        let settings = Settings {
            paddle_speed: 0,
            ..Settings::default()
        };
        save(&path, &settings).unwrap();
        assert!(matches!(
            load(&path),
            Err(PongError::InvalidSetting { key: "pVel", .. })
        ));
        let _ = fs::remove_file(&path);
    }

    fn write_with_ball_speed(name: &str, ball_speed: i32) -> PathBuf {
        let path = temp_path(name);
        let settings = Settings {
            ball_speed,
            ..Settings::default()
        };
        save(&path, &settings).unwrap();
        path
    }

    #[test]
    fn ball_speed_past_the_cycle_is_rejected() {
        let path = write_with_ball_speed("ball-speed-17.json", 17);
        assert!(matches!(
            load(&path),
            Err(PongError::InvalidSetting { key: "ballVel", value: 17, .. })
        ));
        assert_eq!(load_or_default(&path), Settings::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn ball_speed_below_minimum_is_rejected() {
        let path = write_with_ball_speed("ball-speed-2.json", 2);
        assert!(matches!(
            load(&path),
            Err(PongError::InvalidSetting { key: "ballVel", value: 2, .. })
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn speeds_at_the_ends_of_the_cycle_load() {
        let path = temp_path("speed-bounds.json");
        let settings = Settings {
            ball_speed: BALL_SPEED_WRAP + 1,
            paddle_speed: SPEED_MIN,
            ..Settings::default()
        };
        save(&path, &settings).unwrap();
        assert_eq!(load(&path).unwrap(), Some(settings));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn runaway_paddle_speed_is_rejected() {
        let path = temp_path("paddle-speed-900.json");
        let settings = Settings {
            paddle_speed: 900,
            ..Settings::default()
        };
        save(&path, &settings).unwrap();
        assert!(matches!(
            load(&path),
            Err(PongError::InvalidSetting { key: "pVel", .. })
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn default_path_is_anchored_to_the_base_directory() {
        let path = default_settings_path();
        assert!(path.starts_with(FileAssetReader::get_base_path()));
        assert!(path.ends_with(DEFAULT_SETTINGS_PATH));
    }
}
