//! Centralised layout, palette and gameplay constants.
//!
//! All coordinates are screen pixels with the origin at the top-left corner
//! and y growing downward.  The renderer converts to Bevy world space; nothing
//! in the game core knows about that conversion.

use crate::body::Rgb;

// ── Screen ────────────────────────────────────────────────────────────────────

/// Window width in pixels.
pub const SCREEN_WIDTH: f32 = 800.0;

/// Window height in pixels.
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Height of the taskbar strip across the top of the screen.
///
/// The playfield starts directly below it; paddles and the ball are kept
/// beneath this line.
pub const TASKBAR_HEIGHT: f32 = 60.0;

// ── Paddles ───────────────────────────────────────────────────────────────────

pub const PADDLE_WIDTH: f32 = 20.0;
pub const PADDLE_HEIGHT: f32 = 100.0;

/// Left paddle x (player 1).
pub const P1_X: f32 = 40.0;

/// Right paddle x (player 2).
pub const P2_X: f32 = 740.0;

/// Both paddles start at this y at the beginning of every round.
pub const PADDLE_START_Y: f32 = 240.0;

// ── Ball ──────────────────────────────────────────────────────────────────────

pub const BALL_SIZE: f32 = 20.0;

/// Serve x when the ball starts on player 1's side (moves right).
pub const BALL_SERVE_LEFT_X: f32 = 80.0;

/// Serve x when the ball starts on player 2's side (moves left).
pub const BALL_SERVE_RIGHT_X: f32 = 700.0;

/// Serve y is drawn uniformly from `BALL_SERVE_MIN_Y..BALL_SERVE_MAX_Y`.
pub const BALL_SERVE_MIN_Y: i32 = 80;
pub const BALL_SERVE_MAX_Y: i32 = 560;

// ── Settings cycling ──────────────────────────────────────────────────────────

/// Lowest value a speed setting wraps back to.
pub const SPEED_MIN: i32 = 3;

/// Ball speed wraps to [`SPEED_MIN`] once it is *above* this value.
pub const BALL_SPEED_WRAP: i32 = 15;

/// Paddle speed wraps to [`SPEED_MIN`] once it is *above* this value.
pub const PADDLE_SPEED_WRAP: i32 = 12;

pub const DEFAULT_FPS: u32 = 60;
pub const DEFAULT_BALL_SPEED: i32 = 10;
pub const DEFAULT_PADDLE_SPEED: i32 = 6;

// ── Colours ───────────────────────────────────────────────────────────────────

pub const WHITE: Rgb = Rgb([255, 255, 255]);
pub const BLACK: Rgb = Rgb([0, 0, 0]);
pub const BROWN: Rgb = Rgb([139, 69, 19]);
pub const GRAY: Rgb = Rgb([128, 128, 128]);
pub const RED: Rgb = Rgb([255, 0, 0]);
pub const PINK: Rgb = Rgb([255, 102, 178]);
pub const GREEN: Rgb = Rgb([0, 255, 0]);
pub const BLUE: Rgb = Rgb([0, 0, 255]);

/// Colours selectable from the settings menu, in cycling order.
pub const PALETTE: [Rgb; 5] = [WHITE, RED, PINK, GREEN, BLUE];

// ── Text ──────────────────────────────────────────────────────────────────────

/// Font size for the two score counters.
pub const SCORE_FONT_SIZE: f32 = 96.0;

/// Font size for button labels and hint text.
pub const TEXT_FONT_SIZE: f32 = 30.0;

/// Inset of the score counters from the top and side edges.
pub const SCORE_MARGIN: f32 = 5.0;

// ── Files ─────────────────────────────────────────────────────────────────────

/// Settings file used when `PONG_SETTINGS` is not set.
pub const DEFAULT_SETTINGS_PATH: &str = "gamedata/config.json";

/// Environment variable overriding the settings file location.
pub const SETTINGS_PATH_ENV: &str = "PONG_SETTINGS";

/// Optional pixel font; Bevy's built-in font is used when it is missing.
pub const FONT_ASSET: &str = "fonts/Pixeboy.ttf";

pub const COG_ICON_ASSET: &str = "sprites/cog.png";
pub const RESET_ICON_ASSET: &str = "sprites/reset.png";
