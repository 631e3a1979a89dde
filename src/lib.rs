//! Two-player Pong.
//!
//! The game core (`body`, `physics`, `button`, `game`, `config`) is plain
//! Rust driven by [`game::InputEvent`]s and producing [`game::DrawCommand`]s;
//! `input`, `rendering`, `graphics` and `plugin` connect it to Bevy.

pub mod body;
pub mod button;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod graphics;
pub mod input;
pub mod physics;
pub mod plugin;
pub mod rendering;
