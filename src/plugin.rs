//! `PongPlugin` wires the match state machine into the Bevy schedules.
//!
//! ## Systems
//!
//! | System                       | Schedule      | Purpose                                  |
//! |------------------------------|---------------|------------------------------------------|
//! | `load_settings_system`       | `Startup`     | Read settings, create [`Match`], set tick rate |
//! | `setup_camera`               | `Startup`     | UI camera                                |
//! | `load_game_assets`           | `Startup`     | Optional font and button icons           |
//! | `collect_input_system`       | `PreUpdate`   | Queue window input as `InputEvent`s      |
//! | `advance_match_system`       | `FixedUpdate` | Drain queued input, run one tick         |
//! | `persist_on_quit_system`     | `Update`      | Save settings and exit after a quit      |
//! | `sync_draw_list_system`      | `Update`      | Repaint from the match's draw list       |

use std::path::PathBuf;

use bevy::prelude::*;

use crate::config;
use crate::game::Match;
use crate::graphics::{self, GameFont, IconImages};
use crate::input::{self, PendingInput};
use crate::rendering;

/// Where settings are read from at startup and written to on quit.
#[derive(Resource, Debug, Clone)]
pub struct SettingsPath(pub PathBuf);

impl Default for SettingsPath {
    fn default() -> Self {
        Self(config::settings_path())
    }
}

pub struct PongPlugin;

impl Plugin for PongPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SettingsPath>()
            .init_resource::<PendingInput>()
            .init_resource::<GameFont>()
            .init_resource::<IconImages>()
            .add_systems(
                Startup,
                (
                    load_settings_system,
                    graphics::setup_camera,
                    graphics::load_game_assets,
                ),
            )
            .add_systems(PreUpdate, input::collect_input_system)
            .add_systems(FixedUpdate, advance_match_system)
            .add_systems(
                Update,
                (
                    persist_on_quit_system,
                    rendering::sync_draw_list_system,
                ),
            );
    }
}

/// Startup system: load settings, start the match and set the fixed tick
/// rate to the configured FPS.
pub fn load_settings_system(
    mut commands: Commands,
    path: Res<SettingsPath>,
    mut time: ResMut<Time<Fixed>>,
) {
    let settings = config::load_or_default(&path.0);
    time.set_timestep_hz(f64::from(settings.fps));
    info!("Ticking at {} Hz", settings.fps);
    commands.insert_resource(Match::new(settings));
}

/// Drain every queued input event in order, then advance one tick.
pub fn advance_match_system(mut pending: ResMut<PendingInput>, mut game: ResMut<Match>) {
    for event in pending.drain() {
        game.handle_event(event);
    }
    game.tick();
}

/// Once the match has seen a quit event: write settings, then exit.
///
/// A failed write is logged and does not keep the game open.
pub fn persist_on_quit_system(
    game: Res<Match>,
    path: Res<SettingsPath>,
    mut exit: MessageWriter<AppExit>,
    mut done: Local<bool>,
) {
    if *done || !game.quit_requested() {
        return;
    }
    *done = true;
    match config::save(&path.0, game.settings()) {
        Ok(()) => info!("Saved settings to {}", path.0.display()),
        Err(err) => error!("{err}"),
    }
    exit.write(AppExit::Success);
}
