use bevy::prelude::*;
use bevy::window::WindowResolution;

use pong::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use pong::plugin::PongPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Pong!".into(),
                resolution: WindowResolution::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
                resizable: false,
                ..Default::default()
            }),
            // Closing is routed through the match so settings get saved first.
            close_when_requested: false,
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(PongPlugin)
        .run();
}
