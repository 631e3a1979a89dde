use std::path::PathBuf;

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;

use crate::button::Icon;
use crate::constants::{COG_ICON_ASSET, FONT_ASSET, RESET_ICON_ASSET};

/// Game font resource holding the pixel font handle.
///
/// All text references `font.0.clone()`.  When the font file is missing the
/// handle stays at its default, which Bevy resolves to its built-in font.
#[derive(Resource, Default)]
pub struct GameFont(pub Handle<Font>);

/// Button images, loaded only when the files are present under `assets/`.
#[derive(Resource, Default)]
pub struct IconImages {
    pub cog: Option<Handle<Image>>,
    pub reset: Option<Handle<Image>>,
}

impl IconImages {
    pub fn get(&self, icon: Icon) -> Option<&Handle<Image>> {
        match icon {
            Icon::Cog => self.cog.as_ref(),
            Icon::Reset => self.reset.as_ref(),
        }
    }
}

/// On-disk location the default asset source reads `relative` from.
pub fn asset_path(relative: &str) -> PathBuf {
    FileAssetReader::get_base_path().join("assets").join(relative)
}

fn asset_exists(relative: &str) -> bool {
    asset_path(relative).exists()
}

/// Load the pixel font and button icons at startup.
///
/// Must run before the first frame is drawn.
pub fn load_game_assets(
    mut font: ResMut<GameFont>,
    mut icons: ResMut<IconImages>,
    asset_server: Res<AssetServer>,
) {
    if asset_exists(FONT_ASSET) {
        font.0 = asset_server.load(FONT_ASSET);
        info!("Game font loaded");
    } else {
        info!(
            "No {}; using the built-in font",
            asset_path(FONT_ASSET).display()
        );
    }
    if asset_exists(COG_ICON_ASSET) {
        icons.cog = Some(asset_server.load(COG_ICON_ASSET));
    }
    if asset_exists(RESET_ICON_ASSET) {
        icons.reset = Some(asset_server.load(RESET_ICON_ASSET));
    }
}

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("Camera spawned");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_resolve_against_the_asset_root() {
        let path = asset_path(FONT_ASSET);
        assert!(path.starts_with(FileAssetReader::get_base_path().join("assets")));
        assert!(path.ends_with("fonts/Pixeboy.ttf"));
    }
}
