//! Paints the match's draw list with Bevy UI nodes.
//!
//! Draw commands are already in screen pixels with a top-left origin, which
//! is exactly the absolute-positioning space of `Node`, so no world-space
//! conversion is needed.  The whole screen is rebuilt whenever the [`Match`]
//! resource changes; each command gets its own root node with a rising
//! [`ZIndex`] so later commands paint over earlier ones.

use bevy::prelude::*;

use crate::constants::SCREEN_WIDTH;
use crate::game::{DrawCommand, Match, TextAnchor};
use crate::graphics::{GameFont, IconImages};

/// Centred text is laid out inside an invisible box of this size whose
/// middle sits on the requested point.
const CENTER_BOX_WIDTH: f32 = 600.0;
const CENTER_BOX_HEIGHT: f32 = 120.0;

/// Label size used when a button icon has no image.
const ICON_FALLBACK_FONT_SIZE: f32 = 14.0;

/// Marks every UI root spawned from the draw list.
#[derive(Component)]
pub struct Drawn;

/// Despawn last frame's nodes and spawn one root per draw command.
pub fn sync_draw_list_system(
    mut commands: Commands,
    game: Res<Match>,
    drawn: Query<Entity, With<Drawn>>,
    font: Res<GameFont>,
    icons: Res<IconImages>,
) {
    if !game.is_changed() {
        return;
    }
    for entity in drawn.iter() {
        commands.entity(entity).despawn();
    }
    for (depth, command) in game.draw_list().into_iter().enumerate() {
        spawn_command(&mut commands, command, ZIndex(depth as i32), &font, &icons);
    }
}

fn spawn_command(
    commands: &mut Commands,
    command: DrawCommand,
    z: ZIndex,
    font: &GameFont,
    icons: &IconImages,
) {
    match command {
        DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        } => {
            commands.spawn((
                rect_node(x, y, width, height),
                BackgroundColor(color.into()),
                z,
                Drawn,
            ));
        }
        DrawCommand::Text {
            text,
            x,
            y,
            size,
            color,
            anchor,
        } => {
            spawn_text(
                commands,
                text_bundle(text, size, color.into(), font),
                x,
                y,
                anchor,
                z,
            );
        }
        DrawCommand::Icon {
            icon,
            x,
            y,
            width,
            height,
            fallback,
        } => match icons.get(icon) {
            Some(image) => {
                commands.spawn((
                    rect_node(x, y, width, height),
                    ImageNode::new(image.clone()),
                    z,
                    Drawn,
                ));
            }
            None => {
                spawn_text(
                    commands,
                    text_bundle(fallback, ICON_FALLBACK_FONT_SIZE, Color::WHITE, font),
                    x + width / 2.0,
                    y + height / 2.0,
                    TextAnchor::Center,
                    z,
                );
            }
        },
    }
}

fn rect_node(x: f32, y: f32, width: f32, height: f32) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(x),
        top: Val::Px(y),
        width: Val::Px(width),
        height: Val::Px(height),
        ..default()
    }
}

fn text_bundle(
    text: String,
    size: f32,
    color: Color,
    font: &GameFont,
) -> (Text, TextFont, TextColor, TextLayout) {
    (
        Text::new(text),
        TextFont {
            font: font.0.clone(),
            font_size: size,
            ..default()
        },
        TextColor(color),
        TextLayout::new_with_no_wrap(),
    )
}

fn spawn_text(
    commands: &mut Commands,
    text: (Text, TextFont, TextColor, TextLayout),
    x: f32,
    y: f32,
    anchor: TextAnchor,
    z: ZIndex,
) {
    match anchor {
        TextAnchor::TopLeft => {
            commands.spawn((
                text,
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(x),
                    top: Val::Px(y),
                    ..default()
                },
                z,
                Drawn,
            ));
        }
        TextAnchor::TopRight => {
            commands.spawn((
                text,
                Node {
                    position_type: PositionType::Absolute,
                    right: Val::Px(SCREEN_WIDTH - x),
                    top: Val::Px(y),
                    ..default()
                },
                z,
                Drawn,
            ));
        }
        TextAnchor::Center => {
            commands
                .spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(x - CENTER_BOX_WIDTH / 2.0),
                        top: Val::Px(y - CENTER_BOX_HEIGHT / 2.0),
                        width: Val::Px(CENTER_BOX_WIDTH),
                        height: Val::Px(CENTER_BOX_HEIGHT),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    z,
                    Drawn,
                ))
                .with_children(|parent| {
                    parent.spawn(text);
                });
        }
    }
}
