//! Clickable menu buttons and their layouts.
//!
//! A [`Button`] is only a rectangle plus a [`ButtonAction`] tag; what the
//! action does is decided by [`Match::dispatch`](crate::game::Match::dispatch).

use crate::body::Rgb;
use crate::config::Settings;
use crate::constants::{GRAY, WHITE};

/// Every action a button can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    /// Switch from the game view to the settings view.
    OpenSettings,
    /// Switch from the settings view back to the game view.
    OpenGame,
    /// Zero both scores and start a fresh round.
    Restart,
    CycleP1Color,
    CycleP2Color,
    CycleBallColor,
    CycleBallSpeed,
    CyclePaddleSpeed,
}

/// Image drawn over a button when the matching asset is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Cog,
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub action: ButtonAction,
    /// Text centred on the button.  Icon buttons use it as a fallback when the
    /// image is missing.
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
    pub text_color: Rgb,
    pub icon: Option<Icon>,
}

impl Button {
    fn new(
        action: ButtonAction,
        label: impl Into<String>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            action,
            label: label.into(),
            x,
            y,
            width,
            height,
            color: GRAY,
            text_color: WHITE,
            icon: None,
        }
    }

    fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    fn with_text_color(mut self, color: Rgb) -> Self {
        self.text_color = color;
        self
    }

    /// Point-in-rectangle test; the left and top edges are inside, the right
    /// and bottom edges are not.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// The two taskbar buttons.  `toggle` is the view switch: `OpenSettings` in
/// the game view, `OpenGame` in the settings view.
pub fn taskbar_buttons(toggle: ButtonAction) -> Vec<Button> {
    vec![
        Button::new(toggle, "MENU", 500.0, 5.0, 50.0, 50.0).with_icon(Icon::Cog),
        Button::new(ButtonAction::Restart, "RST", 430.0, 5.0, 50.0, 50.0)
            .with_icon(Icon::Reset),
    ]
}

/// Full settings-view button set.  Colour buttons show their label in the
/// colour they configure; speed buttons show the current value.
pub fn settings_buttons(settings: &Settings) -> Vec<Button> {
    let mut buttons = taskbar_buttons(ButtonAction::OpenGame);
    buttons.extend([
        Button::new(ButtonAction::CycleP1Color, "Player 1 Color", 100.0, 200.0, 200.0, 50.0)
            .with_text_color(settings.p1_color),
        Button::new(ButtonAction::CycleP2Color, "Player 2 Color", 100.0, 270.0, 200.0, 50.0)
            .with_text_color(settings.p2_color),
        Button::new(ButtonAction::CycleBallColor, "Ball Color", 100.0, 340.0, 200.0, 50.0)
            .with_text_color(settings.ball_color),
        Button::new(
            ButtonAction::CycleBallSpeed,
            format!("Ball Speed: {}", settings.ball_speed),
            350.0,
            200.0,
            200.0,
            50.0,
        ),
        Button::new(
            ButtonAction::CyclePaddleSpeed,
            format!("Player Speed: {}", settings.paddle_speed),
            350.0,
            270.0,
            200.0,
            50.0,
        ),
    ]);
    buttons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PINK;

    #[test]
    fn contains_includes_top_left_and_excludes_bottom_right() {
        let b = Button::new(ButtonAction::Restart, "", 430.0, 5.0, 50.0, 50.0);
        assert!(b.contains(430.0, 5.0));
        assert!(b.contains(479.0, 54.0));
        assert!(!b.contains(480.0, 30.0));
        assert!(!b.contains(450.0, 55.0));
    }

    #[test]
    fn taskbar_buttons_do_not_overlap() {
        let buttons = taskbar_buttons(ButtonAction::OpenSettings);
        assert_eq!(buttons[0].action, ButtonAction::OpenSettings);
        assert_eq!(buttons[1].action, ButtonAction::Restart);
        assert!(buttons[0].x >= buttons[1].x + buttons[1].width);
    }

    #[test]
    fn settings_buttons_reflect_current_values() {
        let settings = Settings {
            ball_speed: 12,
            paddle_speed: 4,
            p1_color: PINK,
            ..Settings::default()
        };
        let buttons = settings_buttons(&settings);
        assert_eq!(buttons[0].action, ButtonAction::OpenGame);

        let p1 = buttons
            .iter()
            .find(|b| b.action == ButtonAction::CycleP1Color)
            .unwrap();
        assert_eq!(p1.text_color, PINK);

        let labels: Vec<&str> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert!(labels.contains(&"Ball Speed: 12"));
        assert!(labels.contains(&"Player Speed: 4"));
    }
}
