//! The match state machine.
//!
//! [`Match`] owns everything the game mutates: settings, scores, the active
//! view, the paused/playing phase and the bodies and buttons of the current
//! screen.  The Bevy side feeds it [`InputEvent`]s, calls [`Match::tick`] once
//! per fixed step and renders whatever [`Match::draw_list`] returns.
//!
//! ## States
//!
//! | View       | Phase     | Tick behaviour                                   |
//! |------------|-----------|--------------------------------------------------|
//! | `Game`     | `Paused`  | nothing moves; any key or a click off the buttons resumes |
//! | `Game`     | `Playing` | ball collision, goal check, bodies advance        |
//! | `Settings` | `Playing` | menu re-laid-out, nothing moves                   |
//!
//! Every round starts paused.  Only the taskbar toggle switches views; going
//! back to the game view always sets up a fresh round without touching scores.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::body::{Body, Rgb};
use crate::button::{self, Button, ButtonAction, Icon};
use crate::config::Settings;
use crate::constants::*;
use crate::physics::{self, Player};

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Game,
    Settings,
}

/// Whether the ball is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Between points: waiting for a key press or click.
    #[default]
    Paused,
    Playing,
}

/// Keys the game distinguishes.  Anything else still counts as "a key" for
/// leaving the paused phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Other,
}

/// Platform-independent input, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Primary mouse button pressed at a screen-space cursor position.
    MouseDown { x: f32, y: f32 },
}

/// The two paddles and the ball of a live round.
#[derive(Debug, Clone, PartialEq)]
pub struct Court {
    pub p1: Body,
    pub p2: Body,
    pub ball: Body,
}

/// How a text command is positioned relative to its `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Center,
    TopLeft,
    TopRight,
}

/// One paint operation in screen space, in back-to-front order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
        anchor: TextAnchor,
    },
    /// Image filling a button; `fallback` is drawn as text when the image
    /// asset is not available.
    Icon {
        icon: Icon,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fallback: String,
    },
}

/// Explicit game state.
#[derive(Resource, Debug)]
pub struct Match {
    settings: Settings,
    scores: [u32; 2],
    view: View,
    phase: Phase,
    court: Option<Court>,
    /// Static bodies: the taskbar.
    scenery: Vec<Body>,
    /// Instruction captions shown while a round is paused.
    hints: Vec<Body>,
    buttons: Vec<Button>,
    quit_requested: bool,
    rng: StdRng,
}

impl Match {
    /// Start a match in the game view with a fresh, paused round.
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Like [`Match::new`] but with a reproducible serve sequence.
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: Settings, rng: StdRng) -> Self {
        let mut game = Self {
            settings,
            scores: [0, 0],
            view: View::Game,
            phase: Phase::Paused,
            court: None,
            scenery: Vec::new(),
            hints: Vec::new(),
            buttons: Vec::new(),
            quit_requested: false,
            rng,
        };
        game.setup_round();
        game
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// `[player 1, player 2]`.
    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Paddles and ball; `None` in the settings view.
    pub fn court(&self) -> Option<&Court> {
        self.court.as_ref()
    }

    pub fn court_mut(&mut self) -> Option<&mut Court> {
        self.court.as_mut()
    }

    pub fn hints(&self) -> &[Body] {
        &self.hints
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Set once a quit event has been seen; the caller persists settings and exits.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    // ── Round lifecycle ───────────────────────────────────────────────────────

    /// Throw away the current screen and lay out a new round, paused.
    ///
    /// The ball is served from a random side toward the opposite player at a
    /// random height.  Scores are left alone.
    pub fn setup_round(&mut self) {
        let speed = self.settings.ball_speed as f32;
        let from_left = self.rng.gen_bool(0.5);
        let (x, vx) = if from_left {
            (BALL_SERVE_LEFT_X, speed)
        } else {
            (BALL_SERVE_RIGHT_X, -speed)
        };
        let y = self.rng.gen_range(BALL_SERVE_MIN_Y..BALL_SERVE_MAX_Y) as f32;

        self.court = Some(Court {
            p1: Body::new(
                self.settings.p1_color,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
                P1_X,
                PADDLE_START_Y,
            ),
            p2: Body::new(
                self.settings.p2_color,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
                P2_X,
                PADDLE_START_Y,
            ),
            ball: Body::new(self.settings.ball_color, BALL_SIZE, BALL_SIZE, x, y)
                .with_velocity(vx, speed),
        });
        self.scenery = vec![taskbar()];
        self.buttons = button::taskbar_buttons(ButtonAction::OpenSettings);
        self.hints = vec![
            Body::new(BLACK, 100.0, 50.0, 120.0, 350.0).with_label("P1 Controls: W and S"),
            Body::new(BLACK, 100.0, 50.0, 400.0, 350.0).with_label("P2 Controls: UP and DOWN"),
            Body::new(BLACK, 100.0, 50.0, 320.0, 150.0).with_label("Press ANY Key"),
        ];
        self.phase = Phase::Paused;
    }

    /// Rebuild the settings screen from the current settings values.
    fn layout_settings(&mut self) {
        self.court = None;
        self.hints.clear();
        self.scenery = vec![taskbar()];
        self.buttons = button::settings_buttons(&self.settings);
        self.phase = Phase::Playing;
    }

    /// Credit a goal and serve the next round.
    pub fn score(&mut self, player: Player) {
        match player {
            Player::One => self.scores[0] += 1,
            Player::Two => self.scores[1] += 1,
        }
        info!(
            "Player {:?} scores ({} - {})",
            player, self.scores[0], self.scores[1]
        );
        self.setup_round();
    }

    /// Zero both scores and start over on the current view.
    pub fn restart(&mut self) {
        self.scores = [0, 0];
        info!("Scores reset");
        match self.view {
            View::Game => self.setup_round(),
            View::Settings => self.layout_settings(),
        }
    }

    fn resume(&mut self) {
        self.hints.clear();
        self.phase = Phase::Playing;
    }

    // ── Buttons ───────────────────────────────────────────────────────────────

    /// Run a button's action.  The settings screen is re-laid-out afterwards
    /// so labels and colours track the new values.
    pub fn dispatch(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::OpenSettings => {
                info!("Opening settings");
                self.view = View::Settings;
            }
            ButtonAction::OpenGame => {
                info!("Returning to game");
                self.view = View::Game;
                self.setup_round();
            }
            ButtonAction::Restart => self.restart(),
            ButtonAction::CycleP1Color => self.settings.cycle_p1_color(),
            ButtonAction::CycleP2Color => self.settings.cycle_p2_color(),
            ButtonAction::CycleBallColor => self.settings.cycle_ball_color(),
            ButtonAction::CycleBallSpeed => self.settings.cycle_ball_speed(),
            ButtonAction::CyclePaddleSpeed => self.settings.cycle_paddle_speed(),
        }
        if self.view == View::Settings {
            self.layout_settings();
        }
    }

    /// Action of the first button under the cursor, if any.
    pub fn button_at(&self, x: f32, y: f32) -> Option<ButtonAction> {
        self.buttons
            .iter()
            .find(|b| b.contains(x, y))
            .map(|b| b.action)
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    /// Apply one input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        if self.quit_requested {
            return;
        }
        if event == InputEvent::Quit {
            self.quit_requested = true;
            return;
        }

        match (self.view, self.phase) {
            (View::Game, Phase::Paused) => match event {
                InputEvent::KeyDown(_) => self.resume(),
                InputEvent::MouseDown { x, y } => match self.button_at(x, y) {
                    Some(action) => self.dispatch(action),
                    None => self.resume(),
                },
                _ => {}
            },
            (View::Game, Phase::Playing) => match event {
                InputEvent::KeyDown(key) => self.key_down(key),
                InputEvent::KeyUp(key) => self.key_up(key),
                InputEvent::MouseDown { x, y } => self.click(x, y),
                InputEvent::Quit => {}
            },
            (View::Settings, _) => {
                if let InputEvent::MouseDown { x, y } = event {
                    self.click(x, y);
                }
            }
        }
    }

    fn click(&mut self, x: f32, y: f32) {
        if let Some(action) = self.button_at(x, y) {
            self.dispatch(action);
        }
    }

    fn key_down(&mut self, key: Key) {
        let speed = self.settings.paddle_speed as f32;
        let Some(court) = self.court.as_mut() else {
            return;
        };
        match key {
            Key::W => court.p1.vy = -speed,
            Key::S => court.p1.vy = speed,
            Key::Up => court.p2.vy = -speed,
            Key::Down => court.p2.vy = speed,
            Key::Other => {}
        }
    }

    /// Releasing a key stops its paddle unless the paddle is currently moving
    /// in the *other* key's direction.  With both keys held, the release order
    /// decides where the paddle ends up.
    fn key_up(&mut self, key: Key) {
        let speed = self.settings.paddle_speed as f32;
        let Some(court) = self.court.as_mut() else {
            return;
        };
        match key {
            Key::W if court.p1.vy != speed => court.p1.vy = 0.0,
            Key::S if court.p1.vy != -speed => court.p1.vy = 0.0,
            Key::Up if court.p2.vy != speed => court.p2.vy = 0.0,
            Key::Down if court.p2.vy != -speed => court.p2.vy = 0.0,
            _ => {}
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────────

    /// Advance one fixed step.
    pub fn tick(&mut self) {
        match (self.view, self.phase) {
            (View::Game, Phase::Playing) => self.tick_game(),
            (View::Game, Phase::Paused) => {}
            (View::Settings, _) => self.layout_settings(),
        }
    }

    fn tick_game(&mut self) {
        let Some(court) = self.court.as_mut() else {
            return;
        };
        physics::update_ball(&mut court.ball, &court.p1, &court.p2);
        if let Some(player) = physics::check_goal(&court.ball) {
            self.score(player);
            return;
        }
        court.p1.advance();
        court.p2.advance();
        court.ball.advance();
        for body in &mut self.scenery {
            body.advance();
        }
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    /// Everything on screen this frame, back to front: court, taskbar, hint
    /// captions, buttons, then the two score counters.
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        let bodies = self
            .court
            .iter()
            .flat_map(|c| [&c.p1, &c.p2, &c.ball])
            .chain(self.scenery.iter())
            .chain(self.hints.iter());
        for body in bodies {
            draw_body(body, &mut commands);
        }
        for button in &self.buttons {
            draw_button(button, &mut commands);
        }
        commands.push(DrawCommand::Text {
            text: self.scores[0].to_string(),
            x: SCORE_MARGIN,
            y: SCORE_MARGIN,
            size: SCORE_FONT_SIZE,
            color: self.settings.p1_color,
            anchor: TextAnchor::TopLeft,
        });
        commands.push(DrawCommand::Text {
            text: self.scores[1].to_string(),
            x: SCREEN_WIDTH - SCORE_MARGIN,
            y: SCORE_MARGIN,
            size: SCORE_FONT_SIZE,
            color: self.settings.p2_color,
            anchor: TextAnchor::TopRight,
        });
        commands
    }
}

fn taskbar() -> Body {
    Body::new(BROWN, SCREEN_WIDTH, TASKBAR_HEIGHT, 0.0, 0.0)
}

fn draw_body(body: &Body, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: body.height,
        color: body.color,
    });
    // Captions are centred on the body's corner, not its middle.
    if let Some(label) = &body.label {
        out.push(DrawCommand::Text {
            text: label.clone(),
            x: body.x,
            y: body.y,
            size: TEXT_FONT_SIZE,
            color: WHITE,
            anchor: TextAnchor::Center,
        });
    }
}

fn draw_button(button: &Button, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::Rect {
        x: button.x,
        y: button.y,
        width: button.width,
        height: button.height,
        color: button.color,
    });
    match button.icon {
        Some(icon) => out.push(DrawCommand::Icon {
            icon,
            x: button.x,
            y: button.y,
            width: button.width,
            height: button.height,
            fallback: button.label.clone(),
        }),
        None => out.push(DrawCommand::Text {
            text: button.label.clone(),
            x: button.x + button.width / 2.0,
            y: button.y + button.height / 2.0,
            size: TEXT_FONT_SIZE,
            color: button.text_color,
            anchor: TextAnchor::Center,
        }),
    }
}
