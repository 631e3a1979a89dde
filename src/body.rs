//! Axis-aligned rectangles that make up the playfield.
//!
//! Paddles, the ball, the taskbar and the hint captions are all [`Body`]
//! values: a coloured rectangle with a constant per-tick velocity and an
//! optional caption.  Bodies carry no identity across rounds; the whole set is
//! rebuilt every time a round is set up.

use bevy::prelude::Color;
use serde::{Deserialize, Serialize};

use crate::constants::{SCREEN_HEIGHT, TASKBAR_HEIGHT};

/// An 8-bit RGB triple.  Serialised as a three-element JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.0;
        Color::srgb_u8(r, g, b)
    }
}

/// A coloured rectangle with a per-tick velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub color: Rgb,
    pub width: f32,
    pub height: f32,
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Vertical velocity in pixels per tick; negative moves up.
    pub vy: f32,
    /// Horizontal velocity in pixels per tick; negative moves left.
    pub vx: f32,
    /// Caption drawn centred on `(x, y)`.
    pub label: Option<String>,
}

impl Body {
    pub fn new(color: Rgb, width: f32, height: f32, x: f32, y: f32) -> Self {
        Self {
            color,
            width,
            height,
            x,
            y,
            vy: 0.0,
            vx: 0.0,
            label: None,
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Move by one tick of velocity.
    ///
    /// A body above the playfield that is still heading up, or below it and
    /// still heading down, is frozen in place for the tick (both axes).  This
    /// is what keeps paddles on the playfield; it is a skip rather than a
    /// clamp, so a body may overshoot the edge by up to one tick of travel.
    pub fn advance(&mut self) {
        if self.y < TASKBAR_HEIGHT && self.vy < 0.0 {
            return;
        }
        if self.y > SCREEN_HEIGHT - self.height && self.vy > 0.0 {
            return;
        }
        self.y += self.vy;
        self.x += self.vx;
    }

    /// Strict rectangle intersection; touching edges do not count.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WHITE;

    fn paddle_at(y: f32, vy: f32) -> Body {
        Body::new(WHITE, 20.0, 100.0, 40.0, y).with_velocity(0.0, vy)
    }

    #[test]
    fn advance_moves_by_velocity_inside_playfield() {
        let mut body = Body::new(WHITE, 20.0, 20.0, 100.0, 200.0).with_velocity(-7.0, 4.0);
        body.advance();
        assert_eq!((body.x, body.y), (93.0, 204.0));
    }

    #[test]
    fn advance_freezes_body_heading_further_above_playfield() {
        let mut body = paddle_at(55.0, -6.0);
        body.advance();
        assert_eq!(body.y, 55.0);

        // Heading back down is allowed from the same spot.
        body.vy = 6.0;
        body.advance();
        assert_eq!(body.y, 61.0);
    }

    #[test]
    fn advance_freezes_body_heading_further_below_playfield() {
        let mut body = paddle_at(503.0, 6.0);
        body.advance();
        assert_eq!(body.y, 503.0);

        body.vy = -6.0;
        body.advance();
        assert_eq!(body.y, 497.0);
    }

    #[test]
    fn frozen_body_keeps_horizontal_position_too() {
        let mut ball = Body::new(WHITE, 20.0, 20.0, 300.0, 40.0).with_velocity(10.0, -10.0);
        ball.advance();
        assert_eq!((ball.x, ball.y), (300.0, 40.0));
    }

    #[test]
    fn advance_can_overshoot_edge_by_one_step() {
        let mut body = paddle_at(62.0, -6.0);
        body.advance();
        assert_eq!(body.y, 56.0);
    }

    #[test]
    fn overlap_is_strict() {
        let a = Body::new(WHITE, 20.0, 20.0, 0.0, 0.0);
        let touching = Body::new(WHITE, 20.0, 20.0, 20.0, 0.0);
        let inside = Body::new(WHITE, 20.0, 20.0, 19.0, 19.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn rgb_serializes_as_triple() {
        let json = serde_json::to_string(&Rgb([139, 69, 19])).unwrap();
        assert_eq!(json, "[139,69,19]");
    }
}
