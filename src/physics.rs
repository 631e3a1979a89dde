//! Ball collision response and goal detection.
//!
//! Everything here is constant-velocity, axis-aligned rectangle logic run
//! once per fixed tick.  Collision response only ever flips the sign of a
//! velocity component; positions are moved afterwards by
//! [`Body::advance`](crate::body::Body::advance).

use crate::body::Body;
use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH, TASKBAR_HEIGHT};

/// Which side scored a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

/// Update the ball's velocity for wall and paddle contacts.
///
/// 1. Crossing the top of the playfield (checked one tick ahead) or the
///    bottom edge flips `vy`.
/// 2. Overlapping either paddle flips `vx`, unless the ball is already
///    closer to a side wall than that paddle's face.  That happens when the
///    ball clips the top or bottom of a paddle; it keeps travelling toward
///    the wall instead of bouncing back and forth inside the paddle.
pub fn update_ball(ball: &mut Body, p1: &Body, p2: &Body) {
    if ball.y < TASKBAR_HEIGHT - ball.vy || ball.y > SCREEN_HEIGHT - ball.height {
        ball.vy = -ball.vy;
    }

    if ball.overlaps(p1) || ball.overlaps(p2) {
        let behind_p1 = ball.x < p1.x + p1.width + ball.vx;
        let behind_p2 = ball.x > p2.x - ball.width + ball.vx;
        if !(behind_p1 || behind_p2) {
            ball.vx = -ball.vx;
        }
    }
}

/// Return the scoring player if the ball has left the screen this tick.
///
/// Leaving on the left scores for player two, leaving on the right for
/// player one.  Both bounds are shifted by the ball's horizontal velocity.
pub fn check_goal(ball: &Body) -> Option<Player> {
    if ball.x < 0.0 + ball.vx {
        Some(Player::Two)
    } else if ball.x > SCREEN_WIDTH - ball.width - ball.vx {
        Some(Player::One)
    } else {
        None
    }
}
