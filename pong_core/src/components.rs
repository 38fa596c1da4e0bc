use glam::Vec2;

use crate::{Config, GameRng};

/// Which side a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,   // left
    Opponent, // right
}

/// Paddle - tracked by its top-left Y, clamped to the field
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Y of the paddle's vertical centre
    pub fn center(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    /// Whether a ball at `ball_y` falls within this paddle's vertical span
    pub fn spans(&self, ball_y: f32, config: &Config) -> bool {
        self.y <= ball_y && ball_y <= self.y + config.paddle_height
    }
}

/// The pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to the field centre with a fresh serve direction.
    ///
    /// Horizontal speed is a coin flip between the two fixed serve
    /// magnitudes; vertical speed is a continuous draw so serves are never
    /// perfectly flat nor too vertical.
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = Vec2::new(config.field_width / 2.0, config.field_height / 2.0);

        let vx = if rng.0.gen_bool(0.5) {
            config.ball_speed
        } else {
            -config.ball_speed
        };
        let vy = rng.0.gen_range(-3.0..=3.0);
        self.vel = Vec2::new(vx, vy);
    }
}
