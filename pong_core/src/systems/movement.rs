use crate::{Ball, Config, Paddle};

/// Vertical move direction for the player paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Up,
    Down,
}

/// Shift a paddle one step and clamp it to the field
pub fn move_paddle(paddle: &mut Paddle, dir: MoveDir, config: &Config) {
    let delta = match dir {
        MoveDir::Up => -config.paddle_speed,
        MoveDir::Down => config.paddle_speed,
    };
    paddle.y = config.clamp_paddle_y(paddle.y + delta);
}

/// Advance the ball one fixed step
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}
