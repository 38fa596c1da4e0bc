use crate::{Ball, Config, GameRng, Paddle, Params};
use rand::Rng;

/// Move the opponent paddle toward where the ball is headed.
///
/// When the ball is travelling toward the opponent, the target is the
/// predicted Y at the paddle plane assuming constant velocity; otherwise the
/// paddle loosely tracks the ball's current Y. Lower difficulties add a
/// random aim offset. A small dead-zone around the target prevents the
/// paddle oscillating when it has already lined up.
pub fn move_opponent(paddle: &mut Paddle, ball: &Ball, config: &Config, rng: &mut GameRng) {
    let mut target_y = ball.pos.y;

    if ball.vel.x > 0.0 {
        target_y = predict_impact_y(ball, config);
    }

    let jitter = config.difficulty.ai_jitter();
    if jitter > 0.0 {
        target_y += rng.0.gen_range(-jitter..=jitter);
    }

    let center = paddle.center(config);
    let speed = config.difficulty.ai_speed();

    if center < target_y - Params::AI_DEADZONE {
        paddle.y = config.clamp_paddle_y(paddle.y + speed);
    } else if center > target_y + Params::AI_DEADZONE {
        paddle.y = config.clamp_paddle_y(paddle.y - speed);
    }
}

/// Predicted ball Y at the opponent's paddle plane, clamped to the field.
///
/// Zero horizontal velocity is treated as zero time-to-impact rather than
/// dividing by it.
fn predict_impact_y(ball: &Ball, config: &Config) -> f32 {
    let distance = config.opponent_plane() - ball.pos.x;
    let time_to_impact = if ball.vel.x != 0.0 {
        distance / ball.vel.x
    } else {
        0.0
    };
    let predicted = ball.pos.y + ball.vel.y * time_to_impact;
    predicted.clamp(config.ball_radius, config.field_height - config.ball_radius)
}
