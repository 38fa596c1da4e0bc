use crate::{Ball, Config, Events, GameRng, Score};

/// Award a point if the ball left the field, then re-serve.
///
/// The ball must fully exit a side before the opposing player scores; it is
/// then re-centred with a fresh randomized serve.
pub fn check_scoring(
    ball: &mut Ball,
    score: &mut Score,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if ball.pos.x < 0.0 {
        score.increment_opponent();
        events.opponent_scored = true;
        ball.reset(config, rng);
    } else if ball.pos.x > config.field_width {
        score.increment_player();
        events.player_scored = true;
        ball.reset(config, rng);
    }
}
