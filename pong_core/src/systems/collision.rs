use crate::{Ball, Config, Events, Paddle, Params, Side};

/// Bounce the ball off the top/bottom field edges.
///
/// Inverts vertical velocity and clamps the ball back onto the boundary so
/// it cannot stick or tunnel out.
pub fn bounce_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    let top = config.ball_radius;
    let bottom = config.field_height - config.ball_radius;

    if ball.pos.y <= top || ball.pos.y >= bottom {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.pos.y.clamp(top, bottom);
        events.ball_hit_wall = true;
    }
}

/// Bounce the ball off either paddle.
///
/// A bounce triggers only when the ball is moving toward the paddle, its
/// leading edge has reached the paddle's inner plane, and its Y lies within
/// the paddle's vertical span. The outgoing angle depends on where the ball
/// struck relative to the paddle centre.
pub fn bounce_paddles(
    ball: &mut Ball,
    player: &Paddle,
    opponent: &Paddle,
    config: &Config,
    events: &mut Events,
) {
    for paddle in [player, opponent] {
        if bounce_one(ball, paddle, config) {
            events.ball_hit_paddle = true;
        }
    }
}

fn bounce_one(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    let hit = match paddle.side {
        Side::Player => {
            ball.vel.x < 0.0
                && ball.pos.x - config.ball_radius <= config.player_plane()
                && paddle.spans(ball.pos.y, config)
        }
        Side::Opponent => {
            ball.vel.x > 0.0
                && ball.pos.x + config.ball_radius >= config.opponent_plane()
                && paddle.spans(ball.pos.y, config)
        }
    };
    if !hit {
        return false;
    }

    // Normalized intersection offset from the paddle centre, [-1, 1];
    // positive when the ball struck above the centre.
    let offset = (paddle.center(config) - ball.pos.y) / (config.paddle_height / 2.0);

    let speed = ball.vel.length().max(Params::BALL_SPEED_MIN);
    let out_x = (speed * Params::BALL_BOUNCE_DAMPING).abs() * Params::BALL_BOUNCE_AMPLIFY;

    ball.vel.x = match paddle.side {
        Side::Player => out_x,
        Side::Opponent => -out_x,
    };
    ball.vel.y = -offset * speed * Params::BALL_SPIN;

    // Reposition just outside the paddle so the same hit cannot re-trigger
    ball.pos.x = match paddle.side {
        Side::Player => config.player_plane() + config.ball_radius + 1.0,
        Side::Opponent => config.opponent_plane() - config.ball_radius - 1.0,
    };

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Config, Events) {
        (Config::new(), Events::new())
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(400.0, 8.0), Vec2::new(4.0, -3.0));

        bounce_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.vel.y, 3.0, "Vertical velocity inverted exactly once");
        assert_eq!(ball.vel.x, 4.0, "Horizontal velocity unchanged");
        assert_eq!(ball.pos.y, config.ball_radius, "Clamped onto the boundary");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(400.0, 494.0), Vec2::new(-4.0, 3.0));

        bounce_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.vel.y, -3.0);
        assert_eq!(ball.pos.y, config.field_height - config.ball_radius);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_bounce_in_open_field() {
        let (config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(400.0, 250.0), Vec2::new(4.0, 3.0));

        bounce_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.vel, Vec2::new(4.0, 3.0));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_player_paddle_bounce_sends_ball_right() {
        let (config, mut events) = setup();
        let paddle = Paddle::new(Side::Player, 210.0); // centre 250
        let opponent = Paddle::new(Side::Opponent, 210.0);
        // Centre hit, leading edge at the plane
        let mut ball = Ball::new(Vec2::new(24.0, 250.0), Vec2::new(-4.0, 0.0));

        bounce_paddles(&mut ball, &paddle, &opponent, &config, &mut events);

        // speed floors at 4.0; outgoing vx = 4.0 * 0.8 * 1.05
        assert!((ball.vel.x - 3.36).abs() < 1e-4, "vx directed away, amplified");
        assert_eq!(ball.vel.y, 0.0, "Centre hit leaves no spin");
        assert_eq!(ball.pos.x, config.player_plane() + config.ball_radius + 1.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_opponent_paddle_bounce_sends_ball_left() {
        let (config, mut events) = setup();
        let player = Paddle::new(Side::Player, 210.0);
        let paddle = Paddle::new(Side::Opponent, 210.0);
        let mut ball = Ball::new(Vec2::new(776.0, 250.0), Vec2::new(4.0, 0.0));

        bounce_paddles(&mut ball, &player, &paddle, &config, &mut events);

        assert!(ball.vel.x < 0.0, "Ball sent away from the right paddle");
        assert_eq!(ball.pos.x, config.opponent_plane() - config.ball_radius - 1.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_bounce_angle_depends_on_hit_position() {
        let (config, mut events) = setup();
        let paddle = Paddle::new(Side::Player, 210.0);
        let opponent = Paddle::new(Side::Opponent, 210.0);

        // Hit near the top edge of the paddle: offset positive, ball deflects up
        let mut ball = Ball::new(Vec2::new(24.0, 215.0), Vec2::new(-4.0, 0.0));
        bounce_paddles(&mut ball, &paddle, &opponent, &config, &mut events);
        assert!(ball.vel.y < 0.0, "Top hit deflects upward");

        // Hit near the bottom edge: ball deflects down
        let mut ball = Ball::new(Vec2::new(24.0, 285.0), Vec2::new(-4.0, 0.0));
        bounce_paddles(&mut ball, &paddle, &opponent, &config, &mut events);
        assert!(ball.vel.y > 0.0, "Bottom hit deflects downward");
    }

    #[test]
    fn test_speed_floor_applies_to_slow_balls() {
        let (config, mut events) = setup();
        let paddle = Paddle::new(Side::Player, 210.0);
        let opponent = Paddle::new(Side::Opponent, 210.0);
        let mut ball = Ball::new(Vec2::new(24.0, 250.0), Vec2::new(-1.0, 0.0));

        bounce_paddles(&mut ball, &paddle, &opponent, &config, &mut events);

        // Floor of 4.0 applies even though |vel| was 1.0
        assert!((ball.vel.x - 3.36).abs() < 1e-4);
    }

    #[test]
    fn test_no_bounce_when_ball_moving_away() {
        let (config, mut events) = setup();
        let paddle = Paddle::new(Side::Player, 210.0);
        let opponent = Paddle::new(Side::Opponent, 210.0);
        let mut ball = Ball::new(Vec2::new(24.0, 250.0), Vec2::new(4.0, 0.0));

        bounce_paddles(&mut ball, &paddle, &opponent, &config, &mut events);

        assert_eq!(ball.vel, Vec2::new(4.0, 0.0), "Unchanged when moving away");
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_no_bounce_outside_paddle_span() {
        let (config, mut events) = setup();
        let paddle = Paddle::new(Side::Player, 210.0);
        let opponent = Paddle::new(Side::Opponent, 210.0);
        let mut ball = Ball::new(Vec2::new(24.0, 100.0), Vec2::new(-4.0, 0.0));

        bounce_paddles(&mut ball, &paddle, &opponent, &config, &mut events);

        assert_eq!(ball.vel, Vec2::new(-4.0, 0.0));
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_bounce_never_zeroes_horizontal_velocity() {
        let (config, mut events) = setup();
        let paddle = Paddle::new(Side::Player, 210.0);
        let opponent = Paddle::new(Side::Opponent, 210.0);
        let mut ball = Ball::new(Vec2::new(24.0, 250.0), Vec2::new(-0.5, 0.0));

        bounce_paddles(&mut ball, &paddle, &opponent, &config, &mut events);

        assert!(ball.vel.x.abs() > 3.0, "Horizontal progress guaranteed");
    }
}
