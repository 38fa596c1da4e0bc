pub mod components;
pub mod config;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;
pub use systems::*;

use glam::Vec2;

/// The Pong simulation core.
///
/// Owns the ball, both paddles, the scores and the match lifecycle. The
/// rendering shell feeds it commands, calls [`PongGame::tick`] on a fixed
/// period (~60 Hz) and reads [`PongGame::snapshot`] to draw.
pub struct PongGame {
    pub config: Config,
    pub ball: Ball,
    pub player: Paddle,
    pub opponent: Paddle,
    pub score: Score,
    pub state: MatchState,
    pub events: Events,
    pub rng: GameRng,
}

/// Read-only projection of the core state for rendering
#[derive(Debug, Clone, Copy)]
pub struct PongSnapshot {
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub player_y: f32,
    pub opponent_y: f32,
    pub player_score: u32,
    pub opponent_score: u32,
    pub state: MatchState,
    pub difficulty: Difficulty,
}

impl PongGame {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let paddle_y = config.paddle_start_y();
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(&config, &mut rng);

        Self {
            player: Paddle::new(Side::Player, paddle_y),
            opponent: Paddle::new(Side::Opponent, paddle_y),
            ball,
            score: Score::new(),
            state: MatchState::Idle,
            events: Events::new(),
            rng,
            config,
        }
    }

    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }

    /// Begin the match. No-op unless the game is Idle.
    pub fn start(&mut self) {
        if self.state == MatchState::Idle {
            self.state = MatchState::Running;
        }
    }

    /// Freeze the simulation. No-op unless Running.
    pub fn pause(&mut self) {
        if self.state == MatchState::Running {
            self.state = MatchState::Paused;
        }
    }

    /// Continue a paused match. No-op unless Paused.
    pub fn resume(&mut self) {
        if self.state == MatchState::Paused {
            self.state = MatchState::Running;
        }
    }

    /// Restore scores, paddles and ball to their initial values.
    ///
    /// A match that had been started (running, paused or finished) resumes
    /// play immediately; an Idle game stays Idle.
    pub fn reset(&mut self) {
        let paddle_y = self.config.paddle_start_y();
        self.player.y = paddle_y;
        self.opponent.y = paddle_y;
        self.score = Score::new();
        self.ball.reset(&self.config, &mut self.rng);
        self.events.clear();

        if self.state != MatchState::Idle {
            self.state = MatchState::Running;
        }
    }

    /// Change opponent difficulty; takes effect on the next tick.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Shift the player paddle one step. Ignored unless Running.
    pub fn move_player(&mut self, dir: MoveDir) {
        if self.state == MatchState::Running {
            move_paddle(&mut self.player, dir, &self.config);
        }
    }

    /// Advance the simulation by one fixed step. No-op unless Running.
    pub fn tick(&mut self) {
        if self.state != MatchState::Running {
            return;
        }

        self.events.clear();

        // 1. Opponent controller tracks the ball
        move_opponent(&mut self.opponent, &self.ball, &self.config, &mut self.rng);

        // 2. Ball motion
        move_ball(&mut self.ball);

        // 3. Top/bottom wall bounce
        bounce_walls(&mut self.ball, &self.config, &mut self.events);

        // 4. Paddle bounce
        bounce_paddles(
            &mut self.ball,
            &self.player,
            &self.opponent,
            &self.config,
            &mut self.events,
        );

        // 5. Scoring and match end
        check_scoring(
            &mut self.ball,
            &mut self.score,
            &self.config,
            &mut self.events,
            &mut self.rng,
        );
        if self.score.has_winner(self.config.win_score).is_some() {
            self.state = MatchState::GameOver;
        }
    }

    /// Read-only view of the current state for rendering
    pub fn snapshot(&self) -> PongSnapshot {
        PongSnapshot {
            ball_pos: self.ball.pos,
            ball_vel: self.ball.vel,
            player_y: self.player.y,
            opponent_y: self.opponent.y,
            player_score: self.score.player,
            opponent_score: self.score.opponent,
            state: self.state,
            difficulty: self.config.difficulty,
        }
    }
}
