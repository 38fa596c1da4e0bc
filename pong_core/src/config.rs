/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 8.0; // units per move command

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 4.0; // horizontal serve speed
    pub const BALL_SPEED_MIN: f32 = 4.0; // floor applied on paddle bounce
    pub const BALL_BOUNCE_DAMPING: f32 = 0.8; // horizontal component scale
    pub const BALL_BOUNCE_AMPLIFY: f32 = 1.05; // per-bounce speedup
    pub const BALL_SPIN: f32 = 0.7; // vertical deflection scale

    // Opponent controller
    pub const AI_DEADZONE: f32 = 5.0;

    // Score
    pub const WIN_SCORE: u32 = 10;
}

/// Opponent skill level; drives paddle speed and aim jitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Per-tick opponent paddle speed
    pub fn ai_speed(self) -> f32 {
        match self {
            Difficulty::Easy => 3.0,
            Difficulty::Medium => 5.0,
            Difficulty::Hard => 7.0,
        }
    }

    /// Amplitude of the random aim offset (0 = perfect aim)
    pub fn ai_jitter(self) -> f32 {
        match self {
            Difficulty::Easy => 30.0,
            Difficulty::Medium => 15.0,
            Difficulty::Hard => 0.0,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub win_score: u32,
    pub difficulty: Difficulty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            win_score: Params::WIN_SCORE,
            difficulty: Difficulty::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inner X plane the ball bounces off for the player (left) paddle
    pub fn player_plane(&self) -> f32 {
        self.paddle_width
    }

    /// Inner X plane the ball bounces off for the opponent (right) paddle
    pub fn opponent_plane(&self) -> f32 {
        self.field_width - self.paddle_width
    }

    /// Paddle Y at the vertical centre of the field
    pub fn paddle_start_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp a paddle's top-left Y to the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.field_height - self.paddle_height)
    }
}
