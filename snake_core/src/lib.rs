pub mod components;
pub mod config;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;
pub use systems::*;

/// The Snake simulation core.
///
/// Owns the body segments, food, obstacles, score and round state. The
/// rendering shell buffers turns via [`SnakeGame::set_direction`], calls
/// [`SnakeGame::tick`] on a fixed period (~10 Hz) and reads
/// [`SnakeGame::snapshot`] to draw.
pub struct SnakeGame {
    pub config: Config,
    pub snake: Snake,
    pub food: Cell,
    pub obstacles: Vec<Cell>,
    pub score: u32,
    pub state: RoundState,
    pub events: Events,
    pub rng: GameRng,
}

/// Read-only projection of the core state for rendering
#[derive(Debug, Clone)]
pub struct SnakeSnapshot {
    /// Body segments, head first
    pub body: Vec<Cell>,
    pub food: Cell,
    pub obstacles: Vec<Cell>,
    pub score: u32,
    pub state: RoundState,
}

impl SnakeGame {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let snake = Snake::spawn(&config);
        let food = place_food(&snake, &[], &config, &mut rng);

        Self {
            snake,
            food,
            obstacles: Vec::new(),
            score: 0,
            state: RoundState::Active,
            events: Events::new(),
            rng,
            config,
        }
    }

    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }

    /// Buffer a turn for the next tick; reversals onto the current heading
    /// are rejected.
    pub fn set_direction(&mut self, direction: Direction) {
        set_direction(&mut self.snake, direction);
    }

    /// Advance the simulation by one cell. No-op once the round is over.
    pub fn tick(&mut self) {
        if self.state == RoundState::GameOver {
            return;
        }

        self.events.clear();

        // 1. Move, growing when the head lands on food
        let ate = advance_snake(&mut self.snake, self.food, self.config.cell_size);

        // 2. Food consumption: score, new food, and the obstacle cadence
        if ate {
            self.score += 1;
            self.events.ate_food = true;
            self.food = place_food(&self.snake, &self.obstacles, &self.config, &mut self.rng);

            if self.score >= Params::OBSTACLE_START_SCORE
                && (self.score - Params::OBSTACLE_START_SCORE) % Params::OBSTACLE_INTERVAL == 0
            {
                if let Some(cell) = try_place_obstacle(
                    &self.snake,
                    self.food,
                    &self.obstacles,
                    &self.config,
                    &mut self.rng,
                ) {
                    self.obstacles.push(cell);
                    self.events.spawned_obstacle = true;
                }
            }
        }

        // 3. Termination
        if is_fatal(&self.snake, &self.obstacles, &self.config) {
            self.state = RoundState::GameOver;
            self.events.died = true;
        }
    }

    /// Restore the initial snake, clear obstacles and place fresh food.
    pub fn reset(&mut self) {
        self.snake = Snake::spawn(&self.config);
        self.obstacles.clear();
        self.score = 0;
        self.food = place_food(&self.snake, &self.obstacles, &self.config, &mut self.rng);
        self.state = RoundState::Active;
        self.events.clear();
    }

    /// Read-only view of the current state for rendering
    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            body: self.snake.body.clone(),
            food: self.food,
            obstacles: self.obstacles.clone(),
            score: self.score,
            state: self.state,
        }
    }
}
