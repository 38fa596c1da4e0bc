/// Game tuning parameters for Snake
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    pub const GRID_WIDTH: i32 = 600;
    pub const GRID_HEIGHT: i32 = 400;
    pub const CELL_SIZE: i32 = 20;

    /// Suggested shell tick period
    pub const TICK_DELAY_MS: u64 = 100;

    pub const INITIAL_LENGTH: usize = 3;

    /// Score at which obstacles begin to appear
    pub const OBSTACLE_START_SCORE: u32 = 10;
    /// New obstacle every this many points past the start score
    pub const OBSTACLE_INTERVAL: u32 = 2;
    /// Placement attempts before an obstacle spawn is silently skipped
    pub const OBSTACLE_MAX_ATTEMPTS: u32 = 50;
}

/// Game configuration. Grid dimensions are in pixels and must be multiples
/// of `cell_size`.
#[derive(Debug, Clone)]
pub struct Config {
    pub grid_width: i32,
    pub grid_height: i32,
    pub cell_size: i32,
    pub tick_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: Params::GRID_WIDTH,
            grid_height: Params::GRID_HEIGHT,
            cell_size: Params::CELL_SIZE,
            tick_delay_ms: Params::TICK_DELAY_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells across
    pub fn cols(&self) -> i32 {
        self.grid_width / self.cell_size
    }

    /// Number of cells down
    pub fn rows(&self) -> i32 {
        self.grid_height / self.cell_size
    }

    /// Whether a cell lies inside the playable grid
    pub fn in_bounds(&self, cell: crate::Cell) -> bool {
        cell.x >= 0 && cell.x < self.grid_width && cell.y >= 0 && cell.y < self.grid_height
    }
}
