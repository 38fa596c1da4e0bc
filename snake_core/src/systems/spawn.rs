use crate::{Cell, Config, GameRng, Params, Snake};
use rand::Rng;

/// Uniformly sample a cell in the inner playable area, excluding the outer
/// border row and column.
fn random_inner_cell(config: &Config, rng: &mut GameRng) -> Cell {
    let x = rng.0.gen_range(1..=config.cols() - 2) * config.cell_size;
    let y = rng.0.gen_range(1..=config.rows() - 2) * config.cell_size;
    Cell::new(x, y)
}

/// Place food on a random free cell.
///
/// Retries until the sampled cell avoids the snake body and every obstacle.
pub fn place_food(snake: &Snake, obstacles: &[Cell], config: &Config, rng: &mut GameRng) -> Cell {
    loop {
        let cell = random_inner_cell(config, rng);
        if !snake.occupies(cell) && !obstacles.contains(&cell) {
            return cell;
        }
    }
}

/// Try to place one obstacle on a random free cell.
///
/// Bounded retries; returns None when no free cell was found within the
/// attempt cap, which callers treat as a silent skip.
pub fn try_place_obstacle(
    snake: &Snake,
    food: Cell,
    obstacles: &[Cell],
    config: &Config,
    rng: &mut GameRng,
) -> Option<Cell> {
    for _ in 0..Params::OBSTACLE_MAX_ATTEMPTS {
        let cell = random_inner_cell(config, rng);
        if !snake.occupies(cell) && cell != food && !obstacles.contains(&cell) {
            return Some(cell);
        }
    }
    None
}
