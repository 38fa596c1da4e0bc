use crate::{Cell, Config, Snake};

/// Whether the snake's head position ends the round: off the grid, into its
/// own body, or into an obstacle.
pub fn is_fatal(snake: &Snake, obstacles: &[Cell], config: &Config) -> bool {
    let head = snake.head();

    if !config.in_bounds(head) {
        return true;
    }
    if snake.hits_own_body(head) {
        return true;
    }
    obstacles.contains(&head)
}
