use crate::{Cell, Direction, Snake};

/// Buffer a turn for the next tick.
///
/// A reversal onto the committed heading is rejected outright rather than
/// queued, so the snake can never fold back through itself in one tick.
pub fn set_direction(snake: &mut Snake, direction: Direction) {
    if direction != snake.heading.opposite() {
        snake.pending = direction;
    }
}

/// Advance the snake one cell, growing when it reaches the food.
///
/// Commits the pending heading, prepends the new head and, unless food was
/// eaten, drops the tail so the body length is unchanged. Returns true when
/// the head landed on the food.
pub fn advance_snake(snake: &mut Snake, food: Cell, cell_size: i32) -> bool {
    snake.heading = snake.pending;
    let new_head = snake.head().step(snake.heading, cell_size);
    snake.body.insert(0, new_head);

    let ate = new_head == food;
    if !ate {
        snake.body.pop();
    }
    ate
}
