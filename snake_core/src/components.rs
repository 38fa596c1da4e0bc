use crate::Config;

/// One grid cell, in pixel coordinates aligned to the cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step in `direction`
    pub fn step(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// Movement heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The snake body: ordered segments, head at index 0.
///
/// `heading` is the direction committed at the last tick; `pending` is the
/// buffered turn applied at the next one.
#[derive(Debug, Clone)]
pub struct Snake {
    pub body: Vec<Cell>,
    pub heading: Direction,
    pub pending: Direction,
}

impl Snake {
    /// Build the initial body: `length` segments trailing left-to-right
    /// behind the head, heading Right.
    pub fn spawn(config: &Config) -> Self {
        let heading = Direction::Right;
        let head = Cell::new(5 * config.cell_size, 5 * config.cell_size);

        let mut body = Vec::with_capacity(crate::Params::INITIAL_LENGTH);
        for i in 0..crate::Params::INITIAL_LENGTH as i32 {
            body.push(Cell::new(head.x - i * config.cell_size, head.y));
        }

        Self {
            body,
            heading,
            pending: heading,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether `cell` lies on the body behind the head
    pub fn hits_own_body(&self, cell: Cell) -> bool {
        self.body[1..].contains(&cell)
    }

    /// Whether `cell` is occupied by any segment
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }
}
