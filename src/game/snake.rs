use super::command::Direction;
use super::{GRID_COLS, GRID_ROWS};

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// One step in a direction, wrapped onto the torus
    pub fn wrapped_step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx).rem_euclid(GRID_COLS),
            y: (self.y + dy).rem_euclid(GRID_ROWS),
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current heading; applied on the next advance
    pub direction: Direction,
    /// False once the snake has run into itself
    pub alive: bool,
    /// Segments still owed from food eaten but not yet digested
    pub pending_growth: u32,
}

impl Snake {
    /// Create a new snake in the starting configuration: three horizontal
    /// segments centered on the grid, heading right.
    pub fn new() -> Self {
        let cx = GRID_COLS / 2;
        let cy = GRID_ROWS / 2;
        Self {
            body: vec![
                Position::new(cx, cy),
                Position::new(cx - 1, cy),
                Position::new(cx - 2, cy),
            ],
            direction: Direction::Right,
            alive: true,
            pending_growth: 0,
        }
    }

    /// Restore the starting configuration
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Change heading. A 180-degree turn is silently ignored so the snake
    /// can never reverse into its own neck.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.direction.is_opposite(direction) {
            return;
        }
        self.direction = direction;
    }

    /// Queue one segment of growth; the body lengthens on the next advance,
    /// not immediately.
    pub fn mark_fed(&mut self) {
        self.pending_growth += 1;
    }

    /// Advance one cell in the current heading.
    ///
    /// The new head wraps around the grid edges. Self-collision is checked
    /// against the whole pre-advance body, tail cell included, and kills the
    /// snake without touching the body. No-op once dead.
    pub fn advance(&mut self) {
        if !self.alive {
            return;
        }

        let new_head = self.head().wrapped_step(self.direction);
        if self.body.contains(&new_head) {
            self.alive = false;
            return;
        }

        self.body.insert(0, new_head);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop();
        }
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
