use rand::Rng;

use super::snake::{Position, Snake};
use super::{GRID_COLS, GRID_ROWS};

/// The single food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Place food on a random cell not occupied by the snake
    pub fn place(snake: &Snake, rng: &mut impl Rng) -> Self {
        Self {
            position: random_free_cell(snake, rng),
        }
    }

    /// Move the food to a fresh random cell off the snake's body.
    /// Called after the snake eats it.
    pub fn respawn(&mut self, snake: &Snake, rng: &mut impl Rng) {
        self.position = random_free_cell(snake, rng);
    }
}

/// Sample uniformly until a cell misses the snake body. The grid always has
/// far more cells than the snake has segments, so this terminates.
fn random_free_cell(snake: &Snake, rng: &mut impl Rng) -> Position {
    loop {
        let pos = Position::new(rng.gen_range(0..GRID_COLS), rng.gen_range(0..GRID_ROWS));
        if !snake.body.contains(&pos) {
            return pos;
        }
    }
}
