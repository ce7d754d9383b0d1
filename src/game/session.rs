use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};

use super::command::Direction;
use super::food::Food;
use super::snake::Snake;

/// Difficulty level, fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Snake advances per second of wall-clock time
    pub fn moves_per_second(self) -> f32 {
        match self {
            Difficulty::Easy => 8.0,
            Difficulty::Medium => 12.0,
            Difficulty::Hard => 18.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// One play-through: the snake, its food, and the fixed-step clock.
///
/// Simulation rate is decoupled from frame rate: elapsed frame time
/// accumulates in `move_timer` and the snake advances once per
/// `1 / moves_per_second` carried in it, zero or more times per tick.
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub paused: bool,
    pub difficulty: Difficulty,
    move_timer: f32,
    rng: ThreadRng,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        let snake = Snake::new();
        let mut rng = rand::thread_rng();
        let food = Food::place(&snake, &mut rng);
        Self {
            snake,
            food,
            score: 0,
            paused: false,
            difficulty,
            move_timer: 0.0,
            rng,
        }
    }

    /// Advance the simulation by `dt` elapsed seconds. No-op while paused or
    /// after the snake has died.
    pub fn on_tick(&mut self, dt: f32) {
        if self.paused || !self.snake.alive {
            return;
        }

        self.move_timer += dt;
        let step = 1.0 / self.difficulty.moves_per_second();
        while self.move_timer >= step {
            self.move_timer -= step;
            self.snake.advance();
            if self.snake.alive && self.snake.head() == self.food.position {
                self.snake.mark_fed();
                self.score += 1;
                self.food.respawn(&self.snake, &mut self.rng);
            }
        }
    }

    /// Flip the pause flag. The accumulator is left alone, so time spent
    /// paused is never applied retroactively.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Buffer the next heading; legal at any time, including while paused
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }
}
