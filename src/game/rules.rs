//! Pure transition functions over snakes and boards.

use rand::Rng;
use rand::seq::SliceRandom;

use super::direction::Direction;
use super::state::{Position, Snake};

/// Slide the snake one cell: new head in front, tail dropped
pub fn move_snake(snake: &Snake, direction: Direction) -> Snake {
    let new_head = snake.head().moved_in_direction(direction);
    snake.slid_to(new_head)
}

/// True if the head is off an `grid_size`-square board or on a body cell
pub fn is_collision(snake: &Snake, grid_size: usize) -> bool {
    let head = snake.head();
    let n = grid_size as i32;
    head.x < 0 || head.x >= n || head.y < 0 || head.y >= n || snake.collides_with_body(head)
}

/// Pick a uniformly random cell not covered by the snake
///
/// Returns `None` when the snake fills the board.
pub fn spawn_food<R: Rng + ?Sized>(snake: &Snake, grid_size: usize, rng: &mut R) -> Option<Position> {
    let n = grid_size as i32;
    let free: Vec<Position> = (0..n)
        .flat_map(|y| (0..n).map(move |x| Position::new(x, y)))
        .filter(|pos| !snake.contains(*pos))
        .collect();
    free.choose(rng).copied()
}
