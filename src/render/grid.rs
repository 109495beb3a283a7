use crate::game::{GameState, Position};

/// What occupies a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Snake,
    Food,
    Empty,
}

/// Classify every cell of the board, rows indexed by y.
///
/// A snake segment hides food on the same cell.
pub fn classify_grid(state: &GameState) -> Vec<Vec<CellKind>> {
    let n = state.grid_size as i32;
    (0..n)
        .map(|y| {
            (0..n)
                .map(|x| {
                    let pos = Position::new(x, y);
                    if state.snake.contains(pos) {
                        CellKind::Snake
                    } else if pos == state.food {
                        CellKind::Food
                    } else {
                        CellKind::Empty
                    }
                })
                .collect()
        })
        .collect()
}
