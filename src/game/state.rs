use std::time::Duration;

use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
///
/// Body segments are stored head-first and are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// Create a one-cell snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from head-first cells; `None` if `body` is empty
    pub fn from_cells(body: Vec<Position>) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// All cells, head first
    pub fn cells(&self) -> &[Position] {
        &self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// New snake whose head is `cell` followed by every current segment
    pub fn grown_to(&self, cell: Position) -> Self {
        let mut body = Vec::with_capacity(self.body.len() + 1);
        body.push(cell);
        body.extend_from_slice(&self.body);
        Self { body }
    }

    /// New snake whose head is `cell` and whose tail segment is dropped
    pub fn slid_to(&self, cell: Position) -> Self {
        let mut body = Vec::with_capacity(self.body.len());
        body.push(cell);
        body.extend_from_slice(&self.body[..self.body.len() - 1]);
        Self { body }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
    /// The snake covers the whole board
    Won,
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid_size: usize,
    pub snake: Snake,
    pub food: Position,
    /// Heading the snake last moved in
    pub direction: Direction,
    /// Heading the next movement tick will use
    pub next_direction: Direction,
    pub score: u32,
    /// Current movement tick interval in milliseconds
    pub tick_ms: u64,
    pub elapsed_secs: u32,
    pub steps: u32,
    pub status: GameStatus,
}

impl GameState {
    /// Create a running state heading right
    pub fn new(snake: Snake, food: Position, grid_size: usize, tick_ms: u64) -> Self {
        Self {
            grid_size,
            snake,
            food,
            direction: Direction::Right,
            next_direction: Direction::Right,
            score: 0,
            tick_ms,
            elapsed_secs: 0,
            steps: 0,
            status: GameStatus::Running,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let n = self.grid_size as i32;
        (0..n).contains(&pos.x) && (0..n).contains(&pos.y)
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    /// True once the round has ended, by collision or a full board
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver | GameStatus::Won)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Running <-> Paused; returns the new status
    pub fn toggle_pause(&mut self) -> GameStatus {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
        self.status
    }

    /// Queue a heading for the next tick.
    ///
    /// Refused while not running, and for a 180-degree turn against the
    /// heading actually moved in when the snake is longer than one cell.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.snake.len() > 1 && direction.is_opposite(self.direction) {
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Advance the elapsed-time clock by one period
    pub fn tick_clock(&mut self) {
        if self.is_running() {
            self.elapsed_secs += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(cells: &[(i32, i32)]) -> Snake {
        Snake::from_cells(cells.iter().map(|&(x, y)| Position::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_empty_snake_rejected() {
        assert!(Snake::from_cells(Vec::new()).is_none());
    }

    #[test]
    fn test_snake_accessors() {
        let s = snake(&[(5, 5), (4, 5), (3, 5)]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.head(), Position::new(5, 5));
        assert_eq!(s.body_segments(), &[Position::new(4, 5), Position::new(3, 5)]);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_slide_and_grow() {
        let s = snake(&[(5, 5), (4, 5)]);

        let slid = s.slid_to(Position::new(6, 5));
        assert_eq!(slid, snake(&[(6, 5), (5, 5)]));

        let grown = s.grown_to(Position::new(6, 5));
        assert_eq!(grown, snake(&[(6, 5), (5, 5), (4, 5)]));
    }

    #[test]
    fn test_collision_detection() {
        let s = snake(&[(5, 5), (4, 5), (3, 5)]);
        assert!(!s.collides_with_body(Position::new(5, 5))); // head
        assert!(s.collides_with_body(Position::new(4, 5))); // body
        assert!(!s.collides_with_body(Position::new(10, 10))); // empty
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(Snake::new(Position::new(5, 5)), Position::new(10, 10), 20, 340);

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_toggle_pause() {
        let mut state = GameState::new(Snake::new(Position::new(5, 5)), Position::new(1, 1), 10, 340);
        assert_eq!(state.toggle_pause(), GameStatus::Paused);
        assert!(state.is_paused());
        assert_eq!(state.toggle_pause(), GameStatus::Running);

        state.status = GameStatus::GameOver;
        assert_eq!(state.toggle_pause(), GameStatus::GameOver);
    }

    #[test]
    fn test_reverse_request_blocked_for_long_snake() {
        let mut state = GameState::new(snake(&[(5, 5), (4, 5)]), Position::new(1, 1), 10, 340);
        assert!(!state.request_direction(Direction::Left));
        assert_eq!(state.next_direction, Direction::Right);

        assert!(state.request_direction(Direction::Up));
        // Still compared against the heading last moved in
        assert!(!state.request_direction(Direction::Left));
        assert_eq!(state.next_direction, Direction::Up);
    }

    #[test]
    fn test_reverse_request_allowed_for_single_cell() {
        let mut state = GameState::new(Snake::new(Position::new(5, 5)), Position::new(1, 1), 10, 340);
        assert!(state.request_direction(Direction::Left));
        assert_eq!(state.next_direction, Direction::Left);
    }

    #[test]
    fn test_requests_ignored_while_paused() {
        let mut state = GameState::new(Snake::new(Position::new(5, 5)), Position::new(1, 1), 10, 340);
        state.toggle_pause();
        assert!(!state.request_direction(Direction::Up));
        assert_eq!(state.next_direction, Direction::Right);
    }

    #[test]
    fn test_clock_only_runs_while_running() {
        let mut state = GameState::new(Snake::new(Position::new(5, 5)), Position::new(1, 1), 10, 340);
        state.tick_clock();
        assert_eq!(state.elapsed_secs, 1);

        state.toggle_pause();
        state.tick_clock();
        assert_eq!(state.elapsed_secs, 1);

        state.toggle_pause();
        state.status = GameStatus::GameOver;
        state.tick_clock();
        assert_eq!(state.elapsed_secs, 1);
    }
}
