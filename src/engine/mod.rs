//! Core snake engine: body bookkeeping, movement, collision detection, and
//! apple placement. Pure game logic with no dependency on rendering or input;
//! randomness is injected so callers (and tests) control the source.

use std::collections::{TryReserveError, VecDeque};

use rand::Rng;

/// Number of cells along each side of the square grid.
pub const GRID_SIZE: i32 = 20;

/// Body length at the start of a game.
pub const INITIAL_LENGTH: usize = 3;

/// Extra capacity reserved for the body whenever it fills up.
pub const CAPACITY_STEP: usize = 10;

const START_HEAD: Cell = Cell { x: 3, y: 3 };
const START_DIRECTION: Direction = Direction::Right;

/// A grid coordinate pair, 0-indexed from the bottom-left corner.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// The neighbouring cell one step in the given direction. May fall
    /// outside the grid; callers check with [`Cell::in_bounds`].
    pub fn step(self, direction: Direction) -> Cell {
        match direction {
            Direction::Left => Cell { x: self.x - 1, y: self.y },
            Direction::Right => Cell { x: self.x + 1, y: self.y },
            Direction::Up => Cell { x: self.x, y: self.y + 1 },
            Direction::Down => Cell { x: self.x, y: self.y - 1 },
        }
    }

    pub fn in_bounds(self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

/// Direction of travel for the snake.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// What a single tick did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// The snake moved one cell; length unchanged.
    Moved,
    /// The snake ate the apple and grew by one cell; a new apple was placed.
    Ate,
    /// The snake hit a wall or itself; the engine is now terminal.
    GameOver,
}

/// The snake game state machine.
///
/// The body is an ordered tail-to-front path of cells: the tail (oldest cell)
/// sits at the front of the deque, the head (most recently occupied cell) at
/// the back. Head and tail are derived from the sequence rather than cached
/// separately. The deque is exclusively owned here; callers observe it
/// through [`SnakeEngine::cells`] and the membership queries.
pub struct SnakeEngine {
    body: VecDeque<Cell>,
    direction: Direction,
    pending: Direction,
    apple: Cell,
    over: bool,
}

impl SnakeEngine {
    /// Creates a running engine: a 3-cell snake in a straight line heading
    /// right, and an apple on a random unoccupied cell.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut body = VecDeque::with_capacity(INITIAL_LENGTH + CAPACITY_STEP);
        for i in (0..INITIAL_LENGTH as i32).rev() {
            body.push_back(Cell { x: START_HEAD.x - i, y: START_HEAD.y });
        }

        let mut engine = SnakeEngine {
            body,
            direction: START_DIRECTION,
            pending: START_DIRECTION,
            // Placeholder; replaced by the respawn below.
            apple: START_HEAD,
            over: false,
        };
        engine.respawn_apple(rng);
        engine
    }

    /// Requests a direction change for the next tick. A request for the exact
    /// opposite of the current direction is ignored so the snake can never
    /// reverse into itself. Repeated calls between ticks are fine; the latest
    /// valid request wins.
    pub fn set_direction(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.pending = requested;
        }
    }

    /// Advances the game by one step: applies the pending direction, moves
    /// the head one cell, and resolves walls, self-collision, and eating.
    ///
    /// Growing the body can allocate; on allocation failure the body is left
    /// exactly as it was and the error is returned instead of a normal
    /// game-over. Ticking a finished game is a no-op.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Result<TickOutcome, TryReserveError> {
        if self.over {
            return Ok(TickOutcome::GameOver);
        }

        self.direction = self.pending;
        let new_head = self.head().step(self.direction);

        // The collision test runs against the entire pre-move body: the cell
        // the tail is about to vacate still counts as occupied, so the snake
        // can never move into it.
        if !new_head.in_bounds() || self.contains(new_head) {
            self.over = true;
            return Ok(TickOutcome::GameOver);
        }

        if new_head == self.apple {
            if self.body.len() == self.body.capacity() {
                self.body.try_reserve(CAPACITY_STEP)?;
            }
            self.body.push_back(new_head);
            self.respawn_apple(rng);
            Ok(TickOutcome::Ate)
        } else {
            self.body.pop_front();
            self.body.push_back(new_head);
            Ok(TickOutcome::Moved)
        }
    }

    /// Whether `cell` is occupied by any part of the body. O(length) scan,
    /// no shortcut for the tail.
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// The body cells in tail-to-head order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn head(&self) -> Cell {
        *self.body.back().expect("snake body is never empty")
    }

    pub fn tail(&self) -> Cell {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Places the apple on a uniformly random unoccupied cell by rejection
    /// sampling. Unbounded retries; acceptable on a 20x20 grid where the
    /// board is essentially never full.
    fn respawn_apple(&mut self, rng: &mut impl Rng) {
        loop {
            let cell = Cell {
                x: rng.random_range(0..GRID_SIZE),
                y: rng.random_range(0..GRID_SIZE),
            };
            if !self.contains(cell) {
                self.apple = cell;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    impl SnakeEngine {
        /// Builds an engine from an explicit tail-to-head body for scenario
        /// tests.
        fn from_parts(cells: &[Cell], direction: Direction, apple: Cell) -> Self {
            SnakeEngine {
                body: cells.iter().copied().collect(),
                direction,
                pending: direction,
                apple,
                over: false,
            }
        }

        fn set_apple(&mut self, cell: Cell) {
            self.apple = cell;
        }
    }

    fn cell(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    fn body_of(engine: &SnakeEngine) -> Vec<Cell> {
        engine.cells().collect()
    }

    fn assert_valid_body(engine: &SnakeEngine) {
        let cells = body_of(engine);
        let unique: HashSet<(i32, i32)> = cells.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(unique.len(), cells.len(), "body has duplicate cells");
        for c in &cells {
            assert!(c.in_bounds(), "body cell {c:?} out of bounds");
        }
        for pair in cells.windows(2) {
            let d = (pair[1].x - pair[0].x).abs() + (pair[1].y - pair[0].y).abs();
            assert_eq!(d, 1, "body not contiguous between {:?} and {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn new_engine_starts_running_with_initial_body() {
        let engine = SnakeEngine::new(&mut rng());

        assert!(!engine.is_over());
        assert_eq!(engine.len(), INITIAL_LENGTH);
        assert_eq!(engine.head(), cell(3, 3));
        assert_eq!(engine.tail(), cell(1, 3));
        assert_valid_body(&engine);
        assert!(!engine.contains(engine.apple()));
        assert!(engine.apple().in_bounds());
    }

    #[test]
    fn translation_shifts_body_toward_head() {
        let mut engine = SnakeEngine::from_parts(
            &[cell(0, 0), cell(1, 0), cell(2, 0)],
            Direction::Right,
            cell(9, 9),
        );

        let outcome = engine.tick(&mut rng()).unwrap();

        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(body_of(&engine), vec![cell(1, 0), cell(2, 0), cell(3, 0)]);
        assert_eq!(engine.apple(), cell(9, 9));
        assert_valid_body(&engine);
    }

    #[test]
    fn eating_grows_by_one_and_keeps_tail() {
        let mut engine = SnakeEngine::from_parts(
            &[cell(0, 0), cell(1, 0), cell(2, 0)],
            Direction::Right,
            cell(3, 0),
        );

        let outcome = engine.tick(&mut rng()).unwrap();

        assert_eq!(outcome, TickOutcome::Ate);
        assert_eq!(
            body_of(&engine),
            vec![cell(0, 0), cell(1, 0), cell(2, 0), cell(3, 0)]
        );
        assert!(!engine.contains(engine.apple()));
        assert_valid_body(&engine);
    }

    #[test]
    fn moving_past_the_last_column_ends_the_game() {
        let mut engine = SnakeEngine::from_parts(
            &[cell(17, 5), cell(18, 5), cell(19, 5)],
            Direction::Right,
            cell(0, 0),
        );

        let outcome = engine.tick(&mut rng()).unwrap();

        assert_eq!(outcome, TickOutcome::GameOver);
        assert!(engine.is_over());
        // The body is untouched by a terminal tick.
        assert_eq!(body_of(&engine), vec![cell(17, 5), cell(18, 5), cell(19, 5)]);
    }

    #[test]
    fn moving_onto_the_last_column_is_legal() {
        let mut engine = SnakeEngine::from_parts(
            &[cell(16, 5), cell(17, 5), cell(18, 5)],
            Direction::Right,
            cell(0, 0),
        );

        assert_eq!(engine.tick(&mut rng()).unwrap(), TickOutcome::Moved);
        assert_eq!(engine.head(), cell(19, 5));
    }

    #[test]
    fn closing_a_loop_onto_the_body_ends_the_game() {
        // Square loop, head at (2,0) turning into the tail cell (2,1).
        let mut engine = SnakeEngine::from_parts(
            &[cell(2, 1), cell(1, 1), cell(1, 0), cell(2, 0)],
            Direction::Right,
            cell(9, 9),
        );
        engine.set_direction(Direction::Up);

        let outcome = engine.tick(&mut rng()).unwrap();

        assert_eq!(outcome, TickOutcome::GameOver);
        assert!(engine.is_over());
    }

    #[test]
    fn tail_cell_still_counts_as_occupied() {
        // The tail would vacate (0,0) this tick, but the collision test runs
        // against the pre-move body, so moving into it is fatal.
        let mut engine = SnakeEngine::from_parts(
            &[cell(0, 0), cell(1, 0), cell(1, 1), cell(0, 1)],
            Direction::Left,
            cell(9, 9),
        );
        engine.set_direction(Direction::Down);

        assert_eq!(engine.tick(&mut rng()).unwrap(), TickOutcome::GameOver);
    }

    #[test]
    fn reversal_requests_are_ignored() {
        let mut engine = SnakeEngine::from_parts(
            &[cell(0, 0), cell(1, 0), cell(2, 0)],
            Direction::Right,
            cell(9, 9),
        );
        engine.set_direction(Direction::Left);

        assert_eq!(engine.tick(&mut rng()).unwrap(), TickOutcome::Moved);
        assert_eq!(engine.head(), cell(3, 0));
    }

    #[test]
    fn latest_valid_direction_request_wins() {
        let mut engine = SnakeEngine::from_parts(
            &[cell(0, 0), cell(1, 0), cell(2, 0)],
            Direction::Right,
            cell(9, 9),
        );
        engine.set_direction(Direction::Up);
        // Opposite of the current direction, ignored even after a valid
        // request was queued.
        engine.set_direction(Direction::Left);

        engine.tick(&mut rng()).unwrap();
        assert_eq!(engine.head(), cell(2, 1));
    }

    #[test]
    fn set_direction_is_idempotent() {
        let mut once = SnakeEngine::from_parts(
            &[cell(0, 0), cell(1, 0), cell(2, 0)],
            Direction::Right,
            cell(9, 9),
        );
        let mut thrice = SnakeEngine::from_parts(
            &[cell(0, 0), cell(1, 0), cell(2, 0)],
            Direction::Right,
            cell(9, 9),
        );

        once.set_direction(Direction::Up);
        for _ in 0..3 {
            thrice.set_direction(Direction::Up);
        }
        once.tick(&mut rng()).unwrap();
        thrice.tick(&mut rng()).unwrap();

        assert_eq!(body_of(&once), body_of(&thrice));
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in [Direction::Up, Direction::Left, Direction::Right, Direction::Down] {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn tick_after_game_over_is_a_noop() {
        let mut engine = SnakeEngine::from_parts(
            &[cell(17, 5), cell(18, 5), cell(19, 5)],
            Direction::Right,
            cell(0, 0),
        );
        engine.tick(&mut rng()).unwrap();
        let before = body_of(&engine);

        assert_eq!(engine.tick(&mut rng()).unwrap(), TickOutcome::GameOver);
        assert_eq!(body_of(&engine), before);
    }

    #[test]
    fn apple_respawns_on_the_only_free_cell() {
        // Boustrophedon path covering the whole grid except the last two
        // cells of the walk, (1,19) and (0,19). Eating the apple at (1,19)
        // leaves exactly one free cell for the respawn.
        let mut path = Vec::new();
        for y in 0..GRID_SIZE {
            if y % 2 == 0 {
                for x in 0..GRID_SIZE {
                    path.push(cell(x, y));
                }
            } else {
                for x in (0..GRID_SIZE).rev() {
                    path.push(cell(x, y));
                }
            }
        }
        path.truncate(path.len() - 2);

        let mut engine = SnakeEngine::from_parts(&path, Direction::Left, cell(1, 19));
        assert_eq!(engine.head(), cell(2, 19));

        assert_eq!(engine.tick(&mut rng()).unwrap(), TickOutcome::Ate);
        assert_eq!(engine.apple(), cell(0, 19));
        assert_valid_body(&engine);
    }

    #[test]
    fn repeated_growth_crosses_capacity_boundaries() {
        let mut engine = SnakeEngine::from_parts(
            &[cell(0, 0), cell(1, 0), cell(2, 0)],
            Direction::Right,
            cell(3, 0),
        );
        let mut r = rng();

        // Eat every tick along a boustrophedon walk: right along row 0, up
        // to row 1, back left. 37 meals take the body well past the initial
        // capacity and through at least one reallocation.
        for step in 0..37 {
            let len_before = engine.len();
            let next = match step {
                0..=16 => engine.head().step(Direction::Right),
                17 => {
                    engine.set_direction(Direction::Up);
                    engine.head().step(Direction::Up)
                }
                _ => {
                    engine.set_direction(Direction::Left);
                    engine.head().step(Direction::Left)
                }
            };
            engine.set_apple(next);

            assert_eq!(engine.tick(&mut r).unwrap(), TickOutcome::Ate);
            assert_eq!(engine.len(), len_before + 1);
            assert_valid_body(&engine);
        }

        assert_eq!(engine.len(), 40);
    }
}
