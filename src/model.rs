//! Core data models for Maze Walker.
//! The board is a square, row-major grid of cell states with a fixed Start in
//! the top-left corner and a fixed End in the bottom-right corner.

use crate::error::{EngineError, RejectReason};

pub const MIN_GRID_SIZE: usize = 2;
pub const MAX_GRID_SIZE: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    /// Free floor the walker may enter.
    Empty,
    /// User-placed obstacle.
    Wall,
    /// Where every walk begins. Never overwritten.
    Start,
    /// The goal. Never overwritten, entered only through goal adjacency.
    End,
    /// Left behind by the walker on the active path.
    Visited,
    /// The walker's frontier.
    Current,
}

impl CellState {
    pub fn is_reserved(self) -> bool {
        matches!(self, CellState::Start | CellState::End)
    }

    pub fn is_path(self) -> bool {
        matches!(self, CellState::Visited | CellState::Current)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    /// (row, col) delta.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }
}

/// N×N board plus the walker's position and the trail it has walked since
/// the last reset. Only built through `Grid::new`, so the cell vector, the
/// sentinels and the non-empty trail always agree with `size`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Row-major cells; length = size * size.
    cells: Vec<CellState>,
    start: Position,
    end: Position,
    position: Position,
    /// Positions from Start to the walker, inclusive.
    trail: Vec<Position>,
}

impl Grid {
    /// Start sits at (0, 0) and End at (size - 1, size - 1). Sizes below
    /// `MIN_GRID_SIZE` are raised to it so Start and End never coincide.
    pub fn new(size: usize) -> Self {
        let size = size.max(MIN_GRID_SIZE);
        let start = Position::new(0, 0);
        let end = Position::new(size - 1, size - 1);
        let mut cells = vec![CellState::Empty; size * size];
        cells[start.row * size + start.col] = CellState::Start;
        cells[end.row * size + end.col] = CellState::End;
        Self {
            size,
            cells,
            start,
            end,
            position: start,
            trail: vec![start],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn trail(&self) -> &[Position] {
        &self.trail
    }

    /// Moves made since the last reset, i.e. cells left behind on the path.
    pub fn age(&self) -> usize {
        self.trail.len().saturating_sub(1)
    }

    pub fn at_goal(&self) -> bool {
        self.position == self.end
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn idx(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    pub fn cell(&self, pos: Position) -> Option<CellState> {
        if self.in_bounds(pos.row, pos.col) {
            Some(self.cells[self.idx(pos)])
        } else {
            None
        }
    }

    pub fn cell_state(&self, row: usize, col: usize) -> Result<CellState, EngineError> {
        self.cell(Position::new(row, col))
            .ok_or(EngineError::InvalidCoordinate {
                row,
                col,
                size: self.size,
            })
    }

    /// Row-major snapshot for rendering.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| **c == state).count()
    }

    /// Neighbour of `pos` in `dir`, or `None` when it would leave the grid.
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        self.in_bounds(row, col).then_some(Position::new(row, col))
    }

    /// Flips Empty <-> Wall and returns the new state.
    pub fn toggle_wall(&mut self, row: usize, col: usize) -> Result<CellState, EngineError> {
        let current = self.cell_state(row, col)?;
        let reject = |reason| EngineError::WallEditRejected { row, col, reason };
        let next = match current {
            CellState::Empty => CellState::Wall,
            CellState::Wall => CellState::Empty,
            CellState::Start | CellState::End => return Err(reject(RejectReason::Reserved)),
            CellState::Visited | CellState::Current => return Err(reject(RejectReason::OnPath)),
        };
        let i = self.idx(Position::new(row, col));
        self.cells[i] = next;
        Ok(next)
    }

    /// Leaves the current cell behind and moves the walker one cell in `dir`.
    /// Start and End keep their sentinel states. Returns the new position, or
    /// `None` (grid untouched) when `dir` would leave the board. Whether the
    /// target cell is open is the caller's concern.
    pub fn step_to(&mut self, dir: Direction) -> Option<Position> {
        let next = self.neighbor(self.position, dir)?;
        self.walk_to(next);
        Some(next)
    }

    /// Moves the walker onto `next`, an in-bounds neighbour of its position.
    pub(crate) fn walk_to(&mut self, next: Position) {
        debug_assert!(
            self.position.row.abs_diff(next.row) + self.position.col.abs_diff(next.col) == 1,
            "walker can only move to a neighbour"
        );
        let here = self.idx(self.position);
        if self.cells[here] == CellState::Current {
            self.cells[here] = CellState::Visited;
        }
        let there = self.idx(next);
        if !self.cells[there].is_reserved() {
            self.cells[there] = CellState::Current;
        }
        self.position = next;
        self.trail.push(next);
    }

    /// Clears the active path and puts the walker back on Start. Walls stay.
    pub fn reset_path(&mut self) {
        for c in self.cells.iter_mut() {
            if c.is_path() {
                *c = CellState::Empty;
            }
        }
        self.position = self.start;
        self.trail.clear();
        self.trail.push(self.start);
    }

    /// Clears walls and the active path.
    pub fn reset_board(&mut self) {
        for c in self.cells.iter_mut() {
            if *c == CellState::Wall {
                *c = CellState::Empty;
            }
        }
        self.reset_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_empty(grid: &Grid) -> Vec<CellState> {
        grid.cells()
            .iter()
            .copied()
            .filter(|c| *c != CellState::Empty)
            .collect()
    }

    #[test]
    fn new_grid_has_only_start_and_end() {
        let g = Grid::new(8);
        assert_eq!(g.cell_state(0, 0).unwrap(), CellState::Start);
        assert_eq!(g.cell_state(7, 7).unwrap(), CellState::End);
        assert_eq!(g.count(CellState::Empty), 62);
        assert_eq!(g.position(), g.start());
        assert_eq!(g.age(), 0);
    }

    #[test]
    fn tiny_sizes_are_raised() {
        let g = Grid::new(0);
        assert_eq!(g.size(), MIN_GRID_SIZE);
        assert_ne!(g.start(), g.end());
    }

    #[test]
    fn every_size_starts_consistent() {
        for size in 0..=MAX_GRID_SIZE {
            let g = Grid::new(size);
            let n = g.size();
            assert_eq!(g.cells().len(), n * n);
            assert_eq!(g.cell(g.start()), Some(CellState::Start));
            assert_eq!(g.cell(g.end()), Some(CellState::End));
            assert_eq!(g.count(CellState::Start), 1);
            assert_eq!(g.count(CellState::End), 1);
            assert_eq!(g.trail(), &[g.start()]);
            assert_eq!(g.age(), 0);
            assert_eq!(g.cell(Position::new(n - 1, 0)), Some(CellState::Empty));
        }
    }

    #[test]
    fn cell_state_rejects_out_of_range() {
        let g = Grid::new(4);
        assert!(matches!(
            g.cell_state(4, 0),
            Err(EngineError::InvalidCoordinate { row: 4, col: 0, size: 4 })
        ));
    }

    #[test]
    fn toggle_wall_flips_and_restores() {
        let mut g = Grid::new(8);
        assert_eq!(g.toggle_wall(3, 4).unwrap(), CellState::Wall);
        assert_eq!(g.cell_state(3, 4).unwrap(), CellState::Wall);
        assert_eq!(g.toggle_wall(3, 4).unwrap(), CellState::Empty);
        assert_eq!(g.cell_state(3, 4).unwrap(), CellState::Empty);
    }

    #[test]
    fn toggle_wall_refuses_sentinels_and_path() {
        let mut g = Grid::new(8);
        assert!(matches!(
            g.toggle_wall(0, 0),
            Err(EngineError::WallEditRejected { reason: RejectReason::Reserved, .. })
        ));
        assert!(matches!(
            g.toggle_wall(7, 7),
            Err(EngineError::WallEditRejected { reason: RejectReason::Reserved, .. })
        ));
        g.step_to(Direction::Right);
        g.step_to(Direction::Right);
        assert!(matches!(
            g.toggle_wall(0, 1),
            Err(EngineError::WallEditRejected { reason: RejectReason::OnPath, .. })
        ));
        assert!(matches!(
            g.toggle_wall(0, 2),
            Err(EngineError::WallEditRejected { reason: RejectReason::OnPath, .. })
        ));
        assert!(matches!(g.toggle_wall(9, 0), Err(EngineError::InvalidCoordinate { .. })));
    }

    #[test]
    fn step_to_leaves_visited_trail() {
        let mut g = Grid::new(8);
        assert_eq!(g.step_to(Direction::Down), Some(Position::new(1, 0)));
        assert_eq!(g.step_to(Direction::Right), Some(Position::new(1, 1)));
        assert_eq!(g.cell_state(0, 0).unwrap(), CellState::Start);
        assert_eq!(g.cell_state(1, 0).unwrap(), CellState::Visited);
        assert_eq!(g.cell_state(1, 1).unwrap(), CellState::Current);
        assert_eq!(g.age(), 2);
        assert_eq!(
            g.trail(),
            &[Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn step_to_refuses_leaving_the_board() {
        let mut g = Grid::new(8);
        assert_eq!(g.step_to(Direction::Up), None);
        assert_eq!(g.step_to(Direction::Left), None);
        assert_eq!(g.position(), g.start());
        assert_eq!(g.age(), 0);
    }

    #[test]
    fn entering_end_keeps_sentinel() {
        let mut g = Grid::new(2);
        g.step_to(Direction::Right);
        g.step_to(Direction::Down);
        assert!(g.at_goal());
        assert_eq!(g.cell_state(1, 1).unwrap(), CellState::End);
        assert_eq!(g.cell_state(0, 1).unwrap(), CellState::Visited);
        assert_eq!(g.count(CellState::Current), 0);
    }

    #[test]
    fn reset_path_keeps_walls() {
        let mut g = Grid::new(8);
        g.toggle_wall(5, 5).unwrap();
        g.step_to(Direction::Right);
        g.step_to(Direction::Down);
        g.reset_path();
        assert_eq!(g.position(), g.start());
        assert_eq!(g.age(), 0);
        assert_eq!(
            non_empty(&g),
            vec![CellState::Start, CellState::Wall, CellState::End]
        );
    }

    #[test]
    fn reset_board_clears_everything_but_sentinels() {
        let mut g = Grid::new(8);
        g.toggle_wall(2, 3).unwrap();
        g.toggle_wall(6, 1).unwrap();
        g.step_to(Direction::Down);
        g.reset_board();
        assert_eq!(non_empty(&g), vec![CellState::Start, CellState::End]);
        assert_eq!(g.trail(), &[g.start()]);
    }
}
