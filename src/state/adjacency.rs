use crate::model::{CellState, Direction, Grid, Position};

/// Which of the four directions are closed at the walker's position.
///
/// Indexed Up, Left, Right, Down. An open slot holds the in-bounds cell that
/// direction leads to. `reaches_goal` names the direction that steps straight
/// onto End, which is never reported blocked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockedSet {
    open: [Option<Position>; 4],
    pub reaches_goal: Option<Direction>,
}

impl BlockedSet {
    pub fn is_blocked(&self, dir: Direction) -> bool {
        self.open[dir.index()].is_none()
    }

    /// Cell the walker would land on moving `dir`, if that way is open.
    pub fn destination(&self, dir: Direction) -> Option<Position> {
        self.open[dir.index()]
    }

    pub fn open_count(&self) -> usize {
        self.open_directions().count()
    }

    pub fn is_dead_end(&self) -> bool {
        self.reaches_goal.is_none() && self.open_directions().next().is_none()
    }

    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| !self.is_blocked(*d))
    }
}

/// Blocked directions around the walker's current position.
pub fn compute_blocked(grid: &Grid) -> BlockedSet {
    let here = grid.position();
    let mut set = BlockedSet::default();
    for dir in Direction::ALL {
        set.open[dir.index()] = grid
            .neighbor(here, dir)
            .filter(|next| grid.cell(*next) == Some(CellState::Empty));
    }
    // End sits in the bottom-right corner, so it is only ever approached
    // moving Right or Down.
    for dir in [Direction::Right, Direction::Down] {
        let Some(next) = grid.neighbor(here, dir) else { continue };
        if grid.cell(next) == Some(CellState::End) {
            set.open[dir.index()] = Some(next);
            set.reaches_goal = Some(dir);
            break;
        }
    }
    set
}
