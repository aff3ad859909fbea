// Biased self-avoiding random walk with restart-on-dead-end.

use rand::Rng;

use super::adjacency::{compute_blocked, BlockedSet};
use crate::model::{Direction, Grid, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved(Direction),
    ReachedGoal(Direction),
    /// Every direction is closed and End is not adjacent; nothing moved.
    DeadEnd,
    /// The walker already stands on End; nothing moved.
    AlreadyAtGoal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved,
    NoSolutionFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveReport {
    pub outcome: SolveOutcome,
    /// Failed walks discarded before the final one.
    pub restarts: u32,
    /// Moves made across every walk of this solve.
    pub steps: u64,
    /// Age of the final walk.
    pub age: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveLimits {
    pub restart_cap: u32,
    pub step_budget: u64,
}

/// Uniform draw in [0, 5]: 0 Up, 1 Left, 2-3 Right, 4-5 Down. Right and Down
/// are twice as likely, pulling the walk toward the bottom-right goal.
pub fn sample_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    match rng.random_range(0..=5u8) {
        0 => Direction::Up,
        1 => Direction::Left,
        2 | 3 => Direction::Right,
        _ => Direction::Down,
    }
}

/// Resamples until an open direction comes up and returns it with the cell it
/// leads to. `None` only when nothing is open.
pub fn pick_direction<R: Rng + ?Sized>(
    blocked: &BlockedSet,
    rng: &mut R,
) -> Option<(Direction, Position)> {
    if blocked.open_directions().next().is_none() {
        return None;
    }
    loop {
        let dir = sample_direction(rng);
        if let Some(next) = blocked.destination(dir) {
            return Some((dir, next));
        }
    }
}

/// One step of the walk at the grid's current position.
pub fn advance_one<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> StepOutcome {
    if grid.at_goal() {
        return StepOutcome::AlreadyAtGoal;
    }
    let blocked = compute_blocked(grid);
    if let Some(dir) = blocked.reaches_goal {
        grid.walk_to(grid.end());
        return StepOutcome::ReachedGoal(dir);
    }
    let Some((dir, next)) = pick_direction(&blocked, rng) else {
        return StepOutcome::DeadEnd;
    };
    grid.walk_to(next);
    log::trace!("walker moved {:?} to ({}, {})", dir, next.row, next.col);
    StepOutcome::Moved(dir)
}

/// Walks until End is reached, restarting from Start on every dead end.
///
/// The current path is continued rather than discarded, so a half-finished
/// step-by-step walk is picked up where it stands. Gives up once more than
/// `restart_cap` restarts would be needed or `step_budget` moves have been
/// spent; the grid then shows the last failed walk.
pub fn solve<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, limits: SolveLimits) -> SolveReport {
    let mut restarts: u32 = 0;
    let mut steps: u64 = 0;
    let outcome = loop {
        if steps >= limits.step_budget {
            log::info!("step budget of {} exhausted", limits.step_budget);
            break SolveOutcome::NoSolutionFound;
        }
        match advance_one(grid, rng) {
            StepOutcome::Moved(_) => steps += 1,
            StepOutcome::ReachedGoal(_) => {
                steps += 1;
                break SolveOutcome::Solved;
            }
            StepOutcome::AlreadyAtGoal => break SolveOutcome::Solved,
            StepOutcome::DeadEnd => {
                if restarts >= limits.restart_cap {
                    log::info!("restart cap of {} exhausted", limits.restart_cap);
                    break SolveOutcome::NoSolutionFound;
                }
                log::debug!("walker died at age {}, restarting", grid.age());
                restarts += 1;
                grid.reset_path();
            }
        }
    };
    SolveReport {
        outcome,
        restarts,
        steps,
        age: grid.age(),
    }
}
