use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use yew::Reducible;

use super::walk::{self, SolveOutcome, SolveReport, StepOutcome};
use crate::config::WalkerConfig;
use crate::error::{EngineError, RejectReason};
use crate::model::{CellState, Grid};

/// Seed used when neither the config nor the host supplies one.
pub const DEFAULT_SEED: u64 = 0x5eed_3a2e;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Solving,
    Solved,
    Stuck,
}

impl SessionState {
    pub fn label(self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::Solving => "Walking",
            SessionState::Solved => "Solved",
            SessionState::Stuck => "Stuck",
        }
    }
}

/// One board and its walker. Owns all mutable state; the front end only
/// reaches it through `SessionAction`s.
#[derive(Clone, Debug)]
pub struct Session {
    config: WalkerConfig,
    grid: Grid,
    state: SessionState,
    rng: StdRng,
    message: String,
    last_solve: Option<SolveReport>,
    version: u64,
}

/// A default-config session on an `n`×`n` board.
pub fn new_session(n: usize) -> Result<Session, EngineError> {
    Session::new(
        WalkerConfig {
            grid_size: n,
            ..Default::default()
        },
        DEFAULT_SEED,
    )
}

impl Session {
    /// `config.seed` wins over `fallback_seed`.
    pub fn new(config: WalkerConfig, fallback_seed: u64) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::build(config, fallback_seed))
    }

    fn build(config: WalkerConfig, fallback_seed: u64) -> Self {
        let seed = config.seed.unwrap_or(fallback_seed);
        Self {
            grid: Grid::new(config.grid_size),
            config,
            state: SessionState::Idle,
            rng: StdRng::seed_from_u64(seed),
            message: String::new(),
            last_solve: None,
            version: 0,
        }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn last_solve(&self) -> Option<SolveReport> {
        self.last_solve
    }

    pub fn cell_state(&self, row: usize, col: usize) -> Result<CellState, EngineError> {
        self.grid.cell_state(row, col)
    }

    /// Bumped on every accepted change so views can tell when to refresh.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn status_message(&self) -> String {
        self.message.clone()
    }

    /// Flips Empty <-> Wall. Refused on Start, End, the active path, and
    /// for the whole board while the walker is stuck.
    pub fn toggle_wall(&mut self, row: usize, col: usize) -> Result<CellState, EngineError> {
        self.grid.cell_state(row, col)?;
        if self.state == SessionState::Stuck {
            return Err(EngineError::WallEditRejected {
                row,
                col,
                reason: RejectReason::SessionStuck,
            });
        }
        let next = self.grid.toggle_wall(row, col)?;
        self.version += 1;
        Ok(next)
    }

    /// One walk step. `None` once the session is Solved or Stuck; clear the
    /// path to walk again.
    pub fn step(&mut self) -> Option<StepOutcome> {
        if matches!(self.state, SessionState::Solved | SessionState::Stuck) {
            return None;
        }
        let outcome = walk::advance_one(&mut self.grid, &mut self.rng);
        match outcome {
            StepOutcome::Moved(_) => self.state = SessionState::Solving,
            StepOutcome::ReachedGoal(_) | StepOutcome::AlreadyAtGoal => {
                self.state = SessionState::Solved;
                self.message = found_message(self.grid.age());
                log::info!("{}", self.message);
            }
            StepOutcome::DeadEnd => {
                self.state = SessionState::Stuck;
                self.message = death_message(self.grid.age());
                log::info!("{}", self.message);
            }
        }
        self.version += 1;
        Some(outcome)
    }

    /// Runs the restart search to completion or cap. A stuck walk is
    /// discarded first; a solved session is left alone (`None`).
    pub fn solve(&mut self) -> Option<SolveReport> {
        match self.state {
            SessionState::Solved => return None,
            SessionState::Stuck => self.grid.reset_path(),
            SessionState::Idle | SessionState::Solving => {}
        }
        let report = walk::solve(&mut self.grid, &mut self.rng, self.config.limits());
        match report.outcome {
            SolveOutcome::Solved => {
                self.state = SessionState::Solved;
                self.message = found_message(report.age);
            }
            SolveOutcome::NoSolutionFound => {
                self.state = SessionState::Stuck;
                self.message = no_solution_message(report.age);
            }
        }
        log::info!(
            "{} ({} restarts, {} steps)",
            self.message,
            report.restarts,
            report.steps
        );
        self.last_solve = Some(report);
        self.version += 1;
        Some(report)
    }

    pub fn clear_path(&mut self) {
        self.grid.reset_path();
        self.go_idle();
    }

    pub fn clear_board(&mut self) {
        self.grid.reset_board();
        self.go_idle();
    }

    fn go_idle(&mut self) {
        self.state = SessionState::Idle;
        self.message.clear();
        self.last_solve = None;
        self.version += 1;
    }

    /// Starts over on a fresh board built from `config`.
    pub fn reconfigure(&mut self, config: WalkerConfig, fallback_seed: u64) -> Result<(), EngineError> {
        let version = self.version;
        *self = Session::new(config, fallback_seed)?;
        self.version = version + 1;
        Ok(())
    }

    /// Applies a front-end intent. Returns whether anything changed;
    /// refused intents are logged and otherwise ignored.
    pub fn apply(&mut self, action: SessionAction) -> bool {
        let before = self.version;
        match action {
            SessionAction::ToggleWall { row, col } => {
                if let Err(e) = self.toggle_wall(row, col) {
                    log::debug!("{}", e);
                }
            }
            SessionAction::Step => {
                self.step();
            }
            SessionAction::Solve => {
                self.solve();
            }
            SessionAction::ClearPath => self.clear_path(),
            SessionAction::ClearBoard => self.clear_board(),
            SessionAction::Reconfigure { config, seed } => {
                if let Err(e) = self.reconfigure(config, seed) {
                    log::warn!("{}", e);
                }
            }
        }
        self.version != before
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::build(WalkerConfig::default(), DEFAULT_SEED)
    }
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    ToggleWall { row: usize, col: usize },
    Step,
    Solve,
    ClearPath,
    ClearBoard,
    Reconfigure { config: WalkerConfig, seed: u64 },
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if new.apply(action) { Rc::new(new) } else { self }
    }
}

fn death_message(age: usize) -> String {
    format!("No moves available. Died at age {}.", age)
}

fn found_message(age: usize) -> String {
    format!("Purpose found at age {}.", age)
}

fn no_solution_message(age: usize) -> String {
    format!("No solution. Purpose does not exist. Died at age {}.", age)
}
