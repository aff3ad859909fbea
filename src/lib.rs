//! Maze Walker engine: draw walls on a square board, then let a biased
//! random walker find its way from the top-left Start to the bottom-right
//! End, restarting from scratch whenever it boxes itself in.
//!
//! The web front end (`main.rs`) only dispatches [`state::SessionAction`]s
//! and renders what a [`state::Session`] publishes.

pub mod config;
pub mod error;
pub mod model;
pub mod state;

pub use config::WalkerConfig;
pub use error::{EngineError, RejectReason};
pub use model::{CellState, Direction, Grid, Position};
pub use state::{new_session, Session, SessionAction, SessionState, SolveOutcome, SolveReport, StepOutcome};
