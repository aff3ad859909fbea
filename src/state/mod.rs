pub mod adjacency;
pub mod session;
pub mod walk;

pub use adjacency::{compute_blocked, BlockedSet};
pub use session::{new_session, Session, SessionAction, SessionState};
pub use walk::{advance_one, solve, SolveLimits, SolveOutcome, SolveReport, StepOutcome};
