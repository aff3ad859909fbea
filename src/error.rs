use std::fmt;

use thiserror::Error;

/// Why a wall toggle was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Start and End are reserved sentinels.
    Reserved,
    /// The cell belongs to the active path (Visited or Current).
    OnPath,
    /// Walls are locked while the walker is stuck.
    SessionStuck,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RejectReason::Reserved => "cell is reserved",
            RejectReason::OnPath => "cell is on the active path",
            RejectReason::SessionStuck => "walker is stuck",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("coordinate ({row}, {col}) is outside a {size}x{size} grid")]
    InvalidCoordinate { row: usize, col: usize, size: usize },
    #[error("wall edit at ({row}, {col}) rejected: {reason}")]
    WallEditRejected {
        row: usize,
        col: usize,
        reason: RejectReason,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config json error: {0}")]
    Config(#[from] serde_json::Error),
}
