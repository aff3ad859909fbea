use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::state::SolveLimits;

/// Board size and search caps. Missing fields fall back to the defaults, so
/// older saved settings keep loading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    pub grid_size: usize,
    /// Failed walks a single solve may discard before giving up.
    pub restart_cap: u32,
    /// Total moves a single solve may spend across all its walks.
    pub step_budget: u64,
    /// Fixed RNG seed for reproducible walks.
    pub seed: Option<u64>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            grid_size: 8,
            restart_cap: 10_000,
            step_budget: 2_000_000,
            seed: None,
        }
    }
}

impl WalkerConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(EngineError::InvalidConfig(format!(
                "grid_size must be within {}..={}, got {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE, self.grid_size
            )));
        }
        if self.step_budget == 0 {
            return Err(EngineError::InvalidConfig(
                "step_budget must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn limits(&self) -> SolveLimits {
        SolveLimits {
            restart_cap: self.restart_cap,
            step_budget: self.step_budget,
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, EngineError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_board() {
        let cfg = WalkerConfig::default();
        assert_eq!(cfg.grid_size, 8);
        assert_eq!(cfg.restart_cap, 10_000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = WalkerConfig::from_json_str(r#"{"grid_size": 12}"#).unwrap();
        assert_eq!(cfg.grid_size, 12);
        assert_eq!(cfg.restart_cap, 10_000);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn json_keeps_seed() {
        let cfg = WalkerConfig {
            seed: Some(99),
            ..Default::default()
        };
        let s = cfg.to_json_string().unwrap();
        assert_eq!(WalkerConfig::from_json_str(&s).unwrap(), cfg);
    }

    #[test]
    fn rejects_out_of_range_sizes() {
        for size in [0, 1, 33] {
            let cfg = WalkerConfig {
                grid_size: size,
                ..Default::default()
            };
            assert!(matches!(cfg.validate(), Err(EngineError::InvalidConfig(_))));
        }
    }

    #[test]
    fn rejects_zero_step_budget_and_bad_json() {
        assert!(matches!(
            WalkerConfig::from_json_str(r#"{"step_budget": 0}"#),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            WalkerConfig::from_json_str("{not json"),
            Err(EngineError::Config(_))
        ));
    }
}
