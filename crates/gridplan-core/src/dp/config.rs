use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

const DEFAULT_SOLVE_CONFIG_YAML: &str = include_str!("../../config/solve.default.yaml");

/// Solver configuration shared by the policy- and value-iteration drivers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    /// Discount factor, must lie in `[0, 1)`.
    pub gamma: f64,
    /// Sweep cap for one policy evaluation or a full value iteration.
    pub max_sweeps: usize,
    /// Improvement-round cap for policy iteration.
    pub max_rounds: usize,
    /// A sweep whose largest per-state value change is below this converges.
    pub tolerance: f64,
    /// State indices whose value is forced to zero after value iteration
    /// finishes. Empty by default; absorbing goal states go here when the
    /// surrounding environment's conventions call for it.
    pub zero_after_convergence: Vec<usize>,
}

impl Default for SolveConfig {
    fn default() -> Self {
        SolveConfig {
            gamma: 0.9,
            max_sweeps: 1000,
            max_rounds: 1000,
            tolerance: 1e-3,
            zero_after_convergence: Vec::new(),
        }
    }
}

impl SolveConfig {
    /// Parse a solve config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SolveConfigError> {
        let config: SolveConfig = serde_yaml::from_str(yaml).map_err(SolveConfigError::Yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a solve config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, SolveConfigError> {
        let yaml = fs::read_to_string(path).map_err(SolveConfigError::Io)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_SOLVE_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, SolveConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Validate the model-independent constraints.
    pub fn validate(&self) -> Result<(), SolveConfigError> {
        if !self.gamma.is_finite() || !(0.0..1.0).contains(&self.gamma) {
            return Err(SolveConfigError::Invalid(
                "gamma must be finite and in [0, 1)".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(SolveConfigError::Invalid(
                "tolerance must be finite and > 0".to_string(),
            ));
        }
        if self.max_sweeps == 0 {
            return Err(SolveConfigError::Invalid(
                "max_sweeps must be greater than 0".to_string(),
            ));
        }
        if self.max_rounds == 0 {
            return Err(SolveConfigError::Invalid(
                "max_rounds must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate against a concrete model before any sweep begins.
    pub(crate) fn validate_for(&self, state_count: usize) -> Result<(), SolveConfigError> {
        self.validate()?;
        for &state in &self.zero_after_convergence {
            if state >= state_count {
                return Err(SolveConfigError::Invalid(format!(
                    "zero_after_convergence index {state} is out of range for {state_count} states"
                )));
            }
        }
        Ok(())
    }
}

/// Error type for loading and validating `SolveConfig`.
#[derive(Debug)]
pub enum SolveConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for SolveConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveConfigError::Io(err) => write!(f, "failed to read config file: {err}"),
            SolveConfigError::Yaml(err) => write!(f, "failed to parse config YAML: {err}"),
            SolveConfigError::Invalid(err) => write!(f, "invalid solve config: {err}"),
        }
    }
}

impl std::error::Error for SolveConfigError {}
