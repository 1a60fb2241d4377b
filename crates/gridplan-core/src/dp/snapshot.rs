use serde::Serialize;

use crate::dp::{config::SolveConfig, policy::Policy};

/// Serializable record of a finished solve, consumed by external plotting
/// and analysis layers.
#[derive(Debug, Clone, Serialize)]
pub struct SolveSnapshot {
    pub schema_version: u32,
    pub gamma: f64,
    pub state_count: usize,
    pub values: Vec<f64>,
    pub policy: Vec<usize>,
    pub sweeps: usize,
    pub converged: bool,
}

impl SolveSnapshot {
    /// Capture a snapshot from solver outputs.
    pub fn new(
        config: &SolveConfig,
        values: &[f64],
        policy: &Policy,
        sweeps: usize,
        converged: bool,
    ) -> Self {
        SolveSnapshot {
            schema_version: 1,
            gamma: config.gamma,
            state_count: values.len(),
            values: values.to_vec(),
            policy: policy.actions().iter().map(|action| action.index()).collect(),
            sweeps,
            converged,
        }
    }

    /// Pretty-printed JSON form of the snapshot.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
