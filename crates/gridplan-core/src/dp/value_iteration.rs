use crate::dp::{
    bellman::expected_return,
    config::{SolveConfig, SolveConfigError},
    ids::{ActionId, StateId},
    model::TransitionModel,
};

/// Per-sweep metrics emitted by value iteration.
#[derive(Debug, Clone, Copy)]
pub struct SweepMetrics {
    pub sweep: usize,
    pub delta: f64,
}

/// Result of a value-iteration solve.
#[derive(Debug, Clone)]
pub struct ValueIterationRun {
    pub values: Vec<f64>,
    pub sweeps: usize,
    /// True when the final sweep's delta dropped below the tolerance.
    pub converged: bool,
}

/// Iterate the value function directly to the Bellman optimality fixed point.
pub fn value_iteration<M: TransitionModel>(
    model: &M,
    config: &SolveConfig,
) -> Result<ValueIterationRun, SolveConfigError> {
    value_iteration_with_hook(model, config, |_| {})
}

/// Run value iteration and invoke a callback after each completed sweep.
///
/// Starts from all-zero values. Each sweep assigns every state the best
/// expected return over all actions, in place and in increasing state
/// order, so later states read values already updated this sweep. Stops on
/// `delta < tolerance` or the sweep cap. After the loop, every state listed
/// in `config.zero_after_convergence` has its value forced to zero. Use
/// `greedy_policy` on the result when a policy is required.
pub fn value_iteration_with_hook<M, FHook>(
    model: &M,
    config: &SolveConfig,
    mut on_sweep: FHook,
) -> Result<ValueIterationRun, SolveConfigError>
where
    M: TransitionModel,
    FHook: FnMut(&SweepMetrics),
{
    config.validate_for(model.state_count())?;

    let mut values = vec![0.0; model.state_count()];
    let mut sweeps = 0;
    let mut converged = false;

    while sweeps < config.max_sweeps {
        sweeps += 1;
        let mut delta = 0.0_f64;

        for index in 0..model.state_count() {
            let state = StateId::from(index);
            let mut best = f64::NEG_INFINITY;

            for action_index in 0..model.action_count() {
                let action = ActionId::from(action_index);
                let expected = expected_return(model, state, action, config.gamma, &values);
                best = best.max(expected);
            }

            let previous = values[index];
            values[index] = best;
            delta = delta.max((best - previous).abs());
        }

        on_sweep(&SweepMetrics {
            sweep: sweeps,
            delta,
        });

        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    for &state in &config.zero_after_convergence {
        values[state] = 0.0;
    }

    Ok(ValueIterationRun {
        values,
        sweeps,
        converged,
    })
}
