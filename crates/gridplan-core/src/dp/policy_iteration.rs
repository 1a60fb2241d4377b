use crate::dp::{
    config::{SolveConfig, SolveConfigError},
    evaluate::evaluate_policy,
    greedy::improve_policy,
    model::TransitionModel,
    policy::Policy,
};

/// Per-round metrics emitted by policy iteration.
#[derive(Debug, Clone, Copy)]
pub struct RoundMetrics {
    pub round: usize,
    pub evaluation_sweeps: usize,
    pub policy_changed: bool,
}

/// Result of a policy-iteration solve.
#[derive(Debug, Clone)]
pub struct PolicyIterationRun {
    pub policy: Policy,
    pub values: Vec<f64>,
    pub improvement_rounds: usize,
    pub evaluation_sweeps: usize,
    /// True when improvement reported a stable policy before the round cap.
    pub converged: bool,
}

/// Run policy iteration from the all-zero policy and value function.
pub fn policy_iteration<M: TransitionModel>(
    model: &M,
    config: &SolveConfig,
) -> Result<PolicyIterationRun, SolveConfigError> {
    policy_iteration_with_hook(model, config, |_| {})
}

/// Run policy iteration and invoke a callback after each completed round.
///
/// Each round evaluates the current policy (warm-starting from the previous
/// round's values) and replaces it with the greedy policy of the result.
/// The loop exits early once improvement reports no change; exhausting
/// `config.max_rounds` instead returns the last policy/value pair with
/// `converged` unset rather than an error.
pub fn policy_iteration_with_hook<M, FHook>(
    model: &M,
    config: &SolveConfig,
    mut on_round: FHook,
) -> Result<PolicyIterationRun, SolveConfigError>
where
    M: TransitionModel,
    FHook: FnMut(&RoundMetrics),
{
    config.validate_for(model.state_count())?;

    let mut policy = Policy::zeroed(model.state_count());
    let mut values = vec![0.0; model.state_count()];
    let mut improvement_rounds = 0;
    let mut evaluation_sweeps = 0;
    let mut converged = false;

    for round in 0..config.max_rounds {
        let sweeps = evaluate_policy(model, config, &policy, &mut values);
        let (changed, improved) = improve_policy(model, config.gamma, &values, &policy);
        policy = improved;
        improvement_rounds += 1;
        evaluation_sweeps += sweeps;

        on_round(&RoundMetrics {
            round,
            evaluation_sweeps: sweeps,
            policy_changed: changed,
        });

        if !changed {
            converged = true;
            break;
        }
    }

    Ok(PolicyIterationRun {
        policy,
        values,
        improvement_rounds,
        evaluation_sweeps,
        converged,
    })
}
