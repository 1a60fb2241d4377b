use crate::dp::{
    bellman::expected_return, config::SolveConfig, ids::StateId, model::TransitionModel,
    policy::Policy,
};

/// Evaluate `policy` by iterating `values` in place until they stop moving.
///
/// Runs synchronous sweeps in increasing state order. Each update lands
/// immediately, so later states in the same sweep read values already
/// updated this sweep (Gauss-Seidel, not double-buffered). Stops when the
/// largest per-state change in a sweep drops below `config.tolerance` or
/// after `config.max_sweeps` sweeps, whichever comes first, and returns the
/// sweep count actually used. Hitting the cap is not an error; callers
/// compare the count against `config.max_sweeps` to detect it.
pub fn evaluate_policy<M: TransitionModel>(
    model: &M,
    config: &SolveConfig,
    policy: &Policy,
    values: &mut [f64],
) -> usize {
    let mut sweeps = 0;

    while sweeps < config.max_sweeps {
        sweeps += 1;
        let mut delta = 0.0_f64;

        for index in 0..model.state_count() {
            let state = StateId::from(index);
            let updated =
                expected_return(model, state, policy.action(state), config.gamma, values);
            let previous = values[index];
            values[index] = updated;
            delta = delta.max((updated - previous).abs());
        }

        if delta < config.tolerance {
            break;
        }
    }

    sweeps
}
