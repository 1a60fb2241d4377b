use crate::dp::{
    ids::{ActionId, StateId},
    model::TransitionModel,
};

/// Probability-weighted one-step backup for `(state, action)` under `values`.
///
/// Sums `P * (R + gamma * V(next))` over the outcomes of the pair, except
/// that a terminal outcome replaces the continuation term with zero. Every
/// solver procedure routes its backup through this one function.
pub fn expected_return<M: TransitionModel>(
    model: &M,
    state: StateId,
    action: ActionId,
    gamma: f64,
    values: &[f64],
) -> f64 {
    let mut expected = 0.0;

    for outcome in model.outcomes(state, action) {
        let continuation = if outcome.terminal {
            0.0
        } else {
            gamma * values[outcome.next.index()]
        };
        expected += outcome.probability * (outcome.reward + continuation);
    }

    expected
}
