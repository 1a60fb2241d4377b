use crate::dp::{
    bellman::expected_return,
    ids::{ActionId, StateId},
    model::TransitionModel,
    policy::Policy,
};

/// Extract the greedy policy with respect to `values`.
///
/// Actions are scored in increasing index order and the incumbent is only
/// replaced when strictly beaten, so exact ties keep the lowest action
/// index. The result is fully deterministic for a given model and values.
pub fn greedy_policy<M: TransitionModel>(model: &M, gamma: f64, values: &[f64]) -> Policy {
    let mut actions = Vec::with_capacity(model.state_count());

    for index in 0..model.state_count() {
        let state = StateId::from(index);
        let mut best_action = ActionId::from(0);
        let mut best_value = f64::NEG_INFINITY;

        for action_index in 0..model.action_count() {
            let action = ActionId::from(action_index);
            let expected = expected_return(model, state, action, gamma, values);
            if expected > best_value {
                best_value = expected;
                best_action = action;
            }
        }

        actions.push(best_action);
    }

    Policy::from_actions(actions)
}

/// Improve on `policy` by extracting the greedy policy for `values`.
///
/// Returns whether the new policy differs from the old one at any state,
/// plus the new policy. The old policy is only read.
pub fn improve_policy<M: TransitionModel>(
    model: &M,
    gamma: f64,
    values: &[f64],
    policy: &Policy,
) -> (bool, Policy) {
    let improved = greedy_policy(model, gamma, values);
    let changed = improved != *policy;
    (changed, improved)
}
