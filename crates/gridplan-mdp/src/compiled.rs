use std::collections::HashMap;

use gridplan_core::{ActionId, Outcome, StateId, TransitionModel};

use crate::{MdpError, MdpSpec};

/// Floating point tolerance used when validating probability sums.
pub(crate) const PROB_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone)]
/// Runtime form of an MDP with string ids resolved to dense indices and
/// outcome rows laid out for solver sweeps.
pub struct CompiledMdp {
    action_count: usize,
    states: Vec<StateRec>,
    state_ids: Vec<String>,
    state_id_to_index: HashMap<String, usize>,
}

#[derive(Debug, Clone)]
struct StateRec {
    terminal: bool,
    actions: Vec<Vec<Outcome>>,
}

impl CompiledMdp {
    /// Compile and validate a spec into a fast runtime representation.
    pub(crate) fn from_spec(spec: &MdpSpec) -> Result<Self, MdpError> {
        spec.validate_with_tolerance(PROB_TOLERANCE)?;

        let mut state_id_to_index = HashMap::with_capacity(spec.states.len());
        let mut state_ids = Vec::with_capacity(spec.states.len());

        for (idx, state) in spec.states.iter().enumerate() {
            state_id_to_index.insert(state.id.clone(), idx);
            state_ids.push(state.id.clone());
        }

        let terminal_flags: Vec<bool> = spec
            .states
            .iter()
            .map(|state| state.terminal.unwrap_or(false))
            .collect();

        let action_count = spec
            .states
            .iter()
            .find(|state| !state.terminal.unwrap_or(false))
            .map(|state| state.actions.as_deref().unwrap_or(&[]).len())
            .unwrap_or(0);

        let mut states = Vec::with_capacity(spec.states.len());
        for (idx, state) in spec.states.iter().enumerate() {
            let terminal = terminal_flags[idx];
            let mut actions = Vec::with_capacity(action_count);

            if terminal {
                // Self-loop rows keep the table total over every action.
                for _ in 0..action_count {
                    actions.push(vec![Outcome {
                        probability: 1.0,
                        next: StateId::from(idx),
                        reward: 0.0,
                        terminal: true,
                    }]);
                }
            } else {
                for action in state.actions.as_deref().unwrap_or(&[]) {
                    let mut outcomes = Vec::with_capacity(action.outcomes.len());

                    for outcome in &action.outcomes {
                        let next = *state_id_to_index.get(&outcome.next).ok_or_else(|| {
                            MdpError::UnknownNextState {
                                state: state.id.clone(),
                                action: action.id.clone(),
                                next: outcome.next.clone(),
                            }
                        })?;

                        outcomes.push(Outcome {
                            probability: outcome.prob,
                            next: StateId::from(next),
                            reward: outcome.reward,
                            terminal: terminal_flags[next],
                        });
                    }

                    actions.push(outcomes);
                }
            }

            states.push(StateRec { terminal, actions });
        }

        Ok(Self {
            action_count,
            states,
            state_ids,
            state_id_to_index,
        })
    }

    /// Check whether a state is terminal.
    pub fn is_terminal(&self, state: StateId) -> Option<bool> {
        self.states.get(state.index()).map(|state| state.terminal)
    }

    /// Convert a state index back to its original string id.
    pub fn state_id(&self, state: StateId) -> Option<&str> {
        self.state_ids.get(state.index()).map(String::as_str)
    }

    /// Convert a string id into a dense state index.
    pub fn state_index(&self, id: &str) -> Option<StateId> {
        self.state_id_to_index.get(id).copied().map(StateId::from)
    }
}

impl TransitionModel for CompiledMdp {
    fn state_count(&self) -> usize {
        self.states.len()
    }

    fn action_count(&self) -> usize {
        self.action_count
    }

    fn outcomes(&self, state: StateId, action: ActionId) -> &[Outcome] {
        &self.states[state.index()].actions[action.index()]
    }
}
