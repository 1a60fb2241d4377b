use std::collections::HashMap;

use crate::dp::ids::{ActionId, StateId};

/// Deterministic policy: exactly one action per state.
///
/// Improvement replaces the whole mapping; nothing edits entries in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    actions: Vec<ActionId>,
}

impl Policy {
    /// Create the all-zero-action policy over `state_count` states.
    pub fn zeroed(state_count: usize) -> Self {
        Policy {
            actions: vec![ActionId::from(0); state_count],
        }
    }

    /// Build a policy from one action per state, in state order.
    pub fn from_actions(actions: Vec<ActionId>) -> Self {
        Policy { actions }
    }

    /// Action the policy chooses for `state`.
    pub fn action(&self, state: StateId) -> ActionId {
        self.actions[state.index()]
    }

    /// All chosen actions in state order.
    pub fn actions(&self) -> &[ActionId] {
        &self.actions
    }

    /// Number of states the policy covers.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Render one label per state using a caller-supplied action label map.
    /// Actions without a label pass through as their raw index in decimal.
    pub fn render(&self, labels: &HashMap<usize, &str>) -> Vec<String> {
        self.actions
            .iter()
            .map(|action| match labels.get(&action.index()) {
                Some(label) => (*label).to_string(),
                None => action.index().to_string(),
            })
            .collect()
    }
}
