use std::collections::HashMap;

use crate::{ActionId, Policy, SolveConfig, SolveSnapshot, StateId};

#[test]
fn zeroed_policy_covers_every_state_with_action_zero() {
    let policy = Policy::zeroed(4);

    assert_eq!(policy.len(), 4);
    assert!(policy.actions().iter().all(|a| a.index() == 0));
    assert_eq!(policy.action(StateId::from(3)), ActionId::from(0));
}

#[test]
fn render_maps_labels_and_passes_raw_indices_through() {
    let policy = Policy::from_actions(vec![
        ActionId::from(0),
        ActionId::from(2),
        ActionId::from(1),
    ]);
    let labels = HashMap::from([(0, "L"), (1, "R")]);

    let rendered = policy.render(&labels);

    // Action 2 has no label and falls back to its raw index.
    assert_eq!(rendered, vec!["L", "2", "R"]);
}

#[test]
fn snapshot_serializes_solver_outputs_to_json() {
    let config = SolveConfig::default();
    let policy = Policy::from_actions(vec![ActionId::from(1), ActionId::from(0)]);
    let snapshot = SolveSnapshot::new(&config, &[2.0, 0.0], &policy, 7, true);

    assert_eq!(snapshot.schema_version, 1);
    assert_eq!(snapshot.state_count, 2);
    assert_eq!(snapshot.policy, vec![1, 0]);

    let json = snapshot.to_json_string().expect("snapshot should serialize");
    assert!(json.contains("\"schema_version\": 1"));
    assert!(json.contains("\"converged\": true"));
}
