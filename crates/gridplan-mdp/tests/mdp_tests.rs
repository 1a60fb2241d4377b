use gridplan_core::{
    ActionId, SolveConfig, StateId, TransitionModel, policy_iteration, value_iteration,
};
use gridplan_mdp::{MdpBuilder, MdpError, MdpSpec};

const VALID_MDP_YAML: &str = r#"
version: 1
states:
  - id: s0
    terminal: false
    actions:
      - id: stay
        outcomes:
          - next: s0
            prob: 0.3
            reward: 0.0
          - next: s1
            prob: 0.7
            reward: 1.0
      - id: leave
        outcomes:
          - next: s1
            prob: 1.0
            reward: -0.2
  - id: s1
    terminal: true
"#;

#[test]
fn yaml_parse_and_compile_success() {
    let spec: MdpSpec = serde_yaml::from_str(VALID_MDP_YAML).expect("valid yaml");
    let compiled = spec.compile().expect("compile should succeed");

    assert_eq!(compiled.state_count(), 2);
    assert_eq!(compiled.action_count(), 2);
    assert_eq!(compiled.state_id(StateId::from(0)), Some("s0"));
    assert_eq!(compiled.state_index("s1"), Some(StateId::from(1)));
    assert_eq!(compiled.is_terminal(StateId::from(1)), Some(true));
}

#[test]
fn outcomes_into_terminal_states_carry_the_terminal_flag() {
    let spec: MdpSpec = serde_yaml::from_str(VALID_MDP_YAML).expect("valid yaml");
    let compiled = spec.compile().expect("compile should succeed");

    let stay = compiled.outcomes(StateId::from(0), ActionId::from(0));
    assert_eq!(stay.len(), 2);
    assert!(!stay[0].terminal);
    assert!(stay[1].terminal);
}

#[test]
fn terminal_states_get_synthesized_self_loop_rows() {
    let spec: MdpSpec = serde_yaml::from_str(VALID_MDP_YAML).expect("valid yaml");
    let compiled = spec.compile().expect("compile should succeed");

    for action in 0..compiled.action_count() {
        let row = compiled.outcomes(StateId::from(1), ActionId::from(action));
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].probability, 1.0);
        assert_eq!(row[0].next, StateId::from(1));
        assert_eq!(row[0].reward, 0.0);
        assert!(row[0].terminal);
    }
}

#[test]
fn validation_fails_for_probability_sum() {
    let yaml = r#"
states:
  - id: s0
    actions:
      - id: a0
        outcomes:
          - next: s0
            prob: 0.9
            reward: 1.0
"#;

    let spec: MdpSpec = serde_yaml::from_str(yaml).expect("valid syntax");
    let err = spec.compile().expect_err("compile should fail");

    assert!(matches!(err, MdpError::ProbabilitySum { .. }));
}

#[test]
fn validation_fails_for_unknown_state_reference() {
    let yaml = r#"
states:
  - id: s0
    actions:
      - id: a0
        outcomes:
          - next: missing
            prob: 1.0
            reward: 1.0
"#;

    let spec: MdpSpec = serde_yaml::from_str(yaml).expect("valid syntax");
    let err = spec.compile().expect_err("compile should fail");

    assert!(matches!(err, MdpError::UnknownNextState { .. }));
}

#[test]
fn validation_fails_for_uneven_action_counts() {
    let yaml = r#"
states:
  - id: s0
    actions:
      - id: a0
        outcomes:
          - next: s1
            prob: 1.0
            reward: 0.0
      - id: a1
        outcomes:
          - next: s1
            prob: 1.0
            reward: 0.0
  - id: s1
    actions:
      - id: a0
        outcomes:
          - next: s0
            prob: 1.0
            reward: 0.0
"#;

    let spec: MdpSpec = serde_yaml::from_str(yaml).expect("valid syntax");
    let err = spec.compile().expect_err("compile should fail");

    assert!(matches!(err, MdpError::ActionCountMismatch { .. }));
}

#[test]
fn validation_fails_for_terminal_state_with_actions() {
    let yaml = r#"
states:
  - id: s0
    terminal: true
    actions:
      - id: a0
        outcomes:
          - next: s0
            prob: 1.0
            reward: 0.0
"#;

    let spec: MdpSpec = serde_yaml::from_str(yaml).expect("valid syntax");
    let err = spec.compile().expect_err("compile should fail");

    assert!(matches!(err, MdpError::TerminalStateHasActions { .. }));
}

#[test]
fn builder_round_trips_through_both_solvers() {
    let mut builder = MdpBuilder::new();
    builder.add_state("start", false);
    builder.add_state("mid", false);
    builder.add_state("goal", true);

    for state in ["start", "mid"] {
        builder.add_action(state, "stay").expect("state exists");
        builder.add_action(state, "advance").expect("state exists");
    }
    builder
        .add_outcome("start", "stay", "start", 1.0, 0.0)
        .expect("action exists");
    builder
        .add_outcome("start", "advance", "mid", 1.0, 0.0)
        .expect("action exists");
    builder
        .add_outcome("mid", "stay", "mid", 1.0, 0.0)
        .expect("action exists");
    builder
        .add_outcome("mid", "advance", "goal", 1.0, 1.0)
        .expect("action exists");

    let compiled = builder.compile().expect("compile should succeed");
    let config = SolveConfig {
        tolerance: 1e-9,
        ..SolveConfig::default()
    };

    let pi = policy_iteration(&compiled, &config).expect("solve should succeed");
    let vi = value_iteration(&compiled, &config).expect("solve should succeed");

    assert!(pi.converged);
    assert!(vi.converged);

    // Advance everywhere except the absorbing goal.
    let chosen: Vec<usize> = pi.policy.actions().iter().map(|a| a.index()).collect();
    assert_eq!(chosen, vec![1, 1, 0]);

    for (a, b) in pi.values.iter().zip(&vi.values) {
        assert!((a - b).abs() < 1e-6);
    }
}

#[test]
fn builder_rejects_unknown_references() {
    let mut builder = MdpBuilder::new();
    builder.add_state("s0", false);

    let err = builder
        .add_action("missing", "a0")
        .expect_err("unknown state should fail");
    assert!(matches!(err, MdpError::BuilderUnknownState { .. }));

    let err = builder
        .add_outcome("s0", "missing", "s0", 1.0, 0.0)
        .expect_err("unknown action should fail");
    assert!(matches!(err, MdpError::BuilderUnknownAction { .. }));
}

#[test]
fn repeated_solves_of_a_compiled_model_are_identical() {
    let spec: MdpSpec = serde_yaml::from_str(VALID_MDP_YAML).expect("valid yaml");
    let compiled = spec.compile().expect("compile should succeed");
    let config = SolveConfig::default();

    let first = policy_iteration(&compiled, &config).expect("solve should succeed");
    let second = policy_iteration(&compiled, &config).expect("solve should succeed");

    assert_eq!(first.values, second.values);
    assert_eq!(first.policy, second.policy);
}
