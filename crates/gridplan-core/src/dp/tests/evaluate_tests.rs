use super::{TableModel, chain_model, outcome};
use crate::{Policy, SolveConfig, evaluate_policy};

fn config(tolerance: f64, max_sweeps: usize) -> SolveConfig {
    SolveConfig {
        gamma: 0.9,
        max_sweeps,
        max_rounds: 100,
        tolerance,
        zero_after_convergence: Vec::new(),
    }
}

#[test]
fn chain_evaluation_converges_in_two_sweeps() {
    let model = chain_model();
    let policy = Policy::zeroed(2);
    let mut values = vec![0.0; 2];

    let sweeps = evaluate_policy(&model, &config(1e-6, 1000), &policy, &mut values);

    // Sweep one sets V[0] = 1 and leaves V[1] = 0; sweep two changes nothing.
    assert_eq!(sweeps, 2);
    assert_eq!(values, vec![1.0, 0.0]);
}

#[test]
fn terminal_outcomes_contribute_no_continuation() {
    let model = TableModel {
        action_count: 1,
        rows: vec![
            vec![vec![outcome(1.0, 1, 1.0, true)]],
            vec![vec![outcome(1.0, 1, 0.0, true)]],
        ],
    };
    let policy = Policy::zeroed(2);
    // A stale successor value must be ignored by the terminal branch.
    let mut values = vec![0.0, 5.0];

    evaluate_policy(&model, &config(1e-6, 1), &policy, &mut values);

    assert_eq!(values, vec![1.0, 0.0]);
}

#[test]
fn updates_are_visible_within_a_sweep() {
    // Two states feeding each other, both rewarding 1. A double-buffered
    // sweep would leave V[1] = 1; the in-place sweep must read the fresh
    // V[0] and produce 1 + 0.9 * 1.
    let model = TableModel {
        action_count: 1,
        rows: vec![
            vec![vec![outcome(1.0, 1, 1.0, false)]],
            vec![vec![outcome(1.0, 0, 1.0, false)]],
        ],
    };
    let policy = Policy::zeroed(2);
    let mut values = vec![0.0; 2];

    let sweeps = evaluate_policy(&model, &config(1e-9, 1), &policy, &mut values);

    assert_eq!(sweeps, 1);
    assert_eq!(values, vec![1.0, 1.9]);
}

#[test]
fn sweep_cap_returns_partial_values_without_error() {
    let model = TableModel {
        action_count: 1,
        rows: vec![vec![vec![outcome(1.0, 0, 1.0, false)]]],
    };
    let policy = Policy::zeroed(1);
    let mut values = vec![0.0];
    let capped = config(1e-9, 3);

    let sweeps = evaluate_policy(&model, &capped, &policy, &mut values);

    // Three sweeps of 1 + 0.9 * V: 1, 1.9, 2.71. The cap is the caller's
    // signal of non-convergence, not an error.
    assert_eq!(sweeps, capped.max_sweeps);
    assert!((values[0] - 2.71).abs() < 1e-12);
}

#[test]
fn evaluation_warm_starts_from_supplied_values() {
    let model = chain_model();
    let policy = Policy::zeroed(2);
    let mut values = vec![1.0, 0.0];

    // Already at the fixed point: the first sweep sees no change.
    let sweeps = evaluate_policy(&model, &config(1e-6, 1000), &policy, &mut values);

    assert_eq!(sweeps, 1);
    assert_eq!(values, vec![1.0, 0.0]);
}
