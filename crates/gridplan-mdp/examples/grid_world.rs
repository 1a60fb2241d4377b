use std::collections::HashMap;

use gridplan_core::{SolveConfig, SolveSnapshot, greedy_policy, policy_iteration, value_iteration};
use gridplan_mdp::{CompiledMdp, MdpBuilder, MdpError};

const WIDTH: usize = 4;
const HEIGHT: usize = 4;

/// Cells the agent falls into and the run ends with no reward.
const HOLES: [(usize, usize); 3] = [(1, 1), (2, 3), (3, 0)];
/// Entering the goal pays 1 and ends the run.
const GOAL: (usize, usize) = (3, 3);

const LEFT: usize = 0;
const DOWN: usize = 1;
const RIGHT: usize = 2;
const UP: usize = 3;

fn cell_id(row: usize, col: usize) -> String {
    format!("r{row}c{col}")
}

fn is_terminal_cell(row: usize, col: usize) -> bool {
    HOLES.contains(&(row, col)) || (row, col) == GOAL
}

/// Deterministic move with walls bouncing the agent back in place.
fn destination(row: usize, col: usize, action: usize) -> (usize, usize) {
    match action {
        LEFT => (row, col.saturating_sub(1)),
        DOWN => ((row + 1).min(HEIGHT - 1), col),
        RIGHT => (row, (col + 1).min(WIDTH - 1)),
        UP => (row.saturating_sub(1), col),
        _ => (row, col),
    }
}

fn build_grid() -> Result<CompiledMdp, MdpError> {
    let mut builder = MdpBuilder::new();

    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            builder.add_state(cell_id(row, col), is_terminal_cell(row, col));
        }
    }

    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            if is_terminal_cell(row, col) {
                continue;
            }
            let id = cell_id(row, col);
            for (action, name) in [(LEFT, "left"), (DOWN, "down"), (RIGHT, "right"), (UP, "up")] {
                let (next_row, next_col) = destination(row, col, action);
                let reward = if (next_row, next_col) == GOAL { 1.0 } else { 0.0 };
                builder.add_action(&id, name)?;
                builder.add_outcome(&id, name, cell_id(next_row, next_col), 1.0, reward)?;
            }
        }
    }

    builder.compile()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = build_grid()?;
    let config = SolveConfig {
        tolerance: 1e-9,
        ..SolveConfig::default()
    };

    let pi = policy_iteration(&model, &config)?;
    println!(
        "policy iteration: {} rounds, {} evaluation sweeps, converged: {}",
        pi.improvement_rounds, pi.evaluation_sweeps, pi.converged
    );

    let vi = value_iteration(&model, &config)?;
    println!(
        "value iteration: {} sweeps, converged: {}",
        vi.sweeps, vi.converged
    );

    let labels = HashMap::from([(LEFT, "<"), (DOWN, "v"), (RIGHT, ">"), (UP, "^")]);
    let rendered = pi.policy.render(&labels);

    println!("\ngreedy policy (holes and goal render their action 0):");
    for row in 0..HEIGHT {
        let line: Vec<&str> = (0..WIDTH)
            .map(|col| rendered[row * WIDTH + col].as_str())
            .collect();
        println!("  {}", line.join(" "));
    }

    println!("\nstate values under the optimal policy:");
    for row in 0..HEIGHT {
        let line: Vec<String> = (0..WIDTH)
            .map(|col| format!("{:6.3}", pi.values[row * WIDTH + col]))
            .collect();
        println!("  {}", line.join(" "));
    }

    // The two solvers should land on the same greedy policy.
    assert_eq!(greedy_policy(&model, config.gamma, &vi.values), pi.policy);

    let snapshot = SolveSnapshot::new(
        &config,
        &pi.values,
        &pi.policy,
        pi.evaluation_sweeps,
        pi.converged,
    );
    println!("\nsnapshot:\n{}", snapshot.to_json_string()?);

    Ok(())
}
