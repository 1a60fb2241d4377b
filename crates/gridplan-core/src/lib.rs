mod dp;

pub use dp::bellman::expected_return;
pub use dp::config::{SolveConfig, SolveConfigError};
pub use dp::evaluate::evaluate_policy;
pub use dp::greedy::{greedy_policy, improve_policy};
pub use dp::ids::{ActionId, StateId};
pub use dp::model::{Outcome, TransitionModel};
pub use dp::policy::Policy;
pub use dp::policy_iteration::{
    PolicyIterationRun, RoundMetrics, policy_iteration, policy_iteration_with_hook,
};
pub use dp::snapshot::SolveSnapshot;
pub use dp::value_iteration::{
    SweepMetrics, ValueIterationRun, value_iteration, value_iteration_with_hook,
};
