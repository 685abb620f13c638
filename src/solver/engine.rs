use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::solver::{
    assignment::Assignment,
    problem::{ConstraintId, Problem},
    value::{Value, Variable},
};

/// Counters for a single constraint, keyed by [`ConstraintId`] in
/// [`SearchStats`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerConstraintStats {
    /// How many times `satisfied` was evaluated.
    pub checks: u64,
    /// How many of those evaluations reported a violation.
    pub violations: u64,
    /// Total time spent inside `satisfied`, in microseconds.
    pub time_spent_micros: u64,
}

/// Counters collected over one `solve` call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Recursion steps taken (one per variable branched on).
    pub nodes_visited: u64,
    /// Candidate values undone after a failed recursive descent.
    pub backtracks: u64,
    /// Candidate values rejected by a constraint before recursing.
    pub prunings: u64,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

/// The engine: a deterministic, recursive, depth-first backtracking search.
///
/// The solver branches on the first unassigned variable in the problem's
/// variable order and tries candidate values in domain order. After each
/// tentative assignment it evaluates only the constraints registered under
/// the branched variable; a violation prunes the candidate without
/// recursing. The first complete assignment found is returned immediately.
///
/// No constraint propagation, no dynamic variable ordering, no restarts:
/// worst case is exponential in the number of variables, with pruning as the
/// sole mitigation. The search space is finite, so `solve` always
/// terminates.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    pub fn new() -> Self {
        Self
    }

    /// Attempts to solve the given problem.
    ///
    /// Returns `(Some(assignment), stats)` with a complete satisfying
    /// assignment, or `(None, stats)` if no assignment satisfies every
    /// constraint. Repeated calls over the same problem return the identical
    /// result.
    pub fn solve<V: Variable, D: Value>(
        &self,
        problem: &Problem<V, D>,
    ) -> (Option<Assignment<V, D>>, SearchStats) {
        self.search(problem, Assignment::new(), SearchStats::default())
    }

    fn search<V: Variable, D: Value>(
        &self,
        problem: &Problem<V, D>,
        assignment: Assignment<V, D>,
        mut stats: SearchStats,
    ) -> (Option<Assignment<V, D>>, SearchStats) {
        stats.nodes_visited += 1;

        // Base case: every variable assigned. Each step below only commits
        // values that kept all touched constraints satisfied, so a complete
        // assignment is a solution.
        let Some(variable) = problem
            .variables()
            .iter()
            .find(|variable| !assignment.is_assigned(variable))
        else {
            return (Some(assignment), stats);
        };

        debug!(variable = ?variable, "branching");

        for value in problem.domain(variable) {
            let candidate = assignment.with(variable.clone(), value.clone());

            if self.consistent(problem, variable, &candidate, &mut stats) {
                let (found, new_stats) = self.search(problem, candidate, stats);
                stats = new_stats;
                if found.is_some() {
                    return (found, stats);
                }
                stats.backtracks += 1;
                debug!(variable = ?variable, value = ?value, "backtracking");
            } else {
                stats.prunings += 1;
            }
        }

        // Every candidate for this variable is a dead end; the caller
        // backtracks one level further.
        (None, stats)
    }

    /// Evaluates every constraint registered under `variable` against the
    /// candidate assignment. Constraints scoped entirely to other variables
    /// are not re-checked; they were satisfied when their variables were
    /// committed.
    fn consistent<V: Variable, D: Value>(
        &self,
        problem: &Problem<V, D>,
        variable: &V,
        candidate: &Assignment<V, D>,
        stats: &mut SearchStats,
    ) -> bool {
        for &id in problem.constraints_for(variable) {
            let constraint = &problem.constraints()[id];
            let constraint_stats = stats.constraint_stats.entry(id).or_default();

            let start_time = Instant::now();
            let satisfied = constraint.satisfied(candidate);
            constraint_stats.checks += 1;
            constraint_stats.time_spent_micros += start_time.elapsed().as_micros() as u64;

            if !satisfied {
                constraint_stats.violations += 1;
                return false;
            }
        }
        true
    }
}

impl Default for BacktrackingSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        error::ConfigurationError,
        solver::{
            constraints::{
                equal::EqualConstraint, fixed_value::FixedValueConstraint,
                not_equal::NotEqualConstraint,
            },
            problem::Problem,
        },
    };

    fn two_variable_problem() -> Problem<&'static str, i64> {
        let mut domains = HashMap::new();
        domains.insert("X", vec![1, 2]);
        domains.insert("Y", vec![1, 2]);
        Problem::new(vec!["X", "Y"], domains).unwrap()
    }

    #[test]
    fn finds_first_solution_in_domain_order() {
        let mut problem = two_variable_problem();
        problem
            .add_constraint(NotEqualConstraint::new("X", "Y"))
            .unwrap();

        let solution = problem.search().expect("solvable");
        assert_eq!(solution.get(&"X"), Some(&1));
        assert_eq!(solution.get(&"Y"), Some(&2));
    }

    #[test]
    fn contradictory_constraints_yield_no_solution() {
        let mut problem = two_variable_problem();
        problem
            .add_constraint(EqualConstraint::new("X", "Y"))
            .unwrap();
        problem
            .add_constraint(NotEqualConstraint::new("X", "Y"))
            .unwrap();

        assert!(problem.search().is_none());
    }

    #[test]
    fn unconstrained_problem_takes_first_values() {
        let problem = two_variable_problem();
        let solution = problem.search().expect("solvable");
        assert_eq!(solution.get(&"X"), Some(&1));
        assert_eq!(solution.get(&"Y"), Some(&1));
        assert_eq!(solution.len(), 2);
    }

    #[test]
    fn empty_domain_means_no_solution() {
        let mut domains = HashMap::new();
        domains.insert("X", vec![1, 2]);
        domains.insert("Y", Vec::new());
        let problem = Problem::new(vec!["X", "Y"], domains).unwrap();

        let (solution, stats) = BacktrackingSolver::new().solve(&problem);
        assert!(solution.is_none());
        // X's two candidates each dead-end on Y immediately; nothing beyond
        // Y's frame is ever explored.
        assert_eq!(stats.nodes_visited, 3);
    }

    #[test]
    fn repeated_searches_are_deterministic() {
        let mut problem = two_variable_problem();
        problem
            .add_constraint(NotEqualConstraint::new("X", "Y"))
            .unwrap();

        let first = problem.search().expect("solvable");
        let second = problem.search().expect("solvable");
        for variable in problem.variables() {
            assert_eq!(first.get(variable), second.get(variable));
        }
    }

    #[test]
    fn fixed_value_pins_a_variable() {
        let mut problem = two_variable_problem();
        problem
            .add_constraint(FixedValueConstraint::new("X", 2))
            .unwrap();
        problem
            .add_constraint(NotEqualConstraint::new("X", "Y"))
            .unwrap();

        let solution = problem.search().expect("solvable");
        assert_eq!(solution.get(&"X"), Some(&2));
        assert_eq!(solution.get(&"Y"), Some(&1));
    }

    #[test]
    fn missing_domain_is_a_configuration_error() {
        let mut domains = HashMap::new();
        domains.insert("X", vec![1]);
        let error = Problem::<_, i64>::new(vec!["X", "Y"], domains).unwrap_err();
        assert!(matches!(
            error.configuration(),
            ConfigurationError::MissingDomain { .. }
        ));
    }

    #[test]
    fn stray_domain_is_a_configuration_error() {
        let mut domains = HashMap::new();
        domains.insert("X", vec![1]);
        domains.insert("Z", vec![1]);
        let error = Problem::<_, i64>::new(vec!["X"], domains).unwrap_err();
        assert!(matches!(
            error.configuration(),
            ConfigurationError::UnknownDomainVariable { .. }
        ));
    }

    #[test]
    fn out_of_scope_constraint_is_a_configuration_error() {
        let mut problem = two_variable_problem();
        let error = problem
            .add_constraint(NotEqualConstraint::new("X", "Z"))
            .unwrap_err();
        assert!(matches!(
            error.configuration(),
            ConfigurationError::UnknownScopeVariable { .. }
        ));
    }

    #[test]
    fn stats_count_prunings_and_checks() {
        let mut problem = two_variable_problem();
        problem
            .add_constraint(NotEqualConstraint::new("X", "Y"))
            .unwrap();

        let (solution, stats) = BacktrackingSolver::new().solve(&problem);
        assert!(solution.is_some());
        // X=1 passes, Y=1 is pruned, Y=2 passes.
        assert_eq!(stats.prunings, 1);
        let constraint_stats = stats.constraint_stats.get(&0).unwrap();
        assert_eq!(constraint_stats.checks, 3);
        assert_eq!(constraint_stats.violations, 1);
    }

    mod prop_tests {
        use proptest::prelude::*;

        use super::*;

        /// A random graph-colouring instance: `nodes` variables, three
        /// colours each, one not-equal constraint per edge.
        fn colouring_problem(
            nodes: usize,
            edges: &[(usize, usize)],
        ) -> Problem<usize, u8> {
            let variables: Vec<usize> = (0..nodes).collect();
            let domains = variables
                .iter()
                .map(|&node| (node, vec![0u8, 1, 2]))
                .collect();
            let mut problem = Problem::new(variables, domains).unwrap();
            for &(a, b) in edges {
                problem.add_constraint(NotEqualConstraint::new(a, b)).unwrap();
            }
            problem
        }

        fn edges_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
            (2..10usize).prop_flat_map(|nodes| {
                let edges = proptest::collection::vec(
                    (0..nodes, 0..nodes).prop_filter("no self-loops", |(a, b)| a != b),
                    0..15,
                );
                (Just(nodes), edges)
            })
        }

        proptest! {
            #[test]
            fn solutions_satisfy_every_constraint((nodes, edges) in edges_strategy()) {
                let problem = colouring_problem(nodes, &edges);
                if let Some(solution) = problem.search() {
                    prop_assert_eq!(solution.len(), nodes);
                    for constraint in problem.constraints() {
                        prop_assert!(constraint.satisfied(&solution));
                    }
                    for variable in problem.variables() {
                        let value = solution.get(variable).unwrap();
                        prop_assert!(problem.domain(variable).contains(value));
                    }
                }
            }

            #[test]
            fn removing_a_constraint_preserves_solvability(
                (nodes, edges) in edges_strategy()
            ) {
                let full = colouring_problem(nodes, &edges);
                if full.search().is_some() && !edges.is_empty() {
                    let relaxed = colouring_problem(nodes, &edges[..edges.len() - 1]);
                    prop_assert!(relaxed.search().is_some());
                }
            }
        }
    }
}
